//! Progress reporting abstraction for scan batches
//!
//! Implementations can print to the console, send updates to channels, or
//! stay silent. The orchestrator invokes the reporter from its single
//! collection point, so implementations never see interleaved calls for the
//! same batch.

use super::tables::ScanTotals;
use crate::scan::ScanStatus;

/// Observer for batch lifecycle events.
pub trait ProgressReporter: Send + Sync {
    /// A batch of `total` URLs is about to be scanned.
    fn report_batch_started(&self, total: usize);

    /// One scan finished; `done` of `total` reports are now collected.
    fn report_scan_completed(&self, done: usize, total: usize, url: &str, status: &ScanStatus);

    /// All scans finished; `totals` is the final aggregate breakdown.
    fn report_batch_finished(&self, totals: &ScanTotals);
}

/// Progress reporter that does nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_batch_started(&self, _total: usize) {}

    #[inline(always)]
    fn report_scan_completed(&self, _done: usize, _total: usize, _url: &str, _status: &ScanStatus) {
    }

    #[inline(always)]
    fn report_batch_finished(&self, _totals: &ScanTotals) {}
}

/// Line-oriented console reporter for operators.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report_batch_started(&self, total: usize) {
        println!("checking {total} URLs...");
    }

    fn report_scan_completed(&self, done: usize, total: usize, url: &str, status: &ScanStatus) {
        println!("{done} of {total} done: {url}: {status}");
    }

    fn report_batch_finished(&self, totals: &ScanTotals) {
        println!();
        println!("summary:");
        println!("  total:       {}", totals.total);
        println!("  found:       {}", totals.found);
        println!("  not found:   {}", totals.not_found);
        println!("  warnings:    {}", totals.warnings);
        println!("  head only:   {}", totals.head_only);
        println!("  body only:   {}", totals.body_only);
        println!("  head + body: {}", totals.both);
    }
}
