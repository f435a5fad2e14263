//! Concurrent scan orchestration
//!
//! Dispatches every URL to a scanner under a bounded concurrency ceiling,
//! collects reports as they complete, and folds them into the output tables
//! and aggregate counters. A failure in one scan never affects another:
//! scanners return reports, not errors, and a panicked task costs only its
//! own report.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{error, info};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::progress::ProgressReporter;
use super::tables::{DetailRow, ScanTotals, SummaryRow};
use crate::scan::ScanReport;

/// Seam between the orchestrator and the page scanner.
///
/// Production uses [`crate::scan::PageScanner`]; tests substitute scanners
/// that return canned reports without a browser.
pub trait UrlScanner: Send + Sync + 'static {
    /// Investigate one URL. Infallible by contract: every failure mode is
    /// folded into the returned report.
    fn scan(&self, url: String) -> impl Future<Output = ScanReport> + Send;
}

/// Everything a finished batch produces: the raw reports (completion
/// order), both derived tables, and the aggregate counters.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub reports: Vec<ScanReport>,
    pub summary: Vec<SummaryRow>,
    pub details: Vec<DetailRow>,
    pub totals: ScanTotals,
}

/// Scan `urls` with at most `concurrency` scans in flight at once.
///
/// Reports are collected in completion order, which is non-deterministic
/// across runs; rows are keyed by URL for consumers that need a stable
/// order. An empty URL list short-circuits to empty tables and zero totals
/// without invoking the scanner.
pub async fn run_scans<S, P>(
    scanner: Arc<S>,
    urls: Vec<String>,
    concurrency: usize,
    progress: &P,
) -> ScanOutcome
where
    S: UrlScanner,
    P: ProgressReporter,
{
    if urls.is_empty() {
        info!("no URLs to scan");
        return ScanOutcome::default();
    }

    let total = urls.len();
    progress.report_batch_started(total);

    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = FuturesUnordered::new();

    for url in urls {
        let scanner = Arc::clone(&scanner);
        let semaphore = Arc::clone(&semaphore);
        tasks.push(tokio::spawn(async move {
            // The semaphore lives for the whole batch and is never closed.
            // Should that ever change, the URL still gets a report; the
            // ceiling violation is logged rather than hidden.
            let _permit: Option<tokio::sync::OwnedSemaphorePermit> =
                match semaphore.acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(e) => {
                        error!("scan semaphore closed unexpectedly: {e}");
                        None
                    }
                };
            scanner.scan(url).await
        }));
    }

    let mut reports = Vec::with_capacity(total);
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(report) => {
                progress.report_scan_completed(
                    reports.len() + 1,
                    total,
                    &report.url,
                    &report.status,
                );
                reports.push(report);
            }
            Err(e) => {
                error!("scan task panicked: {e}");
            }
        }
    }

    let totals = ScanTotals::tally(&reports);
    progress.report_batch_finished(&totals);

    ScanOutcome {
        summary: reports.iter().map(SummaryRow::from_report).collect(),
        details: reports.iter().map(DetailRow::from_report).collect(),
        totals,
        reports,
    }
}
