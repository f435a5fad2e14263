//! Scan orchestration
//!
//! Bounded-concurrency dispatch of page scans plus the data shaping that
//! turns finished reports into tables and counters.

pub mod orchestrator;
pub mod progress;
pub mod tables;

pub use orchestrator::{ScanOutcome, UrlScanner, run_scans};
pub use progress::{ConsoleProgress, NoOpProgress, ProgressReporter};
pub use tables::{DetailRow, ScanTotals, SummaryRow};
