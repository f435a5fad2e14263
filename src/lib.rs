//! tagcheck - concurrent marker audit for rendered web pages
//!
//! Drives a headless Chromium instance to check whether a marker string
//! (for example a GTM container id) appears in each page's rendered HEAD,
//! BODY, or script tags, cross-checked against an independently fetched
//! raw view-source document with line-number evidence from both.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tagcheck::config::ScanConfig;
//! use tagcheck::engine::{NoOpProgress, run_scans};
//! use tagcheck::scan::{ChromiumRenderer, PageScanner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ScanConfig::builder().marker("GTM-MBWPPD2").build()?;
//! let renderer = ChromiumRenderer::new(&config);
//! let scanner = Arc::new(PageScanner::new(renderer, config.clone())?);
//! let urls = vec!["https://example.com".to_string()];
//! let outcome = run_scans(scanner, urls, config.concurrency(), &NoOpProgress).await;
//! println!("found on {} of {} pages", outcome.totals.found, outcome.totals.total);
//! # Ok(())
//! # }
//! ```

pub mod browser_setup;
pub mod config;
pub mod engine;
pub mod input;
pub mod line_index;
pub mod output;
pub mod scan;
pub mod utils;
pub mod view_source;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use engine::{ScanOutcome, ScanTotals, run_scans};
pub use scan::{ChromiumRenderer, PageScanner, ScanReport, ScanStatus};
