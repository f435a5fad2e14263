//! Core configuration type for scan runs
//!
//! [`ScanConfig`] carries every knob a scan batch needs: the marker text,
//! the concurrency ceiling, and the per-scan timeouts. It is an explicit
//! value passed into the orchestrator at call time; there is no
//! process-wide mutable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS, MAX_SAMPLE_MATCHES,
};

/// Configuration for a batch of page scans.
///
/// Built through [`ScanConfig::builder`], which requires the marker at
/// compile time and validates it is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// The literal substring searched for in page content. Never empty.
    pub(crate) marker: String,

    /// Maximum number of page scans in flight at once.
    pub(crate) concurrency: usize,

    /// Timeout for page navigation (document attach), in seconds.
    pub(crate) page_load_timeout_secs: u64,

    /// Delay after navigation before the document is inspected, giving
    /// deferred and async scripts time to inject the tag.
    pub(crate) settle_delay_ms: u64,

    /// Timeout for the direct view-source fetch, in seconds.
    pub(crate) fetch_timeout_secs: u64,

    /// Cap on (line number, line text) evidence samples per section.
    pub(crate) max_sample_matches: usize,

    /// Run Chrome headless. Headed mode is only useful for debugging.
    pub(crate) headless: bool,

    /// Root directory for per-scan Chrome profile directories.
    /// Defaults to the system temp directory when unset.
    pub(crate) profile_root: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: String::new(),
            concurrency: DEFAULT_CONCURRENCY,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_sample_matches: MAX_SAMPLE_MATCHES,
            headless: true,
            profile_root: None,
        }
    }
}

impl ScanConfig {
    /// Navigation timeout as a [`Duration`].
    #[must_use]
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    /// Settle delay as a [`Duration`].
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// View-source fetch timeout as a [`Duration`].
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
