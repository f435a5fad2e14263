//! Type-safe builder for [`ScanConfig`] using the typestate pattern
//!
//! The marker is the one field a scan cannot run without, so `build()` is
//! only available once `marker()` has been called. Everything else has a
//! sensible default.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScanConfig;
use crate::utils::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS, MAX_SAMPLE_MATCHES,
};

// Type states for the builder
pub struct WithMarker;

pub struct ScanConfigBuilder<State = ()> {
    pub(crate) marker: Option<String>,
    pub(crate) concurrency: usize,
    pub(crate) page_load_timeout_secs: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) max_sample_matches: usize,
    pub(crate) headless: bool,
    pub(crate) profile_root: Option<PathBuf>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScanConfigBuilder<()> {
    fn default() -> Self {
        Self {
            marker: None,
            concurrency: DEFAULT_CONCURRENCY,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_sample_matches: MAX_SAMPLE_MATCHES,
            headless: true,
            profile_root: None,
            _phantom: PhantomData,
        }
    }
}

impl ScanConfig {
    /// Create a builder for configuring a `ScanConfig` with a fluent interface.
    #[must_use]
    pub fn builder() -> ScanConfigBuilder<()> {
        ScanConfigBuilder::default()
    }
}

impl ScanConfigBuilder<()> {
    /// Set the marker text to search for. Required before `build()`.
    pub fn marker(self, marker: impl Into<String>) -> ScanConfigBuilder<WithMarker> {
        ScanConfigBuilder {
            marker: Some(marker.into()),
            concurrency: self.concurrency,
            page_load_timeout_secs: self.page_load_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_sample_matches: self.max_sample_matches,
            headless: self.headless,
            profile_root: self.profile_root,
            _phantom: PhantomData,
        }
    }
}

// Optional knobs, available in any state
impl<State> ScanConfigBuilder<State> {
    /// Maximum number of page scans in flight at once. Clamped to at least 1.
    #[must_use]
    pub fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    /// Timeout for page navigation in seconds.
    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = secs;
        self
    }

    /// Delay between navigation and inspection, in milliseconds.
    #[must_use]
    pub fn settle_delay_ms(mut self, millis: u64) -> Self {
        self.settle_delay_ms = millis;
        self
    }

    /// Timeout for the direct view-source fetch, in seconds.
    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Cap on evidence samples recorded per document section.
    #[must_use]
    pub fn max_sample_matches(mut self, cap: usize) -> Self {
        self.max_sample_matches = cap;
        self
    }

    /// Run the browser headless (default) or headed for debugging.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Root directory for per-scan Chrome profiles.
    #[must_use]
    pub fn profile_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.profile_root = Some(root.into());
        self
    }
}

// Build is only available once the marker has been provided
impl ScanConfigBuilder<WithMarker> {
    pub fn build(self) -> Result<ScanConfig> {
        let marker = self.marker.ok_or_else(|| anyhow!("marker is required"))?;
        if marker.trim().is_empty() {
            return Err(anyhow!("marker must not be empty"));
        }

        Ok(ScanConfig {
            marker,
            concurrency: self.concurrency,
            page_load_timeout_secs: self.page_load_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_sample_matches: self.max_sample_matches,
            headless: self.headless,
            profile_root: self.profile_root,
        })
    }
}
