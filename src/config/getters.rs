//! Read-only accessors for [`ScanConfig`] fields

use std::path::Path;

use super::types::ScanConfig;

impl ScanConfig {
    /// The literal marker substring being searched for.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Maximum number of concurrent page scans.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Navigation timeout in seconds.
    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs
    }

    /// Settle delay in milliseconds.
    #[must_use]
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    /// View-source fetch timeout in seconds.
    #[must_use]
    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    /// Cap on evidence samples per document section.
    #[must_use]
    pub fn max_sample_matches(&self) -> usize {
        self.max_sample_matches
    }

    /// Whether the browser runs headless.
    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Root directory for per-scan Chrome profiles, if configured.
    #[must_use]
    pub fn profile_root(&self) -> Option<&Path> {
        self.profile_root.as_deref()
    }
}
