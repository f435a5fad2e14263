//! Shared configuration constants for tagcheck
//!
//! Default values used throughout the codebase to ensure consistency and
//! avoid magic numbers.

/// Default number of page scans allowed in flight at once.
///
/// Each scan owns a full headless Chrome instance, so the ceiling is kept
/// low. Raise it on machines with memory to spare, lower it when scanning
/// through a constrained network.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Default timeout for page navigation, in seconds.
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 10;

/// Default settle delay after navigation, in milliseconds.
///
/// Tag managers commonly inject their snippet from deferred or async
/// scripts, so inspection waits this long after the document attaches.
/// Longer delays catch more late-injected tags at the cost of slower scans.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1500;

/// Default timeout for the direct view-source fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Maximum number of (line number, line text) evidence samples recorded
/// per document section.
pub const MAX_SAMPLE_MATCHES: usize = 5;

/// User agent sent on direct view-source fetches, identifying the client.
pub const TAGCHECK_USER_AGENT: &str = "Mozilla/5.0 (compatible; tagcheck/0.1)";

/// Chrome user agent string used when launching the headless browser.
///
/// Kept on a current stable Chrome so pages serve the same markup they
/// would to a real visitor.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
