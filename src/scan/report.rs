//! Scan report and status taxonomy
//!
//! One [`ScanReport`] is produced per URL, exactly once, by a single scan
//! invocation. It is mutated only by that invocation and handed to the
//! orchestrator as a finished, read-only value.

use serde::Serialize;
use std::fmt;

/// Terminal classification of a page scan.
///
/// Failures carry their kind and message as data so downstream consumers can
/// branch on kind; `Display` renders the stable literal strings the summary
/// table and any parsing consumers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanStatus {
    /// Marker found in the head and/or body markup.
    Found { in_head: bool, in_body: bool },
    /// Marker found in the rendered document, but outside head and body
    /// markup (e.g. on the html element itself or in a doctype comment).
    FoundElsewhere,
    /// Marker absent from the rendered document.
    NotFound,
    /// Page resolved to a different URL and the marker was absent.
    Redirect,
    /// Server answered 404; extraction was skipped.
    NotFound404,
    /// Navigation exceeded the load timeout.
    Timeout,
    /// Any other navigation failure.
    GenericError(String),
    /// The browser session could not be started.
    BrowserInitError(String),
}

impl ScanStatus {
    /// Construct a `Found` status; at least one location must be set.
    #[must_use]
    pub fn found(in_head: bool, in_body: bool) -> Self {
        debug_assert!(in_head || in_body);
        Self::Found { in_head, in_body }
    }

    /// True when the marker was found anywhere.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::FoundElsewhere)
    }

    /// True for any warning or error outcome (redirect, 404, timeout,
    /// navigation or browser failure).
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::Redirect
                | Self::NotFound404
                | Self::Timeout
                | Self::GenericError(_)
                | Self::BrowserInitError(_)
        )
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { in_head, in_body } => {
                let mut locations = Vec::with_capacity(2);
                if *in_head {
                    locations.push("HEAD");
                }
                if *in_body {
                    locations.push("BODY");
                }
                write!(f, "found ({})", locations.join(", "))
            }
            Self::FoundElsewhere => write!(f, "found (elsewhere)"),
            Self::NotFound => write!(f, "not found"),
            Self::Redirect => write!(f, "redirect"),
            Self::NotFound404 => write!(f, "not-found-404"),
            Self::Timeout => write!(f, "timeout"),
            Self::GenericError(message) => write!(f, "generic error: {message}"),
            Self::BrowserInitError(message) => write!(f, "browser-init error: {message}"),
        }
    }
}

/// The structured result of investigating one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The originally requested URL, never mutated.
    pub url: String,
    /// Terminal classification, always set before the report is returned.
    pub status: ScanStatus,
    /// Marker present in the head markup.
    pub in_head: bool,
    /// Marker present in the body markup.
    pub in_body: bool,
    /// Marker present anywhere in the rendered document source.
    pub in_html: bool,
    /// 1-based line numbers of the rendered document containing the marker.
    pub line_numbers: Vec<usize>,
    /// 1-based line numbers of the independently fetched raw source
    /// containing the marker; empty if the fetch failed or no match.
    pub line_numbers_view_source: Vec<usize>,
    /// Append-only log of human-readable evidence lines.
    pub details: Vec<String>,
}

impl ScanReport {
    /// Fresh report with default (empty/false) findings.
    ///
    /// The initial status is `NotFound`; the scan overwrites it on every
    /// path before the report leaves the scanner.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: ScanStatus::NotFound,
            in_head: false,
            in_body: false,
            in_html: false,
            line_numbers: Vec::new(),
            line_numbers_view_source: Vec::new(),
            details: Vec::new(),
        }
    }

    /// Append one evidence line.
    pub fn note(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_literals_are_stable() {
        assert_eq!(ScanStatus::found(true, false).to_string(), "found (HEAD)");
        assert_eq!(ScanStatus::found(false, true).to_string(), "found (BODY)");
        assert_eq!(
            ScanStatus::found(true, true).to_string(),
            "found (HEAD, BODY)"
        );
        assert_eq!(ScanStatus::FoundElsewhere.to_string(), "found (elsewhere)");
        assert_eq!(ScanStatus::NotFound.to_string(), "not found");
        assert_eq!(ScanStatus::Redirect.to_string(), "redirect");
        assert_eq!(ScanStatus::NotFound404.to_string(), "not-found-404");
        assert_eq!(ScanStatus::Timeout.to_string(), "timeout");
        assert_eq!(
            ScanStatus::GenericError("boom".into()).to_string(),
            "generic error: boom"
        );
        assert_eq!(
            ScanStatus::BrowserInitError("no chrome".into()).to_string(),
            "browser-init error: no chrome"
        );
    }

    #[test]
    fn warning_classification() {
        assert!(ScanStatus::Timeout.is_warning());
        assert!(ScanStatus::Redirect.is_warning());
        assert!(ScanStatus::NotFound404.is_warning());
        assert!(!ScanStatus::NotFound.is_warning());
        assert!(!ScanStatus::found(true, false).is_warning());
        assert!(ScanStatus::found(true, false).is_found());
        assert!(ScanStatus::FoundElsewhere.is_found());
        assert!(!ScanStatus::NotFound.is_found());
    }
}
