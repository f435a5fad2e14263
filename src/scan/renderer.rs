//! Page-renderer capability traits
//!
//! The scanner never talks to a concrete rendering engine; it drives a
//! [`PageSession`] obtained from a [`Renderer`]. The production
//! implementation is Chrome over CDP (see [`crate::scan::chromium`]); tests
//! substitute fake sessions serving canned markup.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a rendering session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Navigation did not complete within the configured bound.
    #[error("navigation timed out after {0:?}")]
    Timeout(Duration),

    /// Any other browser-side failure.
    #[error("{0}")]
    Browser(String),
}

/// Outcome of a successful navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// URL the page resolved to after any redirects.
    pub final_url: String,
    /// HTTP status of the main document response, when observable.
    pub status_code: Option<u16>,
}

/// One script element found under a document section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptRef {
    /// Inline script payload; empty for external scripts.
    #[serde(default)]
    pub content: String,
    /// `src` attribute, if present.
    #[serde(default)]
    pub src: Option<String>,
}

/// Captured markup of a document section plus its script children.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionCapture {
    /// Inner markup of the section element.
    pub html: String,
    /// Script elements nested under the section, in document order.
    #[serde(default)]
    pub scripts: Vec<ScriptRef>,
}

/// The two document sections the scanner classifies matches into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSection {
    Head,
    Body,
}

impl DocumentSection {
    /// Label used in status strings and evidence lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Body => "BODY",
        }
    }
}

/// A live, isolated page rendering session.
///
/// Implementations own whatever engine state backs the page and release it
/// in [`PageSession::close`], which the scanner calls on every exit path.
pub trait PageSession: Send + Sync {
    /// Navigate to `url`, waiting until the document's core content has
    /// attached, bounded by `timeout`.
    fn navigate(
        &mut self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<Navigation, SessionError>> + Send;

    /// Wait for deferred/async script injection to complete before
    /// inspection.
    fn settle(&self, delay: Duration) -> impl Future<Output = ()> + Send;

    /// The URL the page currently sits on. Scripts can redirect after
    /// navigation completes, so callers sample this again after settling.
    fn current_url(&self) -> impl Future<Output = Result<String, SessionError>> + Send;

    /// Capture a section's inner markup and its script children.
    /// `Ok(None)` when the document has no such section.
    fn capture_section(
        &self,
        section: DocumentSection,
    ) -> impl Future<Output = Result<Option<SectionCapture>, SessionError>> + Send;

    /// Full rendered document markup.
    fn full_html(&self) -> impl Future<Output = Result<String, SessionError>> + Send;

    /// Release all session resources. Must be infallible from the caller's
    /// perspective; implementations log their own cleanup failures.
    fn close(self) -> impl Future<Output = ()> + Send
    where
        Self: Sized;
}

/// Factory for fresh, isolated page sessions.
pub trait Renderer: Send + Sync {
    type Session: PageSession;

    /// Open a new session with no shared cookies, cache, or rendering state.
    fn open_session(&self) -> impl Future<Output = Result<Self::Session, SessionError>> + Send;
}
