//! Chrome-backed page rendering session
//!
//! Implements the [`Renderer`]/[`PageSession`] capability over chromiumoxide.
//! Each session launches its own browser process with a unique profile
//! directory, so concurrent scans cannot contend on cookies, cache, or
//! profile locks.

use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::network::{EventResponseReceived, ResourceType};
use chromiumoxide::page::Page;
use futures::StreamExt;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::js_scripts::{BODY_CAPTURE_SCRIPT, HEAD_CAPTURE_SCRIPT};
use super::renderer::{
    DocumentSection, Navigation, PageSession, Renderer, SectionCapture, SessionError,
};
use crate::browser_setup::launch_browser;
use crate::config::ScanConfig;

/// How long to drain buffered network events after navigation while looking
/// for the main document response.
const RESPONSE_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Renderer that launches a private headless Chrome per session.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    headless: bool,
    profile_root: PathBuf,
}

impl ChromiumRenderer {
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            headless: config.headless(),
            profile_root: config
                .profile_root()
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
        }
    }
}

impl Renderer for ChromiumRenderer {
    type Session = ChromiumSession;

    async fn open_session(&self) -> Result<ChromiumSession, SessionError> {
        let profile_dir = self
            .profile_root
            .join(format!("tagcheck-profile-{}", Uuid::new_v4()));

        let (browser, handler) = launch_browser(self.headless, profile_dir.clone())
            .await
            .map_err(|e| SessionError::Browser(format!("{e:#}")))?;

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let mut session = ChromiumSession {
                    browser,
                    handler,
                    page: None,
                    profile_dir,
                };
                session.shutdown().await;
                return Err(SessionError::Browser(e.to_string()));
            }
        };

        Ok(ChromiumSession {
            browser,
            handler,
            page: Some(page),
            profile_dir,
        })
    }
}

/// One isolated browser process plus the page being scanned.
pub struct ChromiumSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Option<Page>,
    profile_dir: PathBuf,
}

impl ChromiumSession {
    fn page(&self) -> Result<&Page, SessionError> {
        self.page
            .as_ref()
            .ok_or_else(|| SessionError::Browser("page already closed".to_string()))
    }

    /// Scan buffered network events for the main document response status,
    /// preferring the response whose URL matches where the page ended up.
    async fn document_status(
        events: &mut (impl futures::Stream<Item = std::sync::Arc<EventResponseReceived>> + Unpin),
        final_url: &str,
    ) -> Option<u16> {
        let mut first_document: Option<u16> = None;

        let drained = tokio::time::timeout(RESPONSE_DRAIN_TIMEOUT, async {
            while let Some(event) = events.next().await {
                if event.r#type != ResourceType::Document {
                    continue;
                }
                let status = u16::try_from(event.response.status).ok();
                if event.response.url == final_url {
                    return status;
                }
                if first_document.is_none() {
                    first_document = status;
                }
            }
            None
        })
        .await;

        match drained {
            Ok(Some(status)) => Some(status),
            // Stream still open or exhausted without an exact URL match;
            // fall back to the first document response seen.
            _ => first_document,
        }
    }

    /// Tear everything down: Chrome process, CDP handler task, profile dir.
    async fn shutdown(&mut self) {
        self.page.take();

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
        }
        self.handler.abort();

        if let Err(e) = tokio::fs::remove_dir_all(&self.profile_dir).await {
            debug!(
                "Failed to remove profile dir {}: {e}",
                self.profile_dir.display()
            );
        }
    }
}

impl PageSession for ChromiumSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<Navigation, SessionError> {
        let page = self.page()?.clone();

        // Listen for network responses before navigating so the main
        // document's status is observable afterwards.
        let mut responses = page
            .event_listener::<EventResponseReceived>()
            .await
            .map_err(|e| SessionError::Browser(e.to_string()))?;

        let navigation = tokio::time::timeout(timeout, async {
            page.goto(url).await.map_err(|e| e.to_string())?;
            page.wait_for_navigation()
                .await
                .map_err(|e| e.to_string())?;
            Ok::<(), String>(())
        })
        .await;

        match navigation {
            Ok(Ok(())) => {}
            Ok(Err(message)) => return Err(SessionError::Browser(message)),
            Err(_) => return Err(SessionError::Timeout(timeout)),
        }

        let final_url = match page.url().await {
            Ok(Some(resolved)) => resolved,
            Ok(None) | Err(_) => url.to_string(),
        };

        let status_code = Self::document_status(&mut responses, &final_url).await;

        Ok(Navigation {
            final_url,
            status_code,
        })
    }

    async fn settle(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    async fn current_url(&self) -> Result<String, SessionError> {
        match self.page()?.url().await {
            Ok(Some(resolved)) => Ok(resolved),
            Ok(None) => Err(SessionError::Browser("page has no URL".to_string())),
            Err(e) => Err(SessionError::Browser(e.to_string())),
        }
    }

    async fn capture_section(
        &self,
        section: DocumentSection,
    ) -> Result<Option<SectionCapture>, SessionError> {
        let script = match section {
            DocumentSection::Head => HEAD_CAPTURE_SCRIPT,
            DocumentSection::Body => BODY_CAPTURE_SCRIPT,
        };

        let evaluation = self
            .page()?
            .evaluate(script)
            .await
            .map_err(|e| SessionError::Browser(e.to_string()))?;

        let value: serde_json::Value = evaluation
            .into_value()
            .map_err(|e| SessionError::Browser(format!("section capture result: {e}")))?;

        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| SessionError::Browser(format!("section capture parse: {e}")))
    }

    async fn full_html(&self) -> Result<String, SessionError> {
        self.page()?
            .content()
            .await
            .map_err(|e| SessionError::Browser(e.to_string()))
    }

    async fn close(mut self) {
        self.shutdown().await;
    }
}
