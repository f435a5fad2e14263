//! Single-URL scan state machine
//!
//! [`PageScanner::scan_url`] drives one rendering session through
//! navigation, redirect/status classification, section extraction, and the
//! view-source cross-check, folding every failure into the report. It never
//! returns an error: a scan always yields exactly one [`ScanReport`].

use log::debug;
use std::future::Future;
use std::sync::Arc;
use url::Url;

use super::renderer::{DocumentSection, PageSession, Renderer, SectionCapture, SessionError};
use super::report::{ScanReport, ScanStatus};
use crate::config::ScanConfig;
use crate::engine::UrlScanner;
use crate::line_index::{find_all_line_numbers, find_sample_matches};
use crate::view_source::{build_client, fetch_view_source};

/// Scans one URL per invocation against a configured marker.
///
/// Holds the shared view-source HTTP client; every scan opens (and always
/// closes) its own rendering session.
pub struct PageScanner<R: Renderer> {
    renderer: R,
    config: Arc<ScanConfig>,
    http: reqwest::Client,
}

impl<R: Renderer> PageScanner<R> {
    pub fn new(renderer: R, config: ScanConfig) -> anyhow::Result<Self> {
        let http = build_client(config.fetch_timeout())?;
        Ok(Self {
            renderer,
            config: Arc::new(config),
            http,
        })
    }

    /// Investigate one URL and return its report.
    ///
    /// All failure modes are captured into `status`/`details`; session
    /// teardown runs on every exit path.
    pub async fn scan_url(&self, url: String) -> ScanReport {
        let mut report = ScanReport::new(url);

        let mut session = match self.renderer.open_session().await {
            Ok(session) => session,
            Err(e) => {
                report.status = ScanStatus::BrowserInitError(e.to_string());
                return report;
            }
        };

        self.run_scan(&mut session, &mut report).await;
        session.close().await;

        report
    }

    async fn run_scan(&self, session: &mut R::Session, report: &mut ScanReport) {
        let navigation = match session
            .navigate(&report.url, self.config.page_load_timeout())
            .await
        {
            Ok(navigation) => navigation,
            Err(SessionError::Timeout(_)) => {
                report.status = ScanStatus::Timeout;
                return;
            }
            Err(e) => {
                report.status = ScanStatus::GenericError(e.to_string());
                return;
            }
        };

        session.settle(self.config.settle_delay()).await;

        // Scripts can redirect during the settle window, so the resolved
        // URL is sampled after the delay, not taken from navigation.
        let final_url = match session.current_url().await {
            Ok(resolved) => resolved,
            Err(_) => navigation.final_url.clone(),
        };

        // Tentative: a later found/not-found outcome may overwrite this.
        if !same_location(&report.url, &final_url) {
            report.status = ScanStatus::Redirect;
            report.note(format!("redirected to: {final_url}"));
        }

        // 404 is terminal for this report: no extraction, booleans stay false.
        if navigation.status_code == Some(404) {
            report.status = ScanStatus::NotFound404;
            return;
        }

        let redirected = report.status == ScanStatus::Redirect;

        self.inspect_section(session, DocumentSection::Head, report)
            .await;
        self.inspect_section(session, DocumentSection::Body, report)
            .await;
        self.inspect_full_document(session, report).await;
        self.cross_check_view_source(report).await;

        // Finalize: section hits win, then a whole-document hit, then a
        // retained redirect notice, then plain not-found.
        report.status = if report.in_head || report.in_body {
            // A section hit implies a document hit, even if full-document
            // extraction itself failed.
            report.in_html = true;
            ScanStatus::found(report.in_head, report.in_body)
        } else if report.in_html {
            ScanStatus::FoundElsewhere
        } else if redirected {
            ScanStatus::Redirect
        } else {
            ScanStatus::NotFound
        };

        debug!("scan of {} finished: {}", report.url, report.status);
    }

    /// Search one section's markup and its script children.
    ///
    /// A missing section is not an error; an extraction failure is localized
    /// to this section and does not abort the rest of the scan.
    async fn inspect_section(
        &self,
        session: &R::Session,
        section: DocumentSection,
        report: &mut ScanReport,
    ) {
        let capture = match session.capture_section(section).await {
            Ok(Some(capture)) => capture,
            Ok(None) => return,
            Err(e) => {
                report.note(format!("{} extraction failed: {e}", section.label()));
                return;
            }
        };

        let marker = self.config.marker();
        let label = section.label();

        if capture.html.contains(marker) {
            match section {
                DocumentSection::Head => report.in_head = true,
                DocumentSection::Body => report.in_body = true,
            }
            report.note(format!("marker present in {label} markup"));

            let cap = self.config.max_sample_matches();
            let samples = find_sample_matches(&capture.html, marker, cap);
            for (line_no, line_text) in &samples {
                report.note(format!("  - {label} line {line_no}: {line_text}"));
            }
            if samples.len() >= cap {
                report.note(format!("  - {label} matches truncated to first {cap}"));
            }
        }

        self.inspect_scripts(&capture, label, report);
    }

    /// Check each script child: inline content first, then the src
    /// attribute. First match wins for that script.
    fn inspect_scripts(&self, capture: &SectionCapture, label: &str, report: &mut ScanReport) {
        let marker = self.config.marker();
        for (i, script) in capture.scripts.iter().enumerate() {
            if script.content.contains(marker) {
                report.note(format!("  - {label} script[{i}] inline content matches"));
            } else if script.src.as_deref().is_some_and(|src| src.contains(marker)) {
                report.note(format!("  - {label} script[{i}] src attribute matches"));
            }
        }
    }

    /// Search the full rendered markup, recording exact line numbers. When
    /// the document matches but line splitting yields no numbers, fall back
    /// to sample evidence so the match is never left without a positional
    /// hint.
    async fn inspect_full_document(&self, session: &R::Session, report: &mut ScanReport) {
        let html = match session.full_html().await {
            Ok(html) => html,
            Err(e) => {
                report.note(format!("document extraction failed: {e}"));
                return;
            }
        };

        let marker = self.config.marker();
        if !html.contains(marker) {
            return;
        }

        report.in_html = true;
        report.line_numbers = find_all_line_numbers(&html, marker);
        if report.line_numbers.is_empty() {
            let samples = find_sample_matches(&html, marker, self.config.max_sample_matches());
            for (line_no, line_text) in samples {
                report.note(format!("  - document line {line_no}: {line_text}"));
            }
        } else {
            report.note(format!(
                "matched line numbers: {}",
                join_line_numbers(&report.line_numbers)
            ));
        }
    }

    /// Independent raw-source fetch; failure degrades to an evidence note.
    async fn cross_check_view_source(&self, report: &mut ScanReport) {
        let fetched =
            fetch_view_source(&self.http, &report.url, self.config.fetch_timeout()).await;

        let Some(raw) = fetched else {
            report.note("view-source fetch unavailable");
            return;
        };

        let marker = self.config.marker();
        if raw.contains(marker) {
            report.line_numbers_view_source = find_all_line_numbers(&raw, marker);
            if !report.line_numbers_view_source.is_empty() {
                report.note(format!(
                    "view-source matched line numbers: {}",
                    join_line_numbers(&report.line_numbers_view_source)
                ));
            }
        }
    }
}

/// Compare the requested and final URLs, tolerating cosmetic differences
/// the browser introduces (a bare host gains a trailing `/` path).
fn same_location(requested: &str, resolved: &str) -> bool {
    match (Url::parse(requested), Url::parse(resolved)) {
        (Ok(a), Ok(b)) => a == b,
        _ => requested == resolved,
    }
}

/// Comma-join line numbers for evidence lines and table cells.
#[must_use]
pub fn join_line_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<R> UrlScanner for PageScanner<R>
where
    R: Renderer + 'static,
{
    fn scan(&self, url: String) -> impl Future<Output = ScanReport> + Send {
        self.scan_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_and_slash_path_are_the_same_location() {
        assert!(same_location("https://example.com", "https://example.com/"));
    }

    #[test]
    fn different_paths_are_a_redirect() {
        assert!(!same_location(
            "https://example.com/",
            "https://example.com/landing"
        ));
    }

    #[test]
    fn unparseable_urls_fall_back_to_string_equality() {
        assert!(same_location("not a url", "not a url"));
        assert!(!same_location("not a url", "also not a url"));
    }

    #[test]
    fn join_formats_with_comma_space() {
        assert_eq!(join_line_numbers(&[3, 14, 15]), "3, 14, 15");
        assert_eq!(join_line_numbers(&[]), "");
    }
}
