//! Output tables and aggregate counters
//!
//! Read-only projections of finished scan reports: one summary row and one
//! detail row per URL, plus the aggregate breakdown shown to the operator.
//! Rows are keyed by URL; consumers that need a stable order sort before
//! display or comparison.

use serde::Serialize;

use crate::scan::{ScanReport, join_line_numbers};

/// One row of the summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "in_head")]
    pub in_head: String,
    #[serde(rename = "in_body")]
    pub in_body: String,
    #[serde(rename = "matched_line_numbers")]
    pub matched_line_numbers: String,
    #[serde(rename = "matched_line_numbers_view_source")]
    pub matched_line_numbers_view_source: String,
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

impl SummaryRow {
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        Self {
            url: report.url.clone(),
            status: report.status.to_string(),
            in_head: yes_no(report.in_head),
            in_body: yes_no(report.in_body),
            matched_line_numbers: join_line_numbers(&report.line_numbers),
            matched_line_numbers_view_source: join_line_numbers(&report.line_numbers_view_source),
        }
    }
}

/// One row of the detail table: every report field, with `details`
/// flattened to newline-joined text for audit display.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    pub url: String,
    pub status: String,
    pub in_head: bool,
    pub in_body: bool,
    pub in_html: bool,
    pub line_numbers: String,
    pub line_numbers_view_source: String,
    pub details: String,
}

impl DetailRow {
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        Self {
            url: report.url.clone(),
            status: report.status.to_string(),
            in_head: report.in_head,
            in_body: report.in_body,
            in_html: report.in_html,
            line_numbers: join_line_numbers(&report.line_numbers),
            line_numbers_view_source: join_line_numbers(&report.line_numbers_view_source),
            details: report.details.join("\n"),
        }
    }
}

/// Aggregate counters across a batch of scan reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanTotals {
    pub total: usize,
    /// Reports whose status is any found class.
    pub found: usize,
    /// Reports with a clean not-found outcome.
    pub not_found: usize,
    /// Reports with any warning or error outcome.
    pub warnings: usize,
    /// Marker in head markup only.
    pub head_only: usize,
    /// Marker in body markup only.
    pub body_only: usize,
    /// Marker in both head and body markup.
    pub both: usize,
}

impl ScanTotals {
    #[must_use]
    pub fn tally(reports: &[ScanReport]) -> Self {
        let mut totals = Self {
            total: reports.len(),
            ..Self::default()
        };

        for report in reports {
            if report.status.is_found() {
                totals.found += 1;
            } else if report.status.is_warning() {
                totals.warnings += 1;
            } else {
                totals.not_found += 1;
            }

            match (report.in_head, report.in_body) {
                (true, false) => totals.head_only += 1,
                (false, true) => totals.body_only += 1,
                (true, true) => totals.both += 1,
                (false, false) => {}
            }
        }

        totals
    }
}
