//! URL list loading, marker config persistence, and CSV report output

use tagcheck::engine::{DetailRow, SummaryRow};
use tagcheck::input::{load_url_list, resolve_marker};
use tagcheck::output::{write_detail_csv, write_summary_csv};
use tagcheck::scan::{ScanReport, ScanStatus};
use tempfile::TempDir;

#[test]
fn url_list_reads_url_column_and_skips_blanks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.csv");
    std::fs::write(
        &path,
        "name,url\nhome, https://a.test/ \nblank,\ndocs,https://b.test/docs\n",
    )
    .unwrap();

    let urls = load_url_list(&path).unwrap();
    assert_eq!(urls, vec!["https://a.test/", "https://b.test/docs"]);
}

#[test]
fn url_list_rejects_missing_url_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.csv");
    std::fs::write(&path, "site,address\nhome,https://a.test/\n").unwrap();

    let err = load_url_list(&path).unwrap_err();
    assert!(err.to_string().contains("url"));
}

#[test]
fn url_list_header_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.csv");
    std::fs::write(&path, "URL\nhttps://a.test/\n").unwrap();

    let urls = load_url_list(&path).unwrap();
    assert_eq!(urls, vec!["https://a.test/"]);
}

#[test]
fn cli_marker_wins_over_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"marker": "GTM-FROMFILE"}"#).unwrap();

    let marker = resolve_marker(Some("GTM-FROMCLI"), &config).unwrap();
    assert_eq!(marker, "GTM-FROMCLI");
}

#[test]
fn config_file_supplies_marker_when_cli_absent() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"marker": "  GTM-FROMFILE  "}"#).unwrap();

    let marker = resolve_marker(None, &config).unwrap();
    assert_eq!(marker, "GTM-FROMFILE");
}

#[test]
fn blank_cli_marker_falls_through_to_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"marker": "GTM-FROMFILE"}"#).unwrap();

    let marker = resolve_marker(Some("   "), &config).unwrap();
    assert_eq!(marker, "GTM-FROMFILE");
}

#[test]
fn summary_csv_starts_with_bom_and_carries_headers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tag_check_results.csv");

    let mut report = ScanReport::new("https://a.test/");
    report.in_head = true;
    report.in_html = true;
    report.status = ScanStatus::found(true, false);
    report.line_numbers = vec![12];

    write_summary_csv(&path, &[SummaryRow::from_report(&report)]).unwrap();

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(&raw[..3], b"\xef\xbb\xbf");

    let text = String::from_utf8(raw).unwrap();
    let mut lines = text.trim_start_matches('\u{feff}').lines();
    assert_eq!(
        lines.next().unwrap(),
        "URL,Status,in_head,in_body,matched_line_numbers,matched_line_numbers_view_source"
    );
    assert_eq!(lines.next().unwrap(), "https://a.test/,found (HEAD),yes,no,12,");
}

#[test]
fn detail_csv_quotes_multiline_details() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tag_check_details.csv");

    let mut report = ScanReport::new("https://a.test/");
    report.status = ScanStatus::NotFound;
    report.note("first note");
    report.note("second note");

    write_detail_csv(&path, &[DetailRow::from_report(&report)]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"first note\nsecond note\""));
}
