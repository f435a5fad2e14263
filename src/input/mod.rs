//! Marker acquisition and URL list loading
//!
//! The marker is resolved through a chain: CLI flag, then a JSON config
//! file, then an interactive prompt (which persists the answer back to the
//! config file for the next run). The URL list comes from a CSV with a
//! `url` header column.

use anyhow::{Context, Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;

/// On-disk shape of the marker config file.
#[derive(Debug, Serialize, Deserialize)]
struct MarkerFile {
    marker: String,
}

/// Resolve the marker text: CLI flag first, then the config file, then an
/// interactive prompt. Guaranteed non-empty on success.
pub fn resolve_marker(cli_marker: Option<&str>, config_path: &Path) -> Result<String> {
    if let Some(marker) = cli_marker {
        let marker = marker.trim();
        if !marker.is_empty() {
            return Ok(marker.to_string());
        }
    }

    if let Some(marker) = marker_from_file(config_path) {
        return Ok(marker);
    }

    prompt_for_marker(config_path)
}

fn marker_from_file(config_path: &Path) -> Option<String> {
    if !config_path.exists() {
        return None;
    }

    let contents = match std::fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("failed to read {}: {e}", config_path.display());
            return None;
        }
    };

    match serde_json::from_str::<MarkerFile>(&contents) {
        Ok(file) if !file.marker.trim().is_empty() => Some(file.marker.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            warn!("failed to parse {}: {e}", config_path.display());
            None
        }
    }
}

fn prompt_for_marker(config_path: &Path) -> Result<String> {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("enter the marker text to search for (e.g. GTM-MBWPPD2): ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read marker from stdin")?;
        if read == 0 {
            bail!("stdin closed before a marker was entered");
        }

        let marker = line.trim();
        if marker.is_empty() {
            println!("the marker must not be empty.");
            continue;
        }

        // Best-effort persistence so the next run can skip the prompt.
        let file = MarkerFile {
            marker: marker.to_string(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&file)
            && let Err(e) = std::fs::write(config_path, json)
        {
            warn!("failed to save marker to {}: {e}", config_path.display());
        }

        return Ok(marker.to_string());
    }
}

/// Load the URL list from a CSV file with a `url` header column.
///
/// Values are whitespace-trimmed and empties dropped; an empty result is
/// not an error (the orchestrator short-circuits on it).
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open URL list {}", path.display()))?;

    let headers = reader.headers().context("failed to read CSV headers")?;
    let url_column = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("url"))
        .with_context(|| format!("no 'url' column in {}", path.display()))?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        if let Some(value) = record.get(url_column) {
            let value = value.trim();
            if !value.is_empty() {
                urls.push(value.to_string());
            }
        }
    }

    Ok(urls)
}
