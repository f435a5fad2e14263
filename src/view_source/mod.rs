//! Raw document fetch for view-source evidence
//!
//! The rendered DOM the browser hands back has been reserialized by the HTML
//! parser, so its line numbers rarely match what an operator sees in the
//! browser's view-source window. To get line numbers close to that view, the
//! original bytes are fetched once more with a plain HTTP GET, bypassing the
//! browser entirely.

use log::debug;
use std::time::Duration;

use crate::utils::constants::TAGCHECK_USER_AGENT;

/// Build the HTTP client used for view-source fetches.
///
/// One client is shared across all concurrent scans; reqwest pools
/// connections internally.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(TAGCHECK_USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Fetch the raw (un-rendered) document for `url` and decode it as text.
///
/// Returns `None` on any network-level failure (connection refused, timeout,
/// TLS error). Non-2xx responses still carry a decodable body and are
/// returned as text. Byte sequences that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the fetch.
pub async fn fetch_view_source(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Option<String> {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("view-source fetch failed for {url}: {e}");
            return None;
        }
    };

    match response.bytes().await {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            debug!("view-source body read failed for {url}: {e}");
            None
        }
    }
}
