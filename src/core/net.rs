// src/core/net.rs

// Blocking HTTP GET. One request per run: no retries, no explicit timeout
// beyond the transport defaults.

use std::path::Path;

use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

pub fn http_get(url: &str) -> Result<String> {
    let fail = |reason: String| ScrapeError::FetchFailed { url: s!(url), reason };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| fail(e.to_string()))?;

    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;
    let status = resp.status();
    debug!(%status, url, "response");
    if !status.is_success() {
        return Err(fail(format!("HTTP {status}")));
    }

    resp.text().map_err(|e| fail(e.to_string()))
}

/// Read a saved page from disk. Failures are reported as fetch failures so the
/// pipeline treats a local source exactly like a remote one.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ScrapeError::FetchFailed {
        url: path.display().to_string(),
        reason: e.to_string(),
    })
}
