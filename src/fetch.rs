use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

/// Fetch the raw document text over HTTPS.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    info!("Fetching document: {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let body = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Failed to fetch {}", url))?
        .text()
        .context("Failed to read document body")?;

    info!("Fetched {} bytes", body.len());
    Ok(body)
}
