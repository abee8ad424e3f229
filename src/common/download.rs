use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy};
use tracing::debug;

const USER_AGENT: &str = concat!("choropleth/", env!("CARGO_PKG_VERSION"));

/// Fetch the body of `url` in full. Non-2xx statuses are errors.
pub(crate) fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(Policy::limited(10))
        .build()
        .context("build HTTP client")?;

    let resp = client.get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned error status"))?;

    let bytes = resp.bytes()
        .with_context(|| format!("read body of {url}"))?;

    debug!(url, bytes = bytes.len(), "fetched");
    Ok(bytes.to_vec())
}
