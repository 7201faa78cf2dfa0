// src/core/net.rs

// One blocking HTTPS GET. Two requests per run, no retry, no backoff:
// a failed fetch aborts the pipeline.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::params::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let url = Url::parse(url).map_err(|e| format!("Bad URL {url}: {e}"))?;

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.text()?)
}
