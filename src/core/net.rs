// src/core/net.rs
//
// One blocking GET. No retries: a timeout or a non-200 ends the run.

use std::fs;

use reqwest::{blocking::Client, header, StatusCode};

use crate::config::options::{FetchOptions, PageSource};
use crate::error::FetchError;

/// Fetch the page body as text, from the network or a saved copy.
pub fn fetch_page(opts: &FetchOptions) -> Result<String, FetchError> {
    match &opts.source {
        PageSource::Remote(url) => http_get(url, opts),
        PageSource::File(path) => {
            let bytes = fs::read(path).map_err(|source| FetchError::ReadFile {
                path: path.clone(),
                source,
            })?;
            logd!("Fetch: read {} bytes from {}", bytes.len(), path.display());
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)?;

    logd!("Fetch: GET {url} (timeout {}s)", opts.timeout.as_secs());
    let resp = client
        .get(url)
        .header(header::ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .map_err(|e| classify(url, opts, e))?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }

    // Decode as UTF-8 whatever the server claims
    let bytes = resp.bytes().map_err(|e| classify(url, opts, e))?;
    logf!("Fetch: OK bytes={}", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn classify(url: &str, opts: &FetchOptions, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: s!(url), after: opts.timeout }
    } else if e.is_connect() {
        FetchError::Connect { url: s!(url), source: e }
    } else {
        FetchError::Request { url: s!(url), source: e }
    }
}
