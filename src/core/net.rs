// src/core/net.rs
// Blocking HTTP GET for the static pages.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

pub fn client(timeout: Duration) -> Result<Client, ScrapeError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// GET `url` and return the body; non-2xx is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let t = std::time::Instant::now();
    let body = client.get(url).send()?.error_for_status()?.text()?;
    debug!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body)
}
