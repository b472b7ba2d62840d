// src/fetch/page.rs
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ScheduleError};

/// GET `url` once and return its body, provided the server says it is HTML.
///
/// A missing `Content-Type` is taken on trust. Non-success statuses are not
/// errors: an unknown team or season comes back as an HTML error page, which
/// parses to zero games.
pub fn get_html(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching page from {}", url);
    let network = |source| ScheduleError::Network {
        url: url.to_string(),
        source,
    };

    let resp = client.get(url.clone()).send().map_err(network)?;

    let status = resp.status();
    if !status.is_success() {
        warn!(%url, %status, "non-success status; parsing body anyway");
    }

    if let Some(content_type) = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !is_html(content_type) {
            return Err(ScheduleError::Parse {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    let body = resp.text().map_err(network)?;
    debug!(%url, bytes = body.len(), "read body");
    Ok(body)
}

fn is_html(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}
