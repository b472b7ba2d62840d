// src/fetch/urls.rs
use url::Url;

use crate::error::Result;

/// Site root the schedule pages hang off.
pub const DEFAULT_BASE_URL: &str = "https://www.baseball-reference.com/";

/// Path of a team-season schedule page, relative to the site root.
pub fn schedule_path(team: &str, year: u16) -> String {
    format!("teams/{}/{}-schedule-scores.shtml", team, year)
}

/// Full URL of a team-season schedule page under `base`.
pub fn schedule_url(base: &Url, team: &str, year: u16) -> Result<Url> {
    Ok(base.join(&schedule_path(team, year))?)
}

/// Parse a base URL, adding the trailing slash `Url::join` needs to keep the
/// last path segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
