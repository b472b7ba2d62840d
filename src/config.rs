// src/config.rs

use std::{env, time::Duration};
use url::Url;

use crate::error::{Result, ScheduleError};
use crate::fetch::urls::{parse_base_url, DEFAULT_BASE_URL};
use crate::schedule::Alignment;

pub const ENV_BASE_URL: &str = "SCHEDULE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SCHEDULE_TIMEOUT_SECS";
pub const ENV_ALIGNMENT: &str = "SCHEDULE_ALIGNMENT";

/// Settings for a [`crate::ScheduleFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Site root; schedule pages are joined onto it.
    pub base_url: Url,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub alignment: Alignment,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
            timeout: None,
            alignment: Alignment::Strict,
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with `SCHEDULE_BASE_URL`, `SCHEDULE_TIMEOUT_SECS`
    /// and `SCHEDULE_ALIGNMENT` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BASE_URL) {
            config.base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ScheduleError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(ENV_ALIGNMENT) {
            config.alignment = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = FetchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FetchConfig::default());
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.alignment, Alignment::Strict);
    }

    #[test]
    fn environment_overrides() {
        let config = FetchConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:9000/mirror"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_ALIGNMENT, "lenient"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/mirror/");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.alignment, Alignment::Lenient);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            FetchConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])),
            Err(ScheduleError::Config(_))
        ));
        assert!(matches!(
            FetchConfig::from_lookup(lookup(&[(ENV_ALIGNMENT, "fuzzy")])),
            Err(ScheduleError::Config(_))
        ));
        assert!(matches!(
            FetchConfig::from_lookup(lookup(&[(ENV_BASE_URL, "not a url")])),
            Err(ScheduleError::Url(_))
        ));
    }

    #[test]
    fn builder_methods() {
        let config = FetchConfig::default()
            .with_base_url("http://127.0.0.1:1234")
            .unwrap()
            .with_timeout(Duration::from_millis(250))
            .with_alignment(Alignment::Lenient);
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:1234/");
        assert_eq!(config.timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.alignment, Alignment::Lenient);
    }
}
