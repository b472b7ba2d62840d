// src/schedule/mod.rs

pub mod assemble;
pub mod extract;
pub mod types;

pub use assemble::{assemble, Alignment};
pub use extract::{extract_columns, RawColumns};
pub use types::{ScheduleRow, ScheduleTable, COLUMNS};

use reqwest::blocking::Client;
use tracing::{debug, info, instrument};

use crate::config::FetchConfig;
use crate::error::{Result, ScheduleError};
use crate::fetch::{get_html, schedule_url};

/// Turn a schedule page into a table. No network involved.
pub fn parse_schedule(html: &str, alignment: Alignment) -> Result<ScheduleTable> {
    let raw = extract_columns(html);
    debug!(lengths = ?raw.lengths(), %alignment, "assembling schedule");
    assemble(raw, alignment)
}

/// Fetches team-season schedule pages and turns them into [`ScheduleTable`]s.
///
/// Holds no mutable state; one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct ScheduleFetcher {
    client: Client,
    config: FetchConfig,
}

impl ScheduleFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScheduleError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// One GET, then extract, align, convert and derive win flags.
    #[instrument(level = "info", skip(self))]
    pub fn fetch(&self, team: &str, year: u16) -> Result<ScheduleTable> {
        let url = schedule_url(&self.config.base_url, team, year)?;
        let html = get_html(&self.client, &url)?;
        let table = parse_schedule(&html, self.config.alignment)?;
        info!(
            %url,
            rows = table.len(),
            wins = table.wins(),
            "parsed schedule"
        );
        Ok(table)
    }
}

/// Fetch with the default configuration.
pub fn fetch_schedule(team: &str, year: u16) -> Result<ScheduleTable> {
    ScheduleFetcher::new(FetchConfig::default())?.fetch(team, year)
}
