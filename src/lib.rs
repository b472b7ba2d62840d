//! Scrape a team's season schedule page into per-game runs, opponents and win flags.
//!
//! ```no_run
//! use schedscraper::{FetchConfig, ScheduleFetcher};
//!
//! let fetcher = ScheduleFetcher::new(FetchConfig::default())?;
//! let table = fetcher.fetch("NYY", 2018)?;
//! schedscraper::export::write_csv_file(&table, "nyy_data.csv")?;
//! # Ok::<(), schedscraper::ScheduleError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod schedule;

pub use config::FetchConfig;
pub use error::{Result, ScheduleError};
pub use schedule::{
    fetch_schedule, parse_schedule, Alignment, ScheduleFetcher, ScheduleRow, ScheduleTable, COLUMNS,
};
