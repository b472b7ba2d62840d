// src/error.rs

use std::{io, num::ParseIntError};
use thiserror::Error;

/// Every way a schedule fetch or export can fail.
///
/// Nothing here is recovered inside the crate; a failed call never yields a
/// partial table.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The request could not be completed: DNS, connect, timeout, body read,
    /// or a non-success HTTP status.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not an HTML document.
    #[error("response from {url} is not HTML (content-type {content_type:?})")]
    Parse { url: String, content_type: String },

    /// A runs cell holds text that is not an integer (postponed markers, blanks).
    #[error("{column} cell at row {row} is not an integer: {text:?}")]
    Conversion {
        column: &'static str,
        row: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// The three extracted columns have different lengths.
    #[error(
        "column lengths disagree: runs_for={runs_for}, runs_against={runs_against}, opponent={opponent}"
    )]
    ShapeMismatch {
        runs_for: usize,
        runs_against: usize,
        opponent: usize,
    },

    #[error("building HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("invalid schedule URL")]
    Url(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("writing CSV")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
