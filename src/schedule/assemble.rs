// src/schedule/assemble.rs

use std::{fmt, str::FromStr};
use tracing::warn;

use super::extract::RawColumns;
use super::types::{ScheduleRow, ScheduleTable};
use crate::error::{Result, ScheduleError};

/// How to join the three independently extracted columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Fail with [`ScheduleError::ShapeMismatch`] unless all columns agree.
    #[default]
    Strict,
    /// Truncate to the shortest column.
    Lenient,
}

impl FromStr for Alignment {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(ScheduleError::Config(format!(
                "unknown alignment {other:?}, expected \"strict\" or \"lenient\""
            ))),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        })
    }
}

/// Zip the raw columns into typed rows, converting runs to integers.
pub fn assemble(raw: RawColumns, alignment: Alignment) -> Result<ScheduleTable> {
    let (runs_for, runs_against, opponent) = raw.lengths();
    if !raw.is_aligned() {
        match alignment {
            Alignment::Strict => {
                return Err(ScheduleError::ShapeMismatch {
                    runs_for,
                    runs_against,
                    opponent,
                })
            }
            Alignment::Lenient => {
                warn!(
                    runs_for,
                    runs_against, opponent, "column lengths disagree; truncating to shortest"
                );
            }
        }
    }

    let rows = raw
        .runs_for
        .iter()
        .zip(&raw.runs_against)
        .zip(raw.opponent)
        .enumerate()
        .map(|(row, ((rf, ra), opp))| {
            Ok(ScheduleRow::new(
                parse_runs("runs_for", row, rf)?,
                parse_runs("runs_against", row, ra)?,
                opp,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScheduleTable::new(rows))
}

fn parse_runs(column: &'static str, row: usize, text: &str) -> Result<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|source| ScheduleError::Conversion {
            column,
            row,
            text: text.to_string(),
            source,
        })
}
