// src/schedule/types.rs

use serde::{Serialize, Serializer};

/// Column names of an exported schedule, in export order.
pub const COLUMNS: [&str; 4] = ["runs_for", "runs_against", "opponent", "win"];

/// One played game, from the subject team's side.
///
/// `win` is derived in [`ScheduleRow::new`] and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    runs_for: u32,
    runs_against: u32,
    opponent: String,
    #[serde(serialize_with = "as_flag")]
    win: bool,
}

impl ScheduleRow {
    pub fn new(runs_for: u32, runs_against: u32, opponent: impl Into<String>) -> Self {
        Self {
            runs_for,
            runs_against,
            opponent: opponent.into(),
            win: runs_for > runs_against,
        }
    }

    pub fn runs_for(&self) -> u32 {
        self.runs_for
    }

    pub fn runs_against(&self) -> u32 {
        self.runs_against
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn win(&self) -> bool {
        self.win
    }

    /// `1` for a win, `0` otherwise.
    pub fn win_flag(&self) -> u8 {
        u8::from(self.win)
    }
}

fn as_flag<S: Serializer>(win: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*win))
}

/// The games of one team-season, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }

    pub fn wins(&self) -> usize {
        self.rows.iter().filter(|r| r.win).count()
    }

    pub fn losses(&self) -> usize {
        self.len() - self.wins()
    }

    pub fn into_rows(self) -> Vec<ScheduleRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ScheduleTable {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for ScheduleTable {
    type Item = ScheduleRow;
    type IntoIter = std::vec::IntoIter<ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
