// src/export.rs

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use tracing::debug;

use crate::error::Result;
use crate::schedule::{ScheduleTable, COLUMNS};

/// `<team>_data.csv`, team lowercased.
pub fn output_file_name(team: &str) -> String {
    format!("{}_data.csv", team.to_lowercase())
}

/// Write the header and one line per game. No index column.
pub fn write_csv<W: Write>(table: &ScheduleTable, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    // serde only emits a header alongside the first record, so an empty
    // table would come out blank.
    writer.write_record(COLUMNS)?;
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_csv`] into `path`, creating parent directories.
pub fn write_csv_file(table: &ScheduleTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv(table, file)?;
    debug!(path = %path.display(), rows = table.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleRow;
    use tempfile::tempdir;

    fn sample() -> ScheduleTable {
        ScheduleTable::new(vec![
            ScheduleRow::new(5, 3, "BOS"),
            ScheduleRow::new(2, 4, "NYY"),
            ScheduleRow::new(7, 7, "TOR"),
        ])
    }

    #[test]
    fn writes_header_and_flags() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "runs_for,runs_against,opponent,win\n5,3,BOS,1\n2,4,NYY,0\n7,7,TOR,0\n"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let mut buf = Vec::new();
        write_csv(&ScheduleTable::default(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "runs_for,runs_against,opponent,win\n"
        );
    }

    #[test]
    fn writes_file_under_new_directory() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("2018").join(output_file_name("OAK"));
        write_csv_file(&sample(), &path).unwrap();

        assert!(path.ends_with("2018/oak_data.csv"));
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("runs_for,runs_against,opponent,win\n"));
    }

    #[test]
    fn file_name_is_lowercased() {
        assert_eq!(output_file_name("CHC"), "chc_data.csv");
    }
}
