//! CSV-backed dataset store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use blspull_types::Observation;

use crate::{DatasetStore, Result, StoreError};

/// Fixed header row of the dataset file.
pub const CSV_HEADER: &str = "Series Name,Year,Month,Value";

/// Dataset store backed by a single CSV file.
///
/// The file is replaced via a temporary file in the same directory followed
/// by a rename, so a concurrent reader never observes a partial write.
#[derive(Debug, Clone)]
pub struct CsvDatasetStore {
    path: PathBuf,
}

impl CsvDatasetStore {
    /// Creates a store targeting the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the dataset file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temporary file is staged in; must be the target's
    /// directory so the final rename stays on one filesystem.
    fn stage_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

/// Parses one dataset row.
///
/// Fields are anchored from the right: the trailing three are numeric and
/// comma-free, so a series name may itself contain a comma without quoting.
fn parse_row(line: &str) -> Option<Observation> {
    let mut fields = line.rsplitn(4, ',');
    let value: f64 = fields.next()?.trim().parse().ok()?;
    let month: u32 = fields.next()?.trim().parse().ok()?;
    let year: i32 = fields.next()?.trim().parse().ok()?;
    let series_name = fields.next()?.to_string();
    Some(Observation::new(series_name, year, month, value))
}

impl DatasetStore for CsvDatasetStore {
    fn load(&self) -> Result<Option<Vec<Observation>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        let mut lines = content.lines();
        match lines.next() {
            Some(header) if header.trim_end() == CSV_HEADER => {}
            // An empty file counts as "no dataset"; anything else is
            // outside interference with a file the pipeline owns.
            None => return Ok(None),
            Some(_) => {
                return Err(StoreError::BadHeader {
                    path: self.path.clone(),
                });
            }
        }

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_row(line).ok_or_else(|| StoreError::ParseRow {
                path: self.path.clone(),
                line: i + 2,
            })?;
            rows.push(row);
        }

        Ok(Some(rows))
    }

    fn save(&self, rows: &[Observation]) -> Result<()> {
        let dir = self.stage_dir();
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| StoreError::CreateTemp {
            dir: dir.to_path_buf(),
            source: e,
        })?;

        let write_err = |e: std::io::Error| StoreError::WriteFile {
            path: self.path.clone(),
            source: e,
        };

        writeln!(staged, "{CSV_HEADER}").map_err(write_err)?;
        for row in rows {
            writeln!(
                staged,
                "{},{},{},{}",
                row.series_name, row.year, row.month, row.value
            )
            .map_err(write_err)?;
        }
        staged.flush().map_err(write_err)?;

        staged
            .persist(&self.path)
            .map_err(|e| StoreError::Replace {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn rows() -> Vec<Observation> {
        vec![
            Observation::new("Unemployment Rate (16+ years)".to_string(), 2024, 1, 3.7),
            Observation::new("Total Nonfarm Employment".to_string(), 2024, 1, 157232.0),
        ]
    }

    #[test]
    fn test_missing_file_is_no_dataset() {
        let dir = TempDir::new().unwrap();
        let store = CsvDatasetStore::new(dir.path().join("bls_data.csv"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = CsvDatasetStore::new(dir.path().join("bls_data.csv"));

        store.save(&rows()).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].series_name, "Unemployment Rate (16+ years)");
        assert_eq!(loaded[0].year, 2024);
        assert_eq!(loaded[0].month, 1);
        assert_relative_eq!(loaded[0].value, 3.7);
        assert_relative_eq!(loaded[1].value, 157232.0);
    }

    #[test]
    fn test_file_has_fixed_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bls_data.csv");
        let store = CsvDatasetStore::new(&path);

        store.save(&rows()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Series Name,Year,Month,Value\n"));
    }

    #[test]
    fn test_save_overwrites_previous_dataset() {
        let dir = TempDir::new().unwrap();
        let store = CsvDatasetStore::new(dir.path().join("bls_data.csv"));

        store.save(&rows()).unwrap();
        store
            .save(&[Observation::new("Only Row".to_string(), 2023, 12, 1.0)])
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].series_name, "Only Row");
    }

    #[test]
    fn test_comma_in_series_name_survives() {
        let dir = TempDir::new().unwrap();
        let store = CsvDatasetStore::new(dir.path().join("bls_data.csv"));

        let row = Observation::new("Employment, Total".to_string(), 2024, 6, 42.0);
        store.save(std::slice::from_ref(&row)).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded[0], row);
    }

    #[test]
    fn test_wrong_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bls_data.csv");
        fs::write(&path, "Totally,Different,Header\n").unwrap();

        let store = CsvDatasetStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::BadHeader { .. })));
    }

    #[test]
    fn test_bad_row_is_an_error_with_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bls_data.csv");
        fs::write(
            &path,
            "Series Name,Year,Month,Value\nGood Series,2024,1,3.7\nnot a row\n",
        )
        .unwrap();

        let store = CsvDatasetStore::new(&path);
        match store.load() {
            Err(StoreError::ParseRow { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ParseRow, got {other:?}"),
        }
    }

    #[test]
    fn test_no_stray_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = CsvDatasetStore::new(dir.path().join("bls_data.csv"));
        store.save(&rows()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
