//! Per-user append-only CSV journal log.

use crate::errors::AppResult;
use crate::models::LogRecord;
use crate::ui::messages::warning;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// One CSV file per user inside `dir`. Rows are only ever appended.
#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}.csv"))
    }

    pub fn exists(&self, user_id: &str) -> bool {
        self.path_for(user_id).is_file()
    }

    /// Create the user's log (header + rows) or append rows to it.
    pub fn append(&self, user_id: &str, records: &[LogRecord]) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(user_id);
        // an existing but empty file still needs the header
        let is_new = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        // serde writes the header from the field names on the first row
        let mut wtr = WriterBuilder::new().has_headers(is_new).from_writer(file);
        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        let file = wtr.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;

        Ok(())
    }

    /// Every readable row of the user's log in insertion order, or `None`
    /// when the user has no log yet. Rows that cannot be decoded are skipped
    /// with a warning.
    pub fn load_all(&self, user_id: &str) -> AppResult<Option<Vec<LogRecord>>> {
        let path = self.path_for(user_id);
        if !path.is_file() {
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&path)?;

        let mut records = Vec::new();
        let mut skipped = 0;
        for row in rdr.deserialize::<LogRecord>() {
            match row {
                Ok(record) => records.push(record),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warning(format!(
                "Skipped {skipped} unreadable row{} in {}",
                if skipped == 1 { "" } else { "s" },
                path.display()
            ));
        }

        Ok(Some(records))
    }

    /// The log file exactly as stored, for export.
    pub fn read_raw(&self, user_id: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(user_id);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }
}
