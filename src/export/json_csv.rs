// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::LogRecord;
use crate::ui::messages::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write the log file exactly as stored.
pub(crate) fn export_csv(raw: &[u8], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(raw)?;
    file.sync_all()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Pretty-printed JSON array of the parsed rows.
pub(crate) fn export_json(records: &[LogRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;
    fs::write(path, json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
