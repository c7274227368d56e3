// src/export/logic.rs

use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::LogStore;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Where the export lands: `file` when given, otherwise
    /// `{dir or .}/{user_id}_scope_log.{ext}`.
    pub fn target_path(
        user_id: &str,
        format: ExportFormat,
        file: Option<&str>,
        dir: Option<&str>,
    ) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => {
                let base = dir.map(expand_tilde).unwrap_or_else(|| PathBuf::from("."));
                base.join(format.file_name(user_id))
            }
        }
    }

    /// Export a user's log. Returns the written path, or `None` when the
    /// user has no log yet.
    pub fn export(
        pool: &mut DbPool,
        store: &LogStore,
        user_id: &str,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let Some(raw) = store.read_raw(user_id)? else {
            info("No logs available to download.");
            return Ok(None);
        };

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(&raw, path)?,
            ExportFormat::Json => {
                let records = store.load_all(user_id)?.unwrap_or_default();
                export_json(&records, path)?
            }
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            user_id,
            &format!("{} export to {}", format.as_str(), path.display()),
        );

        Ok(Some(path.to_path_buf()))
    }
}
