// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TrackerExport;
use crate::models::tracker::Tracker;
use crate::ui::messages::warning;

use std::io;
use std::path::Path;

/// High-level export logic for the saved tracker list.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        trackers: &[Tracker],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if trackers.is_empty() {
            warning("No saved trackers to export.");
            return Ok(());
        }

        let rows: Vec<TrackerExport> = trackers.iter().map(TrackerExport::from_tracker).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
