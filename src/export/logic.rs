use crate::core::filters::ListFilter;
use crate::core::logic::ListLogic;
use crate::core::notify::NotificationCenter;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportTable};
use crate::models::Listable;
use crate::utils::path::expand_tilde;

/// Where and how to write one export.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub file: String,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write every record of `items` matching `filter` (all pages) to
    /// `target`. Returns the number of rows written.
    ///
    /// Progress is reported through `notices`: a submit flag keyed by the
    /// format while writing, then a success or error notification.
    pub fn export<T: Listable>(
        items: &[T],
        filter: &ListFilter,
        target: &ExportTarget,
        notices: &mut NotificationCenter,
    ) -> AppResult<usize> {
        let path = expand_tilde(&target.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                target.file
            )));
        }

        let rows = ListLogic::all_filtered(items, filter)?;
        let table = ExportTable::from_items(&rows)?;

        if table.is_empty() {
            notices.info(format!("No {} match the filter; nothing exported.", table.entity));
            return Ok(0);
        }

        ensure_writable(&path, target.force)?;

        let key = target.format.as_str();
        notices.start_submit(key);
        tracing::debug!(entity = table.entity, rows = table.len(), format = key, "export");

        let written = match target.format {
            ExportFormat::Csv => export_csv(&table, &path),
            ExportFormat::Json => export_json(&table, &path),
            ExportFormat::Xlsx => export_xlsx(&table, &path),
        };
        notices.stop_submit(key);

        match written {
            Ok(()) => {
                notices.success(format!(
                    "{} export completed: {} rows written to {}",
                    key.to_uppercase(),
                    table.len(),
                    path.display()
                ));
                Ok(table.len())
            }
            Err(e) => {
                notices.error(format!("{} export failed", key.to_uppercase()));
                Err(e)
            }
        }
    }
}
