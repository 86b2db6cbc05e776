use crate::errors::AppResult;
use crate::models::Listable;
use serde_json::Value;

/// Columns kept as text in spreadsheets even when they look numeric.
const TEXT_COLUMNS: &[&str] = &["Phone"];

/// A filtered list flattened for export.
///
/// `headers`/`rows` are the same cells the list table shows (CSV, XLSX);
/// `records` keeps the full serialized records (JSON).
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub entity: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<Value>,
}

impl ExportTable {
    pub fn from_items<T: Listable>(items: &[&T]) -> AppResult<Self> {
        let records = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entity: T::KIND.as_str(),
            headers: T::headers(),
            rows: items.iter().map(|i| i.row()).collect(),
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Integer value of a cell in column `col`, if it should be written as a
    /// number. Text columns, signed values and leading zeros stay text.
    pub fn numeric_cell(&self, col: usize, value: &str) -> Option<i64> {
        let header = self.headers.get(col)?;
        if TEXT_COLUMNS.contains(header) {
            return None;
        }
        let digits = value.bytes().all(|b| b.is_ascii_digit());
        if !digits || (value.len() > 1 && value.starts_with('0')) {
            return None;
        }
        value.parse().ok()
    }
}
