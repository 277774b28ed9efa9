pub mod csv;
pub mod workbook;

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::ChamadosError;

/// One cell as delivered by a spreadsheet reader, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    /// Native date cell, already decoded by the reader (including the
    /// 1900/1904 epoch distinction for workbook formats).
    Date(NaiveDateTime),
    Empty,
}

/// One source row: an ordered header -> value mapping with no guaranteed
/// key set. Keys vary per uploaded file.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: Vec<(String, RawValue)>,
}

impl RawRow {
    pub fn new() -> RawRow {
        RawRow::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: RawValue) {
        self.cells.push((header.into(), value));
    }

    /// Cells in source column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Trait for spreadsheet reading backends.
///
/// A backend consumes a file buffer and returns one RawRow per data row,
/// keyed by the headers of the first row of the first sheet. Blank cells
/// come back as `RawValue::Empty`.
pub trait SheetReader: Send + Sync + std::fmt::Debug {
    fn read_rows(&self, bytes: &[u8]) -> Result<Vec<RawRow>, ChamadosError>;

    /// Name of this reading backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a reading backend from the file extension.
pub fn reader_for_path(path: &Path) -> Result<Box<dyn SheetReader>, ChamadosError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" => Ok(Box::new(workbook::WorkbookReader::xlsx())),
        "xls" => Ok(Box::new(workbook::WorkbookReader::xls())),
        "csv" => Ok(Box::new(csv::CsvReader::new())),
        other => Err(ChamadosError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_selection_by_extension() {
        let r = reader_for_path(Path::new("relatorio.xlsx")).unwrap();
        assert_eq!(r.backend_name(), "xlsx");
        let r = reader_for_path(Path::new("relatorio.XLS")).unwrap();
        assert_eq!(r.backend_name(), "xls");
        let r = reader_for_path(Path::new("relatorio.csv")).unwrap();
        assert_eq!(r.backend_name(), "csv");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = reader_for_path(Path::new("relatorio.pdf")).unwrap_err();
        assert!(matches!(err, ChamadosError::UnsupportedFormat(_)));
    }
}
