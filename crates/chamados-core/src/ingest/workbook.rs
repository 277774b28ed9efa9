use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};

use crate::error::ChamadosError;
use crate::ingest::{RawRow, RawValue, SheetReader};

#[derive(Debug, Clone, Copy)]
enum WorkbookKind {
    Xlsx,
    Xls,
}

/// Calamine-backed reader for xlsx/xls workbooks.
///
/// Reads the first sheet only, takes the first row as headers and maps
/// every cell below it to a `RawValue`. Date cells are decoded through
/// calamine's typed datetime support, which resolves the 1900/1904 epoch
/// per workbook.
#[derive(Debug)]
pub struct WorkbookReader {
    kind: WorkbookKind,
}

impl WorkbookReader {
    pub fn xlsx() -> WorkbookReader {
        WorkbookReader {
            kind: WorkbookKind::Xlsx,
        }
    }

    pub fn xls() -> WorkbookReader {
        WorkbookReader {
            kind: WorkbookKind::Xls,
        }
    }

    fn first_sheet(&self, bytes: &[u8]) -> Result<Range<Data>, ChamadosError> {
        let cursor = Cursor::new(bytes.to_vec());
        match self.kind {
            WorkbookKind::Xlsx => {
                let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
                    .map_err(|e| ChamadosError::ParseFailure(format!("failed to open xlsx: {e}")))?;
                let name = first_sheet_name(workbook.sheet_names())?;
                workbook.worksheet_range(&name).map_err(|e| {
                    ChamadosError::ParseFailure(format!("failed to read sheet '{name}': {e}"))
                })
            }
            WorkbookKind::Xls => {
                let mut workbook: Xls<_> = calamine::open_workbook_from_rs(cursor)
                    .map_err(|e| ChamadosError::ParseFailure(format!("failed to open xls: {e}")))?;
                let name = first_sheet_name(workbook.sheet_names())?;
                workbook.worksheet_range(&name).map_err(|e| {
                    ChamadosError::ParseFailure(format!("failed to read sheet '{name}': {e}"))
                })
            }
        }
    }
}

impl SheetReader for WorkbookReader {
    fn read_rows(&self, bytes: &[u8]) -> Result<Vec<RawRow>, ChamadosError> {
        let range = self.first_sheet(bytes)?;
        Ok(range_to_rows(&range))
    }

    fn backend_name(&self) -> &str {
        match self.kind {
            WorkbookKind::Xlsx => "xlsx",
            WorkbookKind::Xls => "xls",
        }
    }
}

fn first_sheet_name(names: Vec<String>) -> Result<String, ChamadosError> {
    names
        .into_iter()
        .next()
        .ok_or_else(|| ChamadosError::ParseFailure("workbook has no sheets".into()))
}

fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    for data_row in rows {
        let mut raw = RawRow::new();
        for (i, cell) in data_row.iter().enumerate() {
            let header = headers.get(i).map(String::as_str).unwrap_or_default();
            if header.is_empty() {
                continue; // unnamed column, cannot be keyed
            }
            raw.push(header, cell_value(cell));
        }
        if !raw.is_empty() {
            out.push(raw);
        }
    }
    out
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{other}").trim().to_string(),
    }
}

fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                RawValue::Empty
            } else {
                RawValue::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => RawValue::Date(naive),
            None => RawValue::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.trim().to_string()),
        Data::Error(_) => RawValue::Empty,
    }
}
