pub mod columns;
pub mod dates;
pub mod ident;

use chrono::{Datelike, Timelike};

use crate::ingest::{RawRow, RawValue};
use crate::model::{CanonicalRow, Column, COLUMN_COUNT, ORIGIN_TAG};

/// Row Builder: apply the column resolver and the per-field normalizers to
/// every raw row, in canonical column order. Source row order is preserved;
/// rows are identified positionally and never deduplicated.
pub fn build_rows(raw: &[RawRow]) -> Vec<CanonicalRow> {
    raw.iter().map(build_row).collect()
}

/// Build one canonical row. Every canonical key is always present; absent
/// or unparseable fields become empty strings, never an error.
pub fn build_row(raw: &RawRow) -> CanonicalRow {
    let mut values: [String; COLUMN_COUNT] = Default::default();
    for col in Column::ALL {
        values[col.index()] = match col {
            Column::Origem => ORIGIN_TAG.to_string(),
            Column::DataLimite => columns::resolve(raw, col)
                .map(dates::normalize_date)
                .unwrap_or_default(),
            Column::CnpjCpf => columns::resolve(raw, col)
                .map(|v| ident::clean_identifier(&cell_text(v)))
                .unwrap_or_default(),
            _ => columns::resolve(raw, col).map(cell_text).unwrap_or_default(),
        };
    }
    CanonicalRow::from_values(values)
}

/// Plain-text rendering of a raw cell for non-date columns.
fn cell_text(value: &RawValue) -> String {
    match value {
        RawValue::Empty => String::new(),
        RawValue::Text(s) => s.trim().to_string(),
        RawValue::Number(n) => {
            // Ticket numbers arrive as float cells; render 1234.0 as "1234".
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        RawValue::Date(dt) => {
            if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                format!("{:02}/{:02}/{:04}", dt.day(), dt.month(), dt.year())
            } else {
                dt.format("%d/%m/%Y %H:%M:%S").to_string()
            }
        }
    }
}
