//! Export planning: turn a pending subset into a presentation plan the
//! spreadsheet-writing backend can materialize without any business logic.

pub mod xlsx;

use chrono::NaiveDate;

use crate::error::ChamadosError;
use crate::model::{CanonicalRow, Column};
use crate::normalize::dates;

/// Column widths are capped so one long justification does not stretch the
/// sheet unreadably.
const MAX_COLUMN_WIDTH: f64 = 60.0;
const WIDTH_PADDING: f64 = 2.0;

/// Background tone of an exported row, keyed by due-date proximity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    Default,
    /// Due exactly today (amber tint).
    DueToday,
    /// Due before today (red tint).
    Overdue,
}

/// Tone for one row given the export date.
pub fn row_tone(row: &CanonicalRow, today: NaiveDate) -> RowTone {
    match dates::parse_canonical(row.get(Column::DataLimite)) {
        Some(due) if due < today => RowTone::Overdue,
        Some(due) if due == today => RowTone::DueToday,
        _ => RowTone::Default,
    }
}

/// Everything the writer backend needs: ordered headers, row values in the
/// same order, a tone per row and a width per column.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub tones: Vec<RowTone>,
    pub column_widths: Vec<f64>,
}

/// Build the presentation plan for a pending subset.
pub fn plan_export(rows: &[&CanonicalRow], today: NaiveDate) -> ExportPlan {
    let headers: Vec<&'static str> = Column::ALL.iter().map(|c| c.header()).collect();

    let mut widths: Vec<f64> = headers
        .iter()
        .map(|h| h.chars().count() as f64)
        .collect();

    let mut plan_rows = Vec::with_capacity(rows.len());
    let mut tones = Vec::with_capacity(rows.len());
    for row in rows {
        let values: Vec<String> = row.values().map(str::to_string).collect();
        for (i, v) in values.iter().enumerate() {
            widths[i] = widths[i].max(v.chars().count() as f64);
        }
        plan_rows.push(values);
        tones.push(row_tone(row, today));
    }

    let column_widths = widths
        .into_iter()
        .map(|w| (w + WIDTH_PADDING).min(MAX_COLUMN_WIDTH))
        .collect();

    ExportPlan {
        headers,
        rows: plan_rows,
        tones,
        column_widths,
    }
}

/// Trait for spreadsheet writing backends.
pub trait SheetWriter: Send + Sync {
    /// Materialize the plan into a downloadable document buffer.
    fn write(&self, plan: &ExportPlan) -> Result<Vec<u8>, ChamadosError>;

    /// Name of this writing backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Default output file name: `pendencias_mob_<ISO-date>.xlsx`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("pendencias_mob_{}.xlsx", today.format("%Y-%m-%d"))
}
