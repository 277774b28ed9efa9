use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use crate::error::ChamadosError;
use crate::export::{ExportPlan, RowTone, SheetWriter};

const HEADER_FILL: Color = Color::RGB(0x1F3864);
const OVERDUE_FILL: Color = Color::RGB(0xFFC7CE);
const DUE_TODAY_FILL: Color = Color::RGB(0xFFEB9C);

/// rust_xlsxwriter-backed writer. Materializes an `ExportPlan` into an
/// xlsx buffer; carries no business logic of its own.
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> XlsxWriter {
        XlsxWriter
    }
}

impl Default for XlsxWriter {
    fn default() -> Self {
        XlsxWriter::new()
    }
}

impl SheetWriter for XlsxWriter {
    fn write(&self, plan: &ExportPlan) -> Result<Vec<u8>, ChamadosError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet
            .set_name("Pendências")
            .map_err(|e| ChamadosError::Export(e.to_string()))?;

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(HEADER_FILL)
            .set_border(FormatBorder::Thin);
        let default_format = Format::new().set_border(FormatBorder::Thin);
        let overdue_format = Format::new()
            .set_border(FormatBorder::Thin)
            .set_background_color(OVERDUE_FILL);
        let due_today_format = Format::new()
            .set_border(FormatBorder::Thin)
            .set_background_color(DUE_TODAY_FILL);

        for (col, header) in plan.headers.iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| ChamadosError::Export(e.to_string()))?;
        }

        for (i, (values, tone)) in plan.rows.iter().zip(&plan.tones).enumerate() {
            let format = match tone {
                RowTone::Overdue => &overdue_format,
                RowTone::DueToday => &due_today_format,
                RowTone::Default => &default_format,
            };
            for (col, value) in values.iter().enumerate() {
                sheet
                    .write_string_with_format(i as u32 + 1, col as u16, value, format)
                    .map_err(|e| ChamadosError::Export(e.to_string()))?;
            }
        }

        for (col, width) in plan.column_widths.iter().enumerate() {
            sheet
                .set_column_width(col as u16, *width)
                .map_err(|e| ChamadosError::Export(e.to_string()))?;
        }
        sheet
            .set_freeze_panes(1, 0)
            .map_err(|e| ChamadosError::Export(e.to_string()))?;

        workbook
            .save_to_buffer()
            .map_err(|e| ChamadosError::Export(e.to_string()))
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::plan_export;
    use crate::ingest::{RawRow, RawValue};
    use crate::normalize::build_row;
    use chrono::NaiveDate;

    #[test]
    fn writes_a_valid_xlsx_buffer() {
        let mut raw = RawRow::new();
        raw.push("Status", RawValue::Text("Em Campo".into()));
        raw.push("Data Limite", RawValue::Text("14/06/2024".into()));
        raw.push("Nome Cliente", RawValue::Text("Acme".into()));
        let row = build_row(&raw);

        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let plan = plan_export(&[&row], today);
        let bytes = XlsxWriter::new().write(&plan).unwrap();

        // xlsx is a zip container; check the magic and that content exists.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_plan_still_produces_a_document() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let plan = plan_export(&[], today);
        let bytes = XlsxWriter::new().write(&plan).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
