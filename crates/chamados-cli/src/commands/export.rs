use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use chamados_core::error::ChamadosError;
use chamados_core::export;
use chamados_core::export::xlsx::XlsxWriter;
use chamados_core::ingest;

use crate::commands::filter_state_from_args;

pub fn run(
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    filters: &[String],
    today_override: Option<&str>,
) -> Result<(), ChamadosError> {
    let today = match today_override {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| ChamadosError::ParseFailure(format!("invalid --today value '{s}': {e}")))?,
        None => Local::now().date_naive(),
    };

    let bytes = std::fs::read(&input_file)?;
    let reader = ingest::reader_for_path(&input_file)?;
    let dataset = chamados_core::ingest(&bytes, reader.as_ref())?;

    let state = filter_state_from_args(filters)?;
    let visible = state.visible_rows(&dataset.rows);

    let document = chamados_core::export_pending(&visible, today, &XlsxWriter::new())?;

    let path = output_file.unwrap_or_else(|| PathBuf::from(export::export_file_name(today)));
    std::fs::write(&path, document)?;
    eprintln!("pending rows exported to {}", path.display());

    Ok(())
}
