use std::path::PathBuf;

use chamados_core::error::ChamadosError;
use chamados_core::ingest;

use crate::commands::filter_state_from_args;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    filters: &[String],
) -> Result<(), ChamadosError> {
    let bytes = std::fs::read(&input_file)?;
    let reader = ingest::reader_for_path(&input_file)?;
    let dataset = chamados_core::ingest(&bytes, reader.as_ref())?;

    if dataset.gate_bypassed {
        eprintln!(
            "warning: no actionable statuses found in {}; showing all {} rows",
            input_file.display(),
            dataset.rows.len()
        );
    }

    let state = filter_state_from_args(filters)?;
    let visible = state.visible_rows(&dataset.rows);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file.
            let json = output::json::render(&visible)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "{} of {} rows written to {}",
                visible.len(),
                dataset.rows.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => println!("{}", output::json::render(&visible)?),
            _ => output::table::print(&visible),
        },
    }

    Ok(())
}
