pub mod error;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod pending;
pub mod status;

use chrono::NaiveDate;

use error::ChamadosError;
use export::SheetWriter;
use ingest::SheetReader;
use model::{CanonicalRow, Dataset};

/// Main ingestion entry point: file buffer -> canonical dataset.
///
/// Reads the raw rows through the given backend, builds canonical rows in
/// fixed column order and applies the initial Status Gate prune (with its
/// keep-everything fallback). The returned dataset is immutable; filtering
/// and export operate on derived subsets.
pub fn ingest(bytes: &[u8], reader: &dyn SheetReader) -> Result<Dataset, ChamadosError> {
    let raw = reader.read_rows(bytes)?;
    if raw.is_empty() {
        return Err(ChamadosError::InputEmpty);
    }

    let rows = normalize::build_rows(&raw);
    let total_ingested = rows.len();
    let (rows, gate_bypassed) = status::prune_actionable(rows);

    tracing::debug!(
        backend = reader.backend_name(),
        total_ingested,
        kept = rows.len(),
        gate_bypassed,
        "dataset ingested"
    );

    Ok(Dataset {
        rows,
        total_ingested,
        gate_bypassed,
    })
}

/// Export the pending subset of the given (already filtered) rows.
///
/// Recomputes the due-or-overdue subset relative to `today`, re-applies the
/// Status Gate, and hands the presentation plan to the writer backend.
/// An empty pending subset aborts with `NothingToExport`; no file content
/// is produced on that path.
pub fn export_pending(
    rows: &[&CanonicalRow],
    today: NaiveDate,
    writer: &dyn SheetWriter,
) -> Result<Vec<u8>, ChamadosError> {
    let pending = pending::select_pending(rows, today);
    if pending.is_empty() {
        return Err(ChamadosError::NothingToExport);
    }

    let plan = export::plan_export(&pending, today);
    tracing::debug!(
        backend = writer.backend_name(),
        pending = plan.rows.len(),
        "export plan built"
    );
    writer.write(&plan)
}
