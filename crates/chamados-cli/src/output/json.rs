use chamados_core::error::ChamadosError;
use chamados_core::model::CanonicalRow;

/// Render rows as a pretty-printed JSON array of ordered 13-key objects.
pub fn render(rows: &[&CanonicalRow]) -> Result<String, ChamadosError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
