use crate::model::{CanonicalRow, Column};

/// Status fragments that mark a ticket as actionable. Substring matching
/// tolerates label variation ("Encaminhada", "Encaminhado ao prestador",
/// "Reencaminhada", ...).
const ACTIONABLE_FRAGMENTS: [&str; 5] = ["encaminh", "transfer", "campo", "reenc", "proced"];

/// Status Gate: does this status label mark a ticket the operator can act on?
pub fn is_actionable(status: &str) -> bool {
    let lower = status.to_lowercase();
    ACTIONABLE_FRAGMENTS.iter().any(|f| lower.contains(f))
}

/// Prune a freshly ingested dataset down to actionable tickets.
///
/// If the prune would remove every row (unexpected status vocabulary), the
/// un-pruned dataset is kept instead so the operator never faces an empty
/// table. The second return value reports that bypass.
pub fn prune_actionable(rows: Vec<CanonicalRow>) -> (Vec<CanonicalRow>, bool) {
    let kept: Vec<CanonicalRow> = rows
        .iter()
        .filter(|r| is_actionable(r.get(Column::Status)))
        .cloned()
        .collect();

    if kept.is_empty() && !rows.is_empty() {
        tracing::warn!(
            rows = rows.len(),
            "no actionable statuses found; keeping un-pruned dataset"
        );
        (rows, true)
    } else {
        (kept, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{RawRow, RawValue};
    use crate::normalize::build_row;

    fn row_with_status(status: &str) -> CanonicalRow {
        let mut raw = RawRow::new();
        raw.push("Status", RawValue::Text(status.into()));
        build_row(&raw)
    }

    #[test]
    fn matches_allow_listed_fragments() {
        assert!(is_actionable("Encaminhada"));
        assert!(is_actionable("Transferida para o prestador"));
        assert!(is_actionable("Em Campo"));
        assert!(is_actionable("Reencaminhada"));
        assert!(is_actionable("Procedente"));
    }

    #[test]
    fn is_case_insensitive() {
        assert!(is_actionable("ENCAMINHADA"));
        assert!(is_actionable("em campo"));
    }

    #[test]
    fn rejects_other_statuses() {
        assert!(!is_actionable("Concluída"));
        assert!(!is_actionable("Cancelada"));
        assert!(!is_actionable(""));
    }

    #[test]
    fn prune_keeps_only_actionable() {
        let rows = vec![
            row_with_status("Encaminhada"),
            row_with_status("Cancelada"),
            row_with_status("Em Campo"),
        ];
        let (kept, bypassed) = prune_actionable(rows);
        assert_eq!(kept.len(), 2);
        assert!(!bypassed);
    }

    #[test]
    fn prune_falls_back_when_nothing_matches() {
        let rows = vec![row_with_status("Concluída"), row_with_status("Cancelada")];
        let (kept, bypassed) = prune_actionable(rows);
        assert_eq!(kept.len(), 2);
        assert!(bypassed);
    }

    #[test]
    fn prune_of_empty_dataset_is_empty() {
        let (kept, bypassed) = prune_actionable(Vec::new());
        assert!(kept.is_empty());
        assert!(!bypassed);
    }
}
