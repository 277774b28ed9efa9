//! Per-column multi-select filtering over the canonical dataset.
//!
//! Each column carries an independent selection; a row is visible when it
//! satisfies every constrained column (conjunctive matching). The visible
//! subset is a pure function of (dataset, FilterState), recomputed on each
//! call rather than cached incrementally.

use std::collections::BTreeSet;

use crate::model::{CanonicalRow, Column, COLUMN_COUNT};

/// Filter-menu token representing a blank value.
pub const EMPTY_SENTINEL: &str = "(Vazio)";

/// Display value of a cell for filtering purposes: blanks map to the
/// `(Vazio)` sentinel so they can be selected like any other value.
pub fn display_value(row: &CanonicalRow, col: Column) -> &str {
    let v = row.get(col);
    if v.is_empty() {
        EMPTY_SENTINEL
    } else {
        v
    }
}

/// Selection state of a single column.
///
/// `Unrestricted` is the initial "never touched" state. An explicitly
/// emptied selection is kept as `Selected(∅)`: it still matches every row
/// (an empty set means "no restriction", not "reject all") but it counts
/// as an active filter, unlike `Unrestricted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnFilter {
    #[default]
    Unrestricted,
    Selected(BTreeSet<String>),
}

impl ColumnFilter {
    fn matches(&self, display: &str) -> bool {
        match self {
            ColumnFilter::Unrestricted => true,
            ColumnFilter::Selected(set) => set.is_empty() || set.contains(display),
        }
    }
}

/// Sorted distinct display values per column, computed over the FULL
/// dataset. Filter menus always offer the whole value universe, independent
/// of the current selections.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    options: [Vec<String>; COLUMN_COUNT],
}

impl FilterOptions {
    pub fn from_rows(rows: &[CanonicalRow]) -> FilterOptions {
        let options = std::array::from_fn(|i| {
            let col = Column::ALL[i];
            let distinct: BTreeSet<String> = rows
                .iter()
                .map(|r| display_value(r, col).to_string())
                .collect();
            distinct.into_iter().collect()
        });
        FilterOptions { options }
    }

    pub fn for_column(&self, col: Column) -> &[String] {
        &self.options[col.index()]
    }
}

/// One live FilterState per loaded dataset; reset on every new upload.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    filters: [ColumnFilter; COLUMN_COUNT],
}

impl FilterState {
    pub fn new() -> FilterState {
        FilterState::default()
    }

    pub fn column(&self, col: Column) -> &ColumnFilter {
        &self.filters[col.index()]
    }

    /// Symmetric difference of `value` in the column's selection set.
    /// Toggling on an unrestricted column starts a selection with just
    /// that value.
    pub fn toggle_value(&mut self, col: Column, value: &str) {
        let filter = &mut self.filters[col.index()];
        match filter {
            ColumnFilter::Unrestricted => {
                *filter = ColumnFilter::Selected(BTreeSet::from([value.to_string()]));
            }
            ColumnFilter::Selected(set) => {
                if !set.remove(value) {
                    set.insert(value.to_string());
                }
            }
        }
    }

    pub fn select_all(&mut self, col: Column, options: &FilterOptions) {
        let all: BTreeSet<String> = options.for_column(col).iter().cloned().collect();
        self.filters[col.index()] = ColumnFilter::Selected(all);
    }

    pub fn clear_column(&mut self, col: Column) {
        self.filters[col.index()] = ColumnFilter::Selected(BTreeSet::new());
    }

    /// Does this row satisfy every constrained column?
    pub fn matches(&self, row: &CanonicalRow) -> bool {
        Column::ALL
            .iter()
            .all(|col| self.filters[col.index()].matches(display_value(row, *col)))
    }

    /// The visible subset: recomputed in one pass, never cached.
    pub fn visible_rows<'a>(&self, rows: &'a [CanonicalRow]) -> Vec<&'a CanonicalRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }

    /// True iff at least one column's selection is a strict subset of that
    /// column's full option universe. A selection holding every possible
    /// value counts as "not filtering".
    pub fn has_active_filters(&self, options: &FilterOptions) -> bool {
        Column::ALL.iter().any(|col| {
            match &self.filters[col.index()] {
                ColumnFilter::Unrestricted => false,
                ColumnFilter::Selected(set) => set.len() != options.for_column(*col).len(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{RawRow, RawValue};
    use crate::normalize::build_rows;

    fn dataset() -> Vec<CanonicalRow> {
        let mut rows = Vec::new();
        for (status, city) in [
            ("Encaminhada", "Recife"),
            ("Em Campo", "Olinda"),
            ("Em Campo", ""),
        ] {
            let mut raw = RawRow::new();
            raw.push("Status", RawValue::Text(status.into()));
            if !city.is_empty() {
                raw.push("Cidade", RawValue::Text(city.into()));
            }
            rows.push(raw);
        }
        build_rows(&rows)
    }

    #[test]
    fn fresh_state_is_identity_filter() {
        let rows = dataset();
        let state = FilterState::new();
        assert_eq!(state.visible_rows(&rows).len(), rows.len());
    }

    #[test]
    fn toggle_restricts_then_releases() {
        let rows = dataset();
        let mut state = FilterState::new();

        state.toggle_value(Column::Status, "Em Campo");
        assert_eq!(state.visible_rows(&rows).len(), 2);

        // Toggling the same value back empties the set, which imposes no
        // constraint again.
        state.toggle_value(Column::Status, "Em Campo");
        assert_eq!(state.visible_rows(&rows).len(), 3);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let rows = dataset();
        let mut state = FilterState::new();
        state.toggle_value(Column::Status, "Em Campo");
        state.toggle_value(Column::Cidade, "Olinda");
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get(Column::Cidade), "Olinda");
    }

    #[test]
    fn blank_values_match_via_sentinel() {
        let rows = dataset();
        let mut state = FilterState::new();
        state.toggle_value(Column::Cidade, EMPTY_SENTINEL);
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get(Column::Cidade), "");
    }

    #[test]
    fn options_cover_full_dataset_with_sentinel() {
        let rows = dataset();
        let options = FilterOptions::from_rows(&rows);
        let expected: Vec<String> = vec!["(Vazio)".into(), "Olinda".into(), "Recife".into()];
        assert_eq!(options.for_column(Column::Cidade), expected.as_slice());
        // Options come from the full dataset, not the filtered view.
        let mut state = FilterState::new();
        state.toggle_value(Column::Status, "Encaminhada");
        let options_again = FilterOptions::from_rows(&rows);
        assert_eq!(
            options_again.for_column(Column::Cidade).len(),
            options.for_column(Column::Cidade).len()
        );
    }

    #[test]
    fn select_all_everywhere_is_not_filtering() {
        let rows = dataset();
        let options = FilterOptions::from_rows(&rows);
        let mut state = FilterState::new();
        for col in Column::ALL {
            state.select_all(col, &options);
        }
        assert!(!state.has_active_filters(&options));
        assert_eq!(state.visible_rows(&rows).len(), rows.len());
    }

    #[test]
    fn clear_column_shows_all_but_counts_as_active() {
        let rows = dataset();
        let options = FilterOptions::from_rows(&rows);
        let mut state = FilterState::new();
        state.clear_column(Column::Status);
        assert!(state.has_active_filters(&options));
        assert_eq!(state.visible_rows(&rows).len(), rows.len());
    }

    #[test]
    fn fresh_state_has_no_active_filters() {
        let rows = dataset();
        let options = FilterOptions::from_rows(&rows);
        assert!(!FilterState::new().has_active_filters(&options));
    }
}
