use chrono::NaiveDate;

use crate::model::{CanonicalRow, Column};
use crate::normalize::dates;
use crate::status;

/// Select the due-or-overdue subset of the (already filtered) rows.
///
/// A row is pending when its `Data Limite` parses to a date on or before
/// `today` (date-only comparison) AND its status passes the Status Gate
/// again. Rows with blank or unparseable due dates are excluded, not
/// treated as pending.
pub fn select_pending<'a>(rows: &[&'a CanonicalRow], today: NaiveDate) -> Vec<&'a CanonicalRow> {
    rows.iter()
        .copied()
        .filter(|row| {
            let due = match dates::parse_canonical(row.get(Column::DataLimite)) {
                Some(d) => d,
                None => return false,
            };
            due <= today && status::is_actionable(row.get(Column::Status))
        })
        .collect()
}
