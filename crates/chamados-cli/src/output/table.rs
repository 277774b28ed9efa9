use chamados_core::model::{CanonicalRow, Column};

/// Cap per-column width in the terminal; long cells are truncated with an
/// ellipsis rather than wrapping.
const MAX_WIDTH: usize = 28;

/// Blank cells render as a dash, as in the original report panel.
const BLANK: &str = "—";

pub fn print(rows: &[&CanonicalRow]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }

    let widths: Vec<usize> = Column::ALL
        .iter()
        .map(|col| {
            let cell_max = rows
                .iter()
                .map(|r| cell(r, *col).chars().count())
                .max()
                .unwrap_or(0);
            col.header().chars().count().max(cell_max).min(MAX_WIDTH)
        })
        .collect();

    let header: Vec<String> = Column::ALL
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad(col.header(), *w))
        .collect();
    println!("{}", header.join("  "));

    for row in rows {
        let line: Vec<String> = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad(&cell(row, *col), *w))
            .collect();
        println!("{}", line.join("  "));
    }

    println!("\n{} row(s)", rows.len());
}

fn cell(row: &CanonicalRow, col: Column) -> String {
    let v = row.get(col);
    if v.is_empty() {
        BLANK.to_string()
    } else {
        v.to_string()
    }
}

fn pad(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{truncated}…")
    } else {
        format!("{s}{}", " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("abc", 5), "abc  ");
    }

    #[test]
    fn pad_truncates_with_ellipsis() {
        assert_eq!(pad("abcdefgh", 5), "abcd…");
        assert_eq!(pad("abcdefgh", 5).chars().count(), 5);
    }
}
