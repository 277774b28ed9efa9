/// Strip spreadsheet-export quoting artifacts from identifier fields
/// (CPF/CNPJ and the like).
///
/// Exports commonly wrap numeric-looking strings as `="12.345..."` to stop
/// Excel from mangling them; the `"`, `'` and `=` characters are artifacts,
/// not data. No digit-count or checksum validation is performed.
pub fn clean_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '='))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formula_quoting() {
        assert_eq!(
            clean_identifier("=\"12.345.678/0001-99\""),
            "12.345.678/0001-99"
        );
    }

    #[test]
    fn strips_single_quote_prefix() {
        assert_eq!(clean_identifier("'123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean_identifier("  98.765.432/0001-10  "), "98.765.432/0001-10");
    }

    #[test]
    fn plain_value_passes_through() {
        assert_eq!(clean_identifier("12.345.678/0001-99"), "12.345.678/0001-99");
        assert_eq!(clean_identifier(""), "");
    }
}
