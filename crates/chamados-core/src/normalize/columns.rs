use std::collections::HashMap;
use std::sync::LazyLock;

use crate::ingest::{RawRow, RawValue};
use crate::model::Column;

/// Normalize a source header for alias matching.
///
/// Steps:
/// 1. Fold Portuguese diacritics (é -> e, ç -> c, ...)
/// 2. Lowercase
/// 3. Drop whitespace and separator punctuation entirely, keeping only
///    letters, digits and '/'
///
/// Dropping whitespace (instead of collapsing it) makes spacing variants
/// like "CNPJ / CPF" and "CNPJ/CPF" land on the same key.
pub fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let folded = fold_diacritic(c);
        for lower in folded.to_lowercase() {
            if lower.is_alphanumeric() || lower == '/' {
                out.push(lower);
            }
        }
    }
    out
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

/// Accepted source header spellings per canonical column, beyond the
/// canonical header itself. Normalized form on the left.
static ALIASES: LazyLock<HashMap<String, Column>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Canonical headers resolve to themselves.
    for col in Column::ALL {
        m.insert(normalize_header(col.header()), col);
    }

    let extra: [(&str, Column); 16] = [
        ("numchamado", Column::Chamado),
        ("numerochamado", Column::Chamado),
        ("numreferencia", Column::NumeroReferencia),
        ("numeroderef", Column::NumeroReferencia),
        ("nreferencia", Column::NumeroReferencia),
        ("nomecliente", Column::Cliente),
        ("cnpjcpf", Column::CnpjCpf),
        ("cpf/cnpj", Column::CnpjCpf),
        ("cpfcnpj", Column::CnpjCpf),
        ("documento", Column::CnpjCpf),
        ("dtlimite", Column::DataLimite),
        ("prazo", Column::DataLimite),
        ("prazolimite", Column::DataLimite),
        ("tecnicoresponsavel", Column::Tecnico),
        ("justificativa", Column::JustificativaAbono),
        ("justificativaabono", Column::JustificativaAbono),
    ];
    for (alias, col) in extra {
        m.insert(alias.to_string(), col);
    }

    m
});

/// Resolve a canonical column to its source value in a raw row.
///
/// Returns the first cell whose normalized header matches the canonical
/// name or one of its aliases. Missing columns are simply absent; partial
/// schemas are expected and tolerated.
pub fn resolve<'a>(row: &'a RawRow, col: Column) -> Option<&'a RawValue> {
    row.iter()
        .find(|(header, _)| ALIASES.get(normalize_header(header).as_str()) == Some(&col))
        .map(|(_, value)| value)
}

/// Resolve a user-supplied column name (e.g. a CLI filter argument) to a
/// canonical column.
pub fn resolve_canonical(name: &str) -> Option<Column> {
    ALIASES.get(normalize_header(name).as_str()).copied()
}

/// Accepted source spellings for a column, for diagnostics.
pub fn aliases_for(col: Column) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ALIASES
        .iter()
        .filter(|(_, c)| **c == col)
        .map(|(name, _)| name.as_str())
        .collect();
    names.sort_unstable();
    names
}
