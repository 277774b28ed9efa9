use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Number of columns in the canonical schema.
pub const COLUMN_COUNT: usize = 13;

/// Constant `Origem` tag stamped on every ingested row.
pub const ORIGIN_TAG: &str = "MOB";

/// The fixed canonical schema every ingested row is normalized into.
///
/// Order matters: it is the column order of the canonical dataset, of the
/// JSON output and of the exported spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Origem,
    Chamado,
    NumeroReferencia,
    Contratante,
    Servico,
    Status,
    DataLimite,
    Cliente,
    CnpjCpf,
    Cidade,
    Tecnico,
    Prestador,
    JustificativaAbono,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Origem,
        Column::Chamado,
        Column::NumeroReferencia,
        Column::Contratante,
        Column::Servico,
        Column::Status,
        Column::DataLimite,
        Column::Cliente,
        Column::CnpjCpf,
        Column::Cidade,
        Column::Tecnico,
        Column::Prestador,
        Column::JustificativaAbono,
    ];

    /// Display header, as written in the exported spreadsheet.
    pub fn header(self) -> &'static str {
        match self {
            Column::Origem => "Origem",
            Column::Chamado => "Chamado",
            Column::NumeroReferencia => "Numero Referencia",
            Column::Contratante => "Contratante",
            Column::Servico => "Serviço",
            Column::Status => "Status",
            Column::DataLimite => "Data Limite",
            Column::Cliente => "Cliente",
            Column::CnpjCpf => "CNPJ/CPF",
            Column::Cidade => "Cidade",
            Column::Tecnico => "Técnico",
            Column::Prestador => "Prestador",
            Column::JustificativaAbono => "Justificativa do Abono",
        }
    }

    /// Position of this column in the canonical order.
    pub fn index(self) -> usize {
        Column::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One ticket row in canonical form.
///
/// All 13 columns are always present; absent or unparseable source fields
/// are stored as empty strings. Rows are immutable after the Row Builder
/// produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRow {
    values: [String; COLUMN_COUNT],
}

impl CanonicalRow {
    pub(crate) fn from_values(values: [String; COLUMN_COUNT]) -> CanonicalRow {
        CanonicalRow { values }
    }

    pub fn get(&self, col: Column) -> &str {
        &self.values[col.index()]
    }

    /// Values in canonical column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Serialize for CanonicalRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for col in Column::ALL {
            map.serialize_entry(col.header(), self.get(col))?;
        }
        map.end()
    }
}

/// The canonical dataset produced by one ingestion.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Rows in source order, after the initial Status Gate prune.
    pub rows: Vec<CanonicalRow>,
    /// Row count before the Status Gate prune.
    pub total_ingested: usize,
    /// True when the prune would have emptied the dataset and was skipped.
    pub gate_bypassed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_is_stable() {
        assert_eq!(Column::ALL.len(), COLUMN_COUNT);
        assert_eq!(Column::ALL[0], Column::Origem);
        assert_eq!(Column::ALL[6], Column::DataLimite);
        assert_eq!(Column::ALL[12], Column::JustificativaAbono);
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
        }
    }

    #[test]
    fn row_serializes_as_ordered_map() {
        let mut values: [String; COLUMN_COUNT] = Default::default();
        values[Column::Origem.index()] = ORIGIN_TAG.into();
        values[Column::Cliente.index()] = "Acme".into();
        let row = CanonicalRow::from_values(values);

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.starts_with("{\"Origem\":\"MOB\""));
        assert!(json.contains("\"Cliente\":\"Acme\""));
        assert!(json.contains("\"Justificativa do Abono\":\"\""));
    }
}
