use crate::error::ChamadosError;
use crate::ingest::{RawRow, RawValue, SheetReader};

/// CSV reading backend.
///
/// All values arrive as text; date disambiguation happens later in the
/// field normalizers, same as for free-text workbook cells.
#[derive(Debug)]
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> CsvReader {
        CsvReader
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        CsvReader::new()
    }
}

impl SheetReader for CsvReader {
    fn read_rows(&self, bytes: &[u8]) -> Result<Vec<RawRow>, ChamadosError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ChamadosError::ParseFailure(format!("failed to read csv header: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut out = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| ChamadosError::ParseFailure(format!("bad csv record: {e}")))?;
            let mut raw = RawRow::new();
            for (i, field) in record.iter().enumerate() {
                let header = headers.get(i).map(String::as_str).unwrap_or_default();
                if header.is_empty() {
                    continue;
                }
                let trimmed = field.trim();
                let value = if trimmed.is_empty() {
                    RawValue::Empty
                } else {
                    RawValue::Text(trimmed.to_string())
                };
                raw.push(header, value);
            }
            if !raw.is_empty() {
                out.push(raw);
            }
        }
        Ok(out)
    }

    fn backend_name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_keyed_rows() {
        let data = b"Chamado,Status,Data Limite\n1234,Encaminhada,05/01/2024\n";
        let rows = CsvReader::new().read_rows(data).unwrap();
        assert_eq!(rows.len(), 1);
        let cells: Vec<_> = rows[0].iter().collect();
        assert_eq!(cells[0], ("Chamado", &RawValue::Text("1234".into())));
        assert_eq!(cells[2], ("Data Limite", &RawValue::Text("05/01/2024".into())));
    }

    #[test]
    fn blank_fields_become_empty() {
        let data = b"Chamado,Cidade\n1234,\n";
        let rows = CsvReader::new().read_rows(data).unwrap();
        let cells: Vec<_> = rows[0].iter().collect();
        assert_eq!(cells[1].1, &RawValue::Empty);
    }

    #[test]
    fn no_data_rows_yields_empty_vec() {
        let data = b"Chamado,Cidade\n";
        let rows = CsvReader::new().read_rows(data).unwrap();
        assert!(rows.is_empty());
    }
}
