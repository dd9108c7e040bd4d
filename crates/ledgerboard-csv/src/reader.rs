//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use ledgerboard_core::{CellValue, Sheet};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader producing one named sheet per file
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet with the given name
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, sheet_name, options)
    }

    /// Read CSV data from a reader into a sheet with the given name
    pub fn read<R: Read>(
        reader: R,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut headers: Vec<String> = Vec::new();
        if options.has_header {
            headers = csv_reader
                .headers()?
                .iter()
                .map(|h| h.trim().to_string())
                .collect();
        }

        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;

            if headers.is_empty() {
                // Headerless input: synthesize names from the first record
                headers = (1..=record.len()).map(|i| format!("Column{}", i)).collect();
            }

            let mut row: Vec<CellValue> = record
                .iter()
                .take(headers.len())
                .map(|field| {
                    if options.auto_detect_types {
                        detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();

            if record.len() != headers.len() {
                log::warn!(
                    "Row {} has {} fields, expected {}; adjusting",
                    idx + 1,
                    record.len(),
                    headers.len()
                );
                row.resize(headers.len(), CellValue::Empty);
            }

            rows.push(row);
        }

        Ok(Sheet::from_rows(sheet_name, headers, rows)?)
    }
}

/// Detect the type of a field value
fn detect_type(field: &str) -> CellValue {
    let field = field.trim();

    if field.is_empty() {
        return CellValue::Empty;
    }

    match field.to_lowercase().as_str() {
        "true" => return CellValue::Boolean(true),
        "false" => return CellValue::Boolean(false),
        _ => {}
    }

    if let Ok(n) = field.parse::<f64>() {
        return CellValue::Number(n);
    }

    // ISO first, then the day-first format common in exported planillas
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(field, format) {
            return CellValue::Date(d);
        }
    }

    CellValue::string(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_read_with_headers() {
        let data = "Tipo Cliente,Monto Neto,Fecha\n\
                    Seguro,3400,2024-03-01\n\
                    Particular,1200.50,02/03/2024\n";

        let sheet =
            CsvReader::read(data.as_bytes(), "FACTURACION", &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.name(), "FACTURACION");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(
            sheet.column_names().collect::<Vec<_>>(),
            vec!["Tipo Cliente", "Monto Neto", "Fecha"]
        );
        assert_eq!(
            sheet.column("Monto Neto").unwrap().values(),
            &[CellValue::Number(3400.0), CellValue::Number(1200.50)]
        );
        assert_eq!(
            sheet.column("Fecha").unwrap().values()[0],
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_type_detection() {
        assert_eq!(detect_type(""), CellValue::Empty);
        assert_eq!(detect_type("  "), CellValue::Empty);
        assert_eq!(detect_type("TRUE"), CellValue::Boolean(true));
        assert_eq!(detect_type("-12.5"), CellValue::Number(-12.5));
        assert_eq!(detect_type("Seguro"), CellValue::string("Seguro"));
        assert_eq!(
            detect_type("15/01/2024"),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_short_rows_padded() {
        let data = "A,B\n1,2\n3\n";
        let sheet = CsvReader::read(data.as_bytes(), "S", &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(
            sheet.column("B").unwrap().values(),
            &[CellValue::Number(2.0), CellValue::Empty]
        );
    }

    #[test]
    fn test_no_type_detection() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..Default::default()
        };
        let sheet = CsvReader::read("A\n42\n".as_bytes(), "S", &options).unwrap();
        assert_eq!(
            sheet.column("A").unwrap().values(),
            &[CellValue::string("42")]
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Categoria,Monto\nPintura,800\n").unwrap();

        let sheet =
            CsvReader::read_file(file.path(), "Gastos", &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(
            sheet.column("Monto").unwrap().values(),
            &[CellValue::Number(800.0)]
        );
    }
}
