//! Export row projection and CSV serialization
//!
//! One projection serves every export format: the same `Column` set
//! produces the rows handed to the CSV sink and to the spreadsheet sink,
//! so the two downloads cannot drift in column content. The spreadsheet
//! serialization itself (XLSX/PDF) is an external collaborator; this
//! module only builds its payload.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::record::{parse_date, parse_number, RawRecord};

/// A display-safe cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(Decimal),
    Date(NaiveDate),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Empty => Ok(()),
        }
    }
}

type DerivedFn = Box<dyn Fn(&RawRecord) -> CellValue>;

enum ColumnSource {
    Field(String),
    Derived(DerivedFn),
}

/// One output column: a header plus either a raw field name or a
/// derivation over the whole record
pub struct Column {
    header: String,
    source: ColumnSource,
}

impl Column {
    pub fn field<H: Into<String>, F: Into<String>>(header: H, field: F) -> Self {
        Self {
            header: header.into(),
            source: ColumnSource::Field(field.into()),
        }
    }

    pub fn derived<H, F>(header: H, derive: F) -> Self
    where
        H: Into<String>,
        F: Fn(&RawRecord) -> CellValue + 'static,
    {
        Self {
            header: header.into(),
            source: ColumnSource::Derived(Box::new(derive)),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    fn cell(&self, record: &RawRecord) -> CellValue {
        match &self.source {
            ColumnSource::Field(name) => match record.get(name) {
                None | Some(serde_json::Value::Null) => CellValue::Empty,
                Some(v @ serde_json::Value::Number(_)) => CellValue::Number(parse_number(v)),
                Some(v @ serde_json::Value::String(s)) => match parse_date(v) {
                    Some(date) => CellValue::Date(date),
                    None => CellValue::Text(s.clone()),
                },
                Some(serde_json::Value::Bool(b)) => CellValue::Text(b.to_string()),
                // Arrays and objects are not representable in a flat row
                Some(_) => CellValue::Empty,
            },
            ColumnSource::Derived(derive) => derive(record),
        }
    }
}

/// A projected table ready for an export sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Project records into a flat table, one row per record, input order
/// preserved.
///
/// Errors only on caller mistakes: an empty column set or duplicate
/// headers.
pub fn project(records: &[RawRecord], columns: &[Column]) -> ExportResult<ExportTable> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }
    for (i, column) in columns.iter().enumerate() {
        if columns[..i].iter().any(|c| c.header == column.header) {
            return Err(ExportError::DuplicateHeader(column.header.clone()));
        }
    }

    let headers = columns.iter().map(|c| c.header.clone()).collect();
    let rows = records
        .iter()
        .map(|record| columns.iter().map(|c| c.cell(record)).collect())
        .collect();
    Ok(ExportTable { headers, rows })
}

/// Serialize a projected table to a CSV string with RFC 4180 quoting
/// (fields containing commas, quotes, or newlines are quoted and internal
/// quotes doubled).
pub fn to_csv(table: &ExportTable) -> ExportResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Writer(e.to_string()))?;
    let csv_data =
        String::from_utf8(bytes).map_err(|e| ExportError::Writer(e.to_string()))?;
    debug!(rows = table.rows.len(), "serialized export table to CSV");
    Ok(csv_data)
}

/// One sheet of a spreadsheet export
#[derive(Serialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Producer-side payload for the external spreadsheet sink
#[derive(Serialize)]
pub struct Workbook {
    pub filename: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new<S: Into<String>>(filename: S) -> Self {
        Self {
            filename: filename.into(),
            sheets: Vec::new(),
        }
    }

    /// Add a sheet built from a projected table
    pub fn add_sheet<S: Into<String>>(&mut self, name: S, table: &ExportTable) {
        self.sheets.push(Sheet {
            name: name.into(),
            headers: table.headers.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(values: &[serde_json::Value]) -> Vec<RawRecord> {
        values
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_project_preserves_order_and_coerces() {
        let records = raw(&[
            json!({"supply_code": "SUP-2025-00002", "quantity_kg": 50,
                   "supply_date": "2025-09-20", "notes": null}),
            json!({"supply_code": "SUP-2025-00001", "quantity_kg": "100",
                   "supply_date": "2025-09-05"}),
        ]);
        let columns = [
            Column::field("Supply ID", "supply_code"),
            Column::field("Quantity (kg)", "quantity_kg"),
            Column::field("Date", "supply_date"),
            Column::field("Notes", "notes"),
        ];
        let table = project(&records, &columns).unwrap();

        assert_eq!(
            table.headers,
            vec!["Supply ID", "Quantity (kg)", "Date", "Notes"]
        );
        // Input order preserved, no implicit resort
        assert_eq!(table.rows[0][0], CellValue::Text("SUP-2025-00002".into()));
        assert_eq!(table.rows[0][1], CellValue::Number(Decimal::from(50)));
        assert_eq!(
            table.rows[0][2],
            CellValue::Date(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap())
        );
        assert_eq!(table.rows[0][3], CellValue::Empty);
        // Numeric string stays text through the field path unless it parses
        // as a date; quantity "100" renders via Display as "100"
        assert_eq!(table.rows[1][1].to_string(), "100");
    }

    #[test]
    fn test_project_derived_column() {
        let records = raw(&[json!({"payment_status": "paid"})]);
        let columns = [Column::derived("Status", |r| {
            CellValue::Text(
                r.get("payment_status")
                    .and_then(|v| v.as_str())
                    .unwrap_or("pending")
                    .to_uppercase(),
            )
        })];
        let table = project(&records, &columns).unwrap();
        assert_eq!(table.rows[0][0], CellValue::Text("PAID".into()));
    }

    #[test]
    fn test_project_rejects_duplicate_headers() {
        let columns = [
            Column::field("Quantity", "quantity_kg"),
            Column::field("Quantity", "quantity_kg"),
        ];
        assert!(matches!(
            project(&[], &columns),
            Err(ExportError::DuplicateHeader(_))
        ));
    }

    #[test]
    fn test_project_rejects_empty_columns() {
        assert!(matches!(project(&[], &[]), Err(ExportError::NoColumns)));
    }

    #[test]
    fn test_to_csv_quotes_special_characters() {
        let table = ExportTable {
            headers: vec!["Notes".into()],
            rows: vec![vec![CellValue::Text("He said, \"hi\"\nline2".into())]],
        };
        let csv_data = to_csv(&table).unwrap();
        assert!(csv_data.contains("\"He said, \"\"hi\"\"\nline2\""));

        // Round-trip through a standard CSV parser reproduces the original
        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "He said, \"hi\"\nline2");
    }

    #[test]
    fn test_workbook_shares_projection_with_csv() {
        let records = raw(&[json!({"supply_code": "SUP-2025-00001", "quantity_kg": 100})]);
        let columns = [
            Column::field("Supply ID", "supply_code"),
            Column::field("Quantity (kg)", "quantity_kg"),
        ];
        let table = project(&records, &columns).unwrap();

        let csv_data = to_csv(&table).unwrap();
        let mut workbook = Workbook::new("supplies-2025-09.xlsx");
        workbook.add_sheet("Supplies", &table);

        // Both sinks see the same headers and cell text
        assert!(csv_data.starts_with("Supply ID,Quantity (kg)\n"));
        assert_eq!(workbook.sheets[0].headers, table.headers);
        assert_eq!(workbook.sheets[0].rows[0], vec!["SUP-2025-00001", "100"]);
    }
}
