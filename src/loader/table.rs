//! Raw tabular input as handed over by an external tabular reader

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{ReconcileError, ReconcileResult};

/// A single cell of a raw input table.
///
/// Tabular readers (spreadsheet or CSV collaborators) produce typed cells;
/// the loader converts them to the field types the canonical schema needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Textual cell content
    Text(String),
    /// Numeric cell content
    Number(BigDecimal),
    /// Blank cell
    Empty,
}

impl CellValue {
    /// Textual rendering of the cell. Numbers render via `Display`, blank
    /// cells as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Convert the cell to a decimal amount.
    ///
    /// Blank tax cells are common in portal exports and mean zero. Text is
    /// parsed; text that is not a number is a type error naming the column.
    pub fn to_decimal(&self, column: &str) -> ReconcileResult<BigDecimal> {
        match self {
            CellValue::Number(n) => Ok(n.clone()),
            CellValue::Text(s) => {
                BigDecimal::from_str(s.trim()).map_err(|_| ReconcileError::NonNumeric {
                    column: column.to_string(),
                    value: s.clone(),
                })
            }
            CellValue::Empty => Ok(BigDecimal::from(0)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(BigDecimal::from(n))
    }
}

impl From<BigDecimal> for CellValue {
    fn from(n: BigDecimal) -> Self {
        CellValue::Number(n)
    }
}

/// A raw table: one header row plus data rows, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers, as exported by the source system
    pub headers: Vec<String>,
    /// Data rows; each row holds one cell per header, short rows read as blank
    pub rows: Vec<Vec<CellValue>>,
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl RawTable {
    /// Create a raw table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Resolve a configured header to its column position.
    pub fn column_index(&self, header: &str) -> ReconcileResult<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| ReconcileError::ColumnNotFound(header.to_string()))
    }

    /// Read a cell by position, treating cells past the end of a short row
    /// as blank. Readers commonly truncate trailing empty cells.
    pub fn cell<'a>(&self, row: &'a [CellValue], index: usize) -> &'a CellValue {
        row.get(index).unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_resolves_headers() {
        let table = RawTable::new(
            vec!["GSTIN of supplier".to_string(), "Invoice No".to_string()],
            vec![],
        );
        assert_eq!(table.column_index("Invoice No").unwrap(), 1);
    }

    #[test]
    fn test_column_index_missing_header() {
        let table = RawTable::new(vec!["Invoice No".to_string()], vec![]);
        let err = table.column_index("Party Name").unwrap_err();
        assert!(matches!(err, ReconcileError::ColumnNotFound(h) if h == "Party Name"));
    }

    #[test]
    fn test_to_decimal_accepts_numeric_text() {
        let cell = CellValue::Text(" 105.50 ".to_string());
        assert_eq!(
            cell.to_decimal("CGST Amount").unwrap(),
            BigDecimal::from_str("105.50").unwrap()
        );
    }

    #[test]
    fn test_to_decimal_rejects_non_numeric_text() {
        let cell = CellValue::Text("n/a".to_string());
        let err = cell.to_decimal("CGST Amount").unwrap_err();
        assert!(
            matches!(err, ReconcileError::NonNumeric { column, value }
                if column == "CGST Amount" && value == "n/a")
        );
    }

    #[test]
    fn test_blank_cell_is_zero() {
        assert_eq!(
            CellValue::Empty.to_decimal("IGST Amount").unwrap(),
            BigDecimal::from(0)
        );
    }

    #[test]
    fn test_short_row_reads_blank() {
        let table = RawTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![CellValue::from("x")]],
        );
        assert_eq!(table.cell(&table.rows[0], 1), &CellValue::Empty);
    }
}
