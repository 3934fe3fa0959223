//! Loading and normalization of raw tables into canonical invoice records

use chrono::NaiveDate;

use crate::config::MatchConfig;
use crate::loader::table::RawTable;
use crate::types::{InvoiceRecord, ReconcileError, ReconcileResult};

/// Validates and normalizes raw company and portal tables into the
/// canonical schema: configured columns only, parsed dates, and a computed
/// total-tax column.
#[derive(Debug, Clone, Default)]
pub struct InvoiceLoader {
    config: MatchConfig,
}

/// Resolved column positions for one source, with the tax header names
/// retained for error reporting.
struct ResolvedColumns {
    gstin: usize,
    party_name: Option<usize>,
    accounting_doc: Option<usize>,
    invoice_no: usize,
    invoice_date: usize,
    cgst: usize,
    sgst: usize,
    igst: usize,
    cgst_header: String,
    sgst_header: String,
    igst_header: String,
}

impl InvoiceLoader {
    /// Create a loader with the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The configuration this loader applies.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Load the company table into canonical records.
    pub fn load_company(&self, table: &RawTable) -> ReconcileResult<Vec<InvoiceRecord>> {
        ensure_headers(table)?;
        let cols = &self.config.columns.company;
        let resolved = ResolvedColumns {
            gstin: table.column_index(&cols.gstin)?,
            party_name: Some(table.column_index(&cols.party_name)?),
            accounting_doc: Some(table.column_index(&cols.accounting_doc)?),
            invoice_no: table.column_index(&cols.invoice_no)?,
            invoice_date: table.column_index(&cols.invoice_date)?,
            cgst: table.column_index(&cols.cgst)?,
            sgst: table.column_index(&cols.sgst)?,
            igst: table.column_index(&cols.igst)?,
            cgst_header: cols.cgst.clone(),
            sgst_header: cols.sgst.clone(),
            igst_header: cols.igst.clone(),
        };

        let records = self.load_rows(table, &resolved, &self.config.date_formats.company)?;
        tracing::debug!(records = records.len(), "loaded company table");
        Ok(records)
    }

    /// Load the portal table into canonical records. Portal exports carry
    /// no party name or accounting document number.
    pub fn load_portal(&self, table: &RawTable) -> ReconcileResult<Vec<InvoiceRecord>> {
        ensure_headers(table)?;
        let cols = &self.config.columns.portal;
        let resolved = ResolvedColumns {
            gstin: table.column_index(&cols.gstin)?,
            party_name: None,
            accounting_doc: None,
            invoice_no: table.column_index(&cols.invoice_no)?,
            invoice_date: table.column_index(&cols.invoice_date)?,
            cgst: table.column_index(&cols.cgst)?,
            sgst: table.column_index(&cols.sgst)?,
            igst: table.column_index(&cols.igst)?,
            cgst_header: cols.cgst.clone(),
            sgst_header: cols.sgst.clone(),
            igst_header: cols.igst.clone(),
        };

        let records = self.load_rows(table, &resolved, &self.config.date_formats.portal)?;
        tracing::debug!(records = records.len(), "loaded portal table");
        Ok(records)
    }

    fn load_rows(
        &self,
        table: &RawTable,
        cols: &ResolvedColumns,
        date_format: &str,
    ) -> ReconcileResult<Vec<InvoiceRecord>> {
        let mut records = Vec::with_capacity(table.rows.len());
        for (row_index, row) in table.rows.iter().enumerate() {
            let invoice_date =
                parse_date(&table.cell(row, cols.invoice_date).as_text(), date_format)?;

            let record = InvoiceRecord::new(
                row_index,
                table.cell(row, cols.gstin).as_text(),
                cols.party_name
                    .map(|idx| table.cell(row, idx).as_text()),
                cols.accounting_doc
                    .map(|idx| table.cell(row, idx).as_text()),
                table.cell(row, cols.invoice_no).as_text(),
                invoice_date,
                table.cell(row, cols.cgst).to_decimal(&cols.cgst_header)?,
                table.cell(row, cols.sgst).to_decimal(&cols.sgst_header)?,
                table.cell(row, cols.igst).to_decimal(&cols.igst_header)?,
            );
            records.push(record);
        }

        Ok(records)
    }
}

fn ensure_headers(table: &RawTable) -> ReconcileResult<()> {
    if table.headers.is_empty() {
        return Err(ReconcileError::InvalidArgument(
            "Input table has no header row".to_string(),
        ));
    }
    Ok(())
}

/// Parse a date under exactly one format; there are no fallback formats.
fn parse_date(value: &str, format: &str) -> ReconcileResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| ReconcileError::DateParse {
        value: value.to_string(),
        format: format.to_string(),
    })
}
