//! Core types and data structures for invoice reconciliation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::normalize_invoice_no;

/// A canonical invoice record produced by the loader, one per source row.
///
/// Records are immutable snapshots: construction is the only way to build
/// one, so `total` always equals `cgst + sgst + igst` and
/// `clean_invoice_no` is always the normalized form of `invoice_no`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Position of this record in its source table. Serves as record
    /// identity during matching, so two rows with the same invoice number
    /// are still classified independently.
    pub row: usize,
    /// GSTIN of the supplier; primary join key
    pub gstin: String,
    /// Supplier name as recorded in the company books (company side only)
    pub party_name: Option<String>,
    /// Accounting document number (company side only)
    pub accounting_doc_no: Option<String>,
    /// Raw invoice number as recorded by this source
    pub invoice_no: String,
    /// `invoice_no` with all non-alphanumeric characters stripped; used
    /// only as a join key, never displayed
    pub clean_invoice_no: String,
    /// Invoice date
    pub invoice_date: NaiveDate,
    /// Central GST amount
    pub cgst: BigDecimal,
    /// State/UT GST amount
    pub sgst: BigDecimal,
    /// Integrated GST amount
    pub igst: BigDecimal,
    /// Total tax, always `cgst + sgst + igst`
    pub total: BigDecimal,
}

impl InvoiceRecord {
    /// Create a new invoice record, deriving `clean_invoice_no` and `total`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row: usize,
        gstin: String,
        party_name: Option<String>,
        accounting_doc_no: Option<String>,
        invoice_no: String,
        invoice_date: NaiveDate,
        cgst: BigDecimal,
        sgst: BigDecimal,
        igst: BigDecimal,
    ) -> Self {
        let clean_invoice_no = normalize_invoice_no(&invoice_no);
        let total = &cgst + &sgst + &igst;
        Self {
            row,
            gstin,
            party_name,
            accounting_doc_no,
            invoice_no,
            clean_invoice_no,
            invoice_date,
            cgst,
            sgst,
            igst,
            total,
        }
    }
}

/// Quality of a match between a company record and a portal record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Same GSTIN and same normalized invoice number, regardless of amount
    Exact,
    /// Same GSTIN and invoice date, tax totals within the configured tolerance
    Close,
}

/// A company record paired with the portal record it matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedInvoice {
    /// GSTIN shared by both records
    pub gstin: String,
    /// Supplier name from the company books
    pub party_name: Option<String>,
    /// Accounting document number from the company books
    pub accounting_doc_no: Option<String>,
    /// Raw company-side invoice number
    pub invoice_no: String,
    /// Company-side invoice date
    pub invoice_date: NaiveDate,
    /// Total tax recorded in the company books
    pub company_total: BigDecimal,
    /// Total tax recorded on the portal
    pub portal_total: BigDecimal,
    /// `portal_total - company_total`
    pub difference: BigDecimal,
    /// How the pairing was established
    pub status: MatchStatus,
    /// Raw portal-side invoice number of the matched record
    pub portal_invoice_no: String,
}

/// A company record with no exact or close portal counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedInvoice {
    /// GSTIN of the supplier
    pub gstin: String,
    /// Supplier name from the company books
    pub party_name: Option<String>,
    /// Raw company-side invoice number
    pub invoice_no: String,
    /// Company-side invoice date
    pub invoice_date: NaiveDate,
    /// Total tax recorded in the company books
    pub company_total: BigDecimal,
}

/// Result of one reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Matched pairings, exact results first, then close results
    pub matched: Vec<MatchedInvoice>,
    /// Company records with no counterpart, in source order
    pub unmatched: Vec<UnmatchedInvoice>,
}

impl MatchOutcome {
    /// Summarize the run for reporting by an external renderer.
    pub fn summary(&self) -> MatchSummary {
        let exact = self
            .matched
            .iter()
            .filter(|m| m.status == MatchStatus::Exact)
            .count();
        MatchSummary {
            matched: self.matched.len(),
            exact,
            close: self.matched.len() - exact,
            unmatched: self.unmatched.len(),
        }
    }
}

/// Counts of classified records from one reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Total matched pairings (exact + close)
    pub matched: usize,
    /// Pairings matched on (GSTIN, normalized invoice number)
    pub exact: usize,
    /// Pairings matched on (GSTIN, date) within tolerance
    pub close: usize,
    /// Company records left unmatched
    pub unmatched: usize,
}

/// Errors that can occur during loading or matching
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Invalid date '{value}' for format '{format}'")]
    DateParse { value: String, format: String },
    #[error("Non-numeric value '{value}' in column '{column}'")]
    NonNumeric { column: String, value: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;
