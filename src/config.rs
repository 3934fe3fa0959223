//! Column and date-format configuration for the loader
//!
//! The defaults reproduce common GST export conventions: accounting-system
//! column headers on the company side, portal download headers on the portal
//! side. Reading a configuration file from disk is the caller's job; the
//! core only accepts the already-parsed structure.

use serde::{Deserialize, Serialize};

/// Full loader configuration: column mappings plus per-source date formats
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Logical field name to source header mappings
    pub columns: ColumnMap,
    /// Per-source date parse patterns
    pub date_formats: DateFormats,
}

/// Header mappings for both sources
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub company: CompanyColumns,
    pub portal: PortalColumns,
}

/// Column headers in the company export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyColumns {
    pub gstin: String,
    pub party_name: String,
    pub accounting_doc: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub cgst: String,
    pub sgst: String,
    pub igst: String,
}

impl Default for CompanyColumns {
    fn default() -> Self {
        Self {
            gstin: "GSTIN of supplier".to_string(),
            party_name: "Party Name".to_string(),
            accounting_doc: "Accounting Document No".to_string(),
            invoice_no: "Invoice No".to_string(),
            invoice_date: "Invoice Date".to_string(),
            cgst: "CGST Amount".to_string(),
            sgst: "SGST Amount".to_string(),
            igst: "IGST Amount".to_string(),
        }
    }
}

/// Column headers in the portal download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalColumns {
    pub gstin: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub cgst: String,
    pub sgst: String,
    pub igst: String,
}

impl Default for PortalColumns {
    fn default() -> Self {
        Self {
            gstin: "GSTIN of supplier".to_string(),
            invoice_no: "Invoice number".to_string(),
            invoice_date: "Invoice Date".to_string(),
            cgst: "Central Tax(₹)".to_string(),
            sgst: "State/UT Tax(₹)".to_string(),
            igst: "Integrated Tax(₹)".to_string(),
        }
    }
}

/// Date parse patterns (chrono strftime syntax), one per source.
///
/// Each source is parsed with its exact pattern only; there are no
/// fallback formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormats {
    pub company: String,
    pub portal: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            company: "%d-%m-%Y".to_string(),
            portal: "%d/%m/%Y".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_headers() {
        let config = MatchConfig::default();
        assert_eq!(config.columns.company.gstin, "GSTIN of supplier");
        assert_eq!(config.columns.company.invoice_no, "Invoice No");
        assert_eq!(config.columns.portal.invoice_no, "Invoice number");
        assert_eq!(config.columns.portal.cgst, "Central Tax(₹)");
        assert_eq!(config.date_formats.company, "%d-%m-%Y");
        assert_eq!(config.date_formats.portal, "%d/%m/%Y");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let json = r#"{
            "columns": {
                "company": { "invoice_no": "Inv Number" }
            },
            "date_formats": { "company": "%Y-%m-%d" }
        }"#;

        let config: MatchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.columns.company.invoice_no, "Inv Number");
        assert_eq!(config.columns.company.gstin, "GSTIN of supplier");
        assert_eq!(config.columns.portal.invoice_no, "Invoice number");
        assert_eq!(config.date_formats.company, "%Y-%m-%d");
        assert_eq!(config.date_formats.portal, "%d/%m/%Y");
    }
}
