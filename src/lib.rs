//! # GST Reconcile
//!
//! A reconciliation library that matches commercial invoices recorded in an
//! internal accounting system ("company") against records downloaded from a
//! government tax portal ("portal").
//!
//! ## Features
//!
//! - **Loader**: validates raw tabular exports against a configurable column
//!   mapping and normalizes them into a canonical schema with parsed dates
//!   and a computed total-tax column
//! - **Exact matching**: joins the two sides on (GSTIN, normalized invoice
//!   number), so "INV/001" and "INV-001" reconcile
//! - **Close matching**: tolerance-based fallback on (GSTIN, invoice date)
//!   for invoices whose numbers don't align
//! - **Deterministic classification**: every company record lands in exactly
//!   one bucket — exact-matched, close-matched, or unmatched — with the
//!   portal-minus-company tax difference computed per match
//!
//! File I/O, UI, and spreadsheet export are external collaborators: the core
//! accepts already-parsed tables and returns plain structured results.
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_reconcile::{match_invoices, InvoiceLoader, RawTable};
//! use bigdecimal::BigDecimal;
//!
//! let loader = InvoiceLoader::default();
//! let company = loader.load_company(&RawTable::new(
//!     vec![
//!         "GSTIN of supplier".into(), "Party Name".into(),
//!         "Accounting Document No".into(), "Invoice No".into(),
//!         "Invoice Date".into(), "CGST Amount".into(),
//!         "SGST Amount".into(), "IGST Amount".into(),
//!     ],
//!     vec![vec![
//!         "27ABCDE1234F1Z5".into(), "Acme Traders".into(), "DOC-42".into(),
//!         "INV/001".into(), "15-01-2024".into(), 100.into(), 100.into(), 0.into(),
//!     ]],
//! ))?;
//!
//! let outcome = match_invoices(&company, &[], &BigDecimal::from(0))?;
//! assert_eq!(outcome.unmatched.len(), 1);
//! # Ok::<(), gst_reconcile::ReconcileError>(())
//! ```

pub mod config;
pub mod loader;
pub mod matcher;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use loader::*;
pub use matcher::*;
pub use types::*;
