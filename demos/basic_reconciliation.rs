//! Basic reconciliation example

use bigdecimal::BigDecimal;
use gst_reconcile::{match_invoices, InvoiceLoader, RawTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Reconcile - Basic Example\n");

    // In a real application these tables come from a spreadsheet reader;
    // here they are built inline.
    let company_table = RawTable::new(
        vec![
            "GSTIN of supplier".into(),
            "Party Name".into(),
            "Accounting Document No".into(),
            "Invoice No".into(),
            "Invoice Date".into(),
            "CGST Amount".into(),
            "SGST Amount".into(),
            "IGST Amount".into(),
        ],
        vec![
            vec![
                "27ABCDE1234F1Z5".into(),
                "Acme Traders".into(),
                "DOC-1".into(),
                "INV/001".into(),
                "15-01-2024".into(),
                100.into(),
                100.into(),
                0.into(),
            ],
            vec![
                "27ABCDE1234F1Z5".into(),
                "Acme Traders".into(),
                "DOC-2".into(),
                "INV/002".into(),
                "20-01-2024".into(),
                50.into(),
                50.into(),
                0.into(),
            ],
            vec![
                "29XYZAB5678C1Z3".into(),
                "Bharat Mills".into(),
                "DOC-3".into(),
                "BM-77".into(),
                "25-01-2024".into(),
                0.into(),
                0.into(),
                180.into(),
            ],
        ],
    );

    let portal_table = RawTable::new(
        vec![
            "GSTIN of supplier".into(),
            "Invoice number".into(),
            "Invoice Date".into(),
            "Central Tax(₹)".into(),
            "State/UT Tax(₹)".into(),
            "Integrated Tax(₹)".into(),
        ],
        vec![
            vec![
                "27ABCDE1234F1Z5".into(),
                "INV-001".into(),
                "15/01/2024".into(),
                100.into(),
                100.into(),
                0.into(),
            ],
            vec![
                "27ABCDE1234F1Z5".into(),
                "2024/777".into(),
                "20/01/2024".into(),
                52.into(),
                50.into(),
                0.into(),
            ],
        ],
    );

    // 1. Load both tables into the canonical schema
    let loader = InvoiceLoader::default();
    let company = loader.load_company(&company_table)?;
    let portal = loader.load_portal(&portal_table)?;
    println!(
        "📥 Loaded {} company records and {} portal records\n",
        company.len(),
        portal.len()
    );

    // 2. Match with a tolerance of ₹5 on the tax total
    let outcome = match_invoices(&company, &portal, &BigDecimal::from(5))?;

    println!("✅ Matched:");
    for m in &outcome.matched {
        println!(
            "  {:?} | {} -> {} | firm total {} | portal total {} | difference {}",
            m.status, m.invoice_no, m.portal_invoice_no, m.company_total, m.portal_total,
            m.difference
        );
    }

    println!("\n❌ Unmatched:");
    for u in &outcome.unmatched {
        println!(
            "  {} | {} | firm total {}",
            u.invoice_no, u.gstin, u.company_total
        );
    }

    let summary = outcome.summary();
    println!(
        "\n📊 Summary: {} exact, {} close, {} unmatched",
        summary.exact, summary.close, summary.unmatched
    );

    Ok(())
}
