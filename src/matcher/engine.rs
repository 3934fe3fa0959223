//! Two-pass matching: an exact join on (GSTIN, normalized invoice number),
//! then a tolerance-based fallback on (GSTIN, invoice date).

use bigdecimal::BigDecimal;
use std::collections::{HashMap, HashSet};

use crate::types::{
    InvoiceRecord, MatchOutcome, MatchStatus, MatchedInvoice, ReconcileError, ReconcileResult,
    UnmatchedInvoice,
};

/// Reconcile company records against portal records.
///
/// Every company record ends up in exactly one bucket: exact-matched,
/// close-matched, or unmatched. Classification is keyed by source row, so
/// two company rows sharing an invoice number are still classified
/// independently. A portal record may pair with more than one company
/// record: exact matching emits one result per (company, portal) pairing
/// sharing the join key, and close matching does not consume portal
/// records from their GSTIN pool.
///
/// The tolerance is the maximum absolute difference between tax totals for
/// a close match; zero disables close matching entirely, negative is
/// rejected before any work.
pub fn match_invoices(
    company: &[InvoiceRecord],
    portal: &[InvoiceRecord],
    tolerance: &BigDecimal,
) -> ReconcileResult<MatchOutcome> {
    if *tolerance < BigDecimal::from(0) {
        return Err(ReconcileError::InvalidArgument(format!(
            "Tolerance must be non-negative, got {}",
            tolerance
        )));
    }

    let mut matched = Vec::new();
    let mut classified: HashSet<usize> = HashSet::new();

    // Pass 1: exact join. Index the portal by (gstin, clean invoice number),
    // keeping portal source order within each bucket.
    let mut exact_index: HashMap<(&str, &str), Vec<&InvoiceRecord>> = HashMap::new();
    for record in portal {
        exact_index
            .entry((record.gstin.as_str(), record.clean_invoice_no.as_str()))
            .or_default()
            .push(record);
    }

    for record in company {
        let key = (record.gstin.as_str(), record.clean_invoice_no.as_str());
        if let Some(candidates) = exact_index.get(&key) {
            for portal_record in candidates {
                matched.push(pairing(record, portal_record, MatchStatus::Exact));
            }
            classified.insert(record.row);
        }
    }
    let exact_count = matched.len();

    // Pass 2: tolerance fallback over the remaining company records, grouped
    // by gstin in first-encountered order. The first portal record with the
    // same date and a total within tolerance wins; portal records are not
    // consumed, so one can close-match several company records.
    if *tolerance > BigDecimal::from(0) {
        let mut portal_by_gstin: HashMap<&str, Vec<&InvoiceRecord>> = HashMap::new();
        for record in portal {
            portal_by_gstin
                .entry(record.gstin.as_str())
                .or_default()
                .push(record);
        }

        let remaining: Vec<&InvoiceRecord> = company
            .iter()
            .filter(|c| !classified.contains(&c.row))
            .collect();

        let mut gstins: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &remaining {
            if seen.insert(record.gstin.as_str()) {
                gstins.push(record.gstin.as_str());
            }
        }

        for gstin in gstins {
            let Some(candidates) = portal_by_gstin.get(gstin) else {
                continue;
            };
            for record in remaining.iter().filter(|c| c.gstin == gstin) {
                let hit = candidates.iter().find(|p| {
                    p.invoice_date == record.invoice_date
                        && (&p.total - &record.total).abs() <= *tolerance
                });
                if let Some(portal_record) = hit {
                    matched.push(pairing(record, portal_record, MatchStatus::Close));
                    classified.insert(record.row);
                }
            }
        }
    }

    // Pass 3: everything still unclassified, in company source order.
    let unmatched: Vec<UnmatchedInvoice> = company
        .iter()
        .filter(|c| !classified.contains(&c.row))
        .map(|c| UnmatchedInvoice {
            gstin: c.gstin.clone(),
            party_name: c.party_name.clone(),
            invoice_no: c.invoice_no.clone(),
            invoice_date: c.invoice_date,
            company_total: c.total.clone(),
        })
        .collect();

    tracing::debug!(
        exact = exact_count,
        close = matched.len() - exact_count,
        unmatched = unmatched.len(),
        "matching complete"
    );

    Ok(MatchOutcome { matched, unmatched })
}

fn pairing(
    company: &InvoiceRecord,
    portal: &InvoiceRecord,
    status: MatchStatus,
) -> MatchedInvoice {
    MatchedInvoice {
        gstin: company.gstin.clone(),
        party_name: company.party_name.clone(),
        accounting_doc_no: company.accounting_doc_no.clone(),
        invoice_no: company.invoice_no.clone(),
        invoice_date: company.invoice_date,
        company_total: company.total.clone(),
        portal_total: portal.total.clone(),
        difference: &portal.total - &company.total,
        status,
        portal_invoice_no: portal.invoice_no.clone(),
    }
}
