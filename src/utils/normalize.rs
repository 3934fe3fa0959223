//! Invoice-number normalization

/// Strip all non-alphanumeric characters from an invoice number.
///
/// Different systems punctuate invoice numbers differently ("INV/001" vs
/// "INV-001"), so join keys are compared on the alphanumeric characters
/// alone. Case is preserved.
pub fn normalize_invoice_no(invoice_no: &str) -> String {
    invoice_no.chars().filter(|c| c.is_alphanumeric()).collect()
}
