//! Bank identity classification from statement text.

use tracing::debug;

use crate::models::statement::Bank;

/// Keyword table evaluated top to bottom; the first issuer with any
/// keyword present as a substring of the lowercased text wins. The order
/// is the tie-break for text that happens to mention several issuers.
const BANK_KEYWORDS: &[(Bank, &[&str])] = &[
    (Bank::Hdfc, &["hdfc"]),
    (Bank::Icici, &["icici"]),
    (Bank::Sbi, &["state bank", "sbi card"]),
    (Bank::Axis, &["axis"]),
    (Bank::Citi, &["citi", "citibank"]),
];

/// Detect the issuing bank from statement text.
///
/// Pure and deterministic: identical text always yields the identical
/// identity. Returns `None` when no keyword matches, including for empty
/// input. No scoring, no partial matches.
pub fn classify(text: &str) -> Option<Bank> {
    let lower = text.to_lowercase();

    for (bank, keywords) in BANK_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            debug!("classified statement as {}", bank);
            return Some(*bank);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_coverage() {
        assert_eq!(classify("HDFC Bank Credit Card"), Some(Bank::Hdfc));
        assert_eq!(classify("welcome to icici"), Some(Bank::Icici));
        assert_eq!(classify("State Bank of India"), Some(Bank::Sbi));
        assert_eq!(classify("SBI Card monthly statement"), Some(Bank::Sbi));
        assert_eq!(classify("AXIS BANK LTD"), Some(Bank::Axis));
        assert_eq!(classify("Citibank N.A."), Some(Bank::Citi));
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(classify("hDfC"), Some(Bank::Hdfc));
        assert_eq!(classify("CITI"), Some(Bank::Citi));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(classify("quarterly investor letter"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_determinism() {
        let text = "Axis Bank statement for November";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_order_is_the_tie_break() {
        // Text mentioning two issuers resolves to the earlier table entry.
        assert_eq!(classify("transfer from HDFC to Axis"), Some(Bank::Hdfc));
        assert_eq!(classify("citi and axis co-branded"), Some(Bank::Axis));
    }
}
