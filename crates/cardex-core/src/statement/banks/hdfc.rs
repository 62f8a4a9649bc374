//! HDFC Bank statement rules.

use lazy_static::lazy_static;

use super::super::StatementParser;
use super::super::rules::RuleSet;
use super::super::rules::amounts::MIN_PLAUSIBLE_TOTAL;
use crate::models::statement::{Bank, FieldValue};

lazy_static! {
    static ref HOLDER_NAME: RuleSet = RuleSet::new(&[
        r"(?i)Card\s+Member\s+Name\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Dear\s+([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Customer\s+Name\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Statement\s+for\s+([A-Z][a-z]+\s+[A-Z][a-z]+)",
    ]);
    static ref CARD_LAST4: RuleSet = RuleSet::new(&[
        r"Card\s+Number\s*:\s*X{4}\s+X{4}\s+X{4}\s+(\d{4})",
        r"Card\s+No\.?\s*:\s*\*+\s*(\d{4})",
        r"Card\s+No[.:]\s*[Xx*]+\s*(\d{4})",
        r"(?i)Card\s+ending\s+with\s+(\d{4})",
    ]);
    static ref BILLING_PERIOD: RuleSet = RuleSet::new(&[
        r"(?i)Statement\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Statement\s+Period\s*:\s*(\d{2}-\d{2}-\d{4})\s*to\s*(\d{2}-\d{2}-\d{4})",
        r"(?i)Billing\s+Period\s*:\s*(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})",
        r"(?i)Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
    ]);
    static ref DUE_DATE: RuleSet = RuleSet::new(&[
        r"(?i)Payment\s+Due\s+Date\s*:\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Payment\s+Due\s+Date\s*:\s*(\d{2}-\d{2}-\d{4})",
        r"(?i)Due\s+Date\s*:\s*(\d{2}/\d{2}/\d{4})",
        r"(?i)Pay\s+by\s+(\d{2}-\w{3}-\d{4})",
    ]);
    static ref TOTAL_DUE: RuleSet = RuleSet::new(&[
        r"(?i)Total\s+Amount\s+Due\s*[:\-]?\s*[₹Rs.]*\s*([\d,]+\.?\d*)",
        r"(?i)Amount\s+Due\s*[:\-]?\s*[₹Rs.]*\s*([\d,]+\.?\d*)",
        r"(?i)Total\s+Due\s*[:\-]?\s*[₹Rs.]*\s*([\d,]+\.?\d*)",
    ]);
}

/// Extraction strategy for HDFC Bank statements.
pub struct HdfcParser {
    min_total: f64,
}

impl HdfcParser {
    pub fn new() -> Self {
        Self {
            min_total: MIN_PLAUSIBLE_TOTAL,
        }
    }

    /// Override the plausibility floor for total-due candidates.
    pub fn with_min_total(mut self, floor: f64) -> Self {
        self.min_total = floor;
        self
    }
}

impl Default for HdfcParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for HdfcParser {
    fn bank(&self) -> Bank {
        Bank::Hdfc
    }

    fn card_holder_name(&self, text: &str) -> FieldValue {
        HOLDER_NAME.first_capture(text)
    }

    fn card_number_last4(&self, text: &str) -> FieldValue {
        CARD_LAST4.first_capture(text)
    }

    fn billing_period(&self, text: &str) -> FieldValue {
        BILLING_PERIOD.capture_pair(text)
    }

    fn payment_due_date(&self, text: &str) -> FieldValue {
        DUE_DATE.first_capture(text)
    }

    fn total_amount_due(&self, text: &str) -> Option<f64> {
        TOTAL_DUE.first_amount_above(text, self.min_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_holder_name_variants() {
        let parser = HdfcParser::new();

        assert_eq!(
            parser.card_holder_name("Card Member Name: RAJESH KUMAR Statement Date: 25-Nov-2024"),
            FieldValue::found("RAJESH KUMAR")
        );
        assert_eq!(
            parser.card_holder_name("Dear Anita Desai, your statement is ready"),
            FieldValue::found("Anita Desai")
        );
        assert_eq!(parser.card_holder_name("no name here"), FieldValue::NotFound);
    }

    #[test]
    fn test_card_last4_variants() {
        let parser = HdfcParser::new();

        assert_eq!(
            parser.card_number_last4("Card Number: XXXX XXXX XXXX 5678"),
            FieldValue::found("5678")
        );
        assert_eq!(
            parser.card_number_last4("Card No: **** 5678"),
            FieldValue::found("5678")
        );
        assert_eq!(
            parser.card_number_last4("card ending with 5678"),
            FieldValue::found("5678")
        );
    }

    #[test]
    fn test_billing_period_formats() {
        let parser = HdfcParser::new();

        assert_eq!(
            parser.billing_period("Statement Period: 01-Nov-2024 to 30-Nov-2024"),
            FieldValue::found("01-Nov-2024 to 30-Nov-2024")
        );
        assert_eq!(
            parser.billing_period("Billing Period: 01/11/2024 - 30/11/2024"),
            FieldValue::found("01/11/2024 to 30/11/2024")
        );
    }

    #[test]
    fn test_total_due_skips_minimum() {
        let parser = HdfcParser::new();
        let text = "Minimum Amount Due 2,000.00\nTotal Amount Due 39,432.00";

        // The total-specific rule is ordered first, so the minimum-due
        // figure is never even considered.
        assert_eq!(parser.total_amount_due(text), Some(39432.0));
    }

    #[test]
    fn test_unlabeled_text_yields_sentinels() {
        let parser = HdfcParser::new();
        let statement = parser.parse("HDFC Bank wishes you a happy new year");

        assert_eq!(statement.card_holder_name, FieldValue::NotFound);
        assert_eq!(statement.card_number_last4, FieldValue::NotFound);
        assert_eq!(statement.billing_period, FieldValue::NotFound);
        assert_eq!(statement.payment_due_date, FieldValue::NotFound);
        assert_eq!(statement.total_amount_due, 0.0);
        assert_eq!(statement.detected_bank, "Hdfc");
    }
}
