//! Axis Bank statement rules.

use lazy_static::lazy_static;

use super::super::StatementParser;
use super::super::rules::RuleSet;
use super::super::rules::amounts::MIN_PLAUSIBLE_TOTAL;
use crate::models::statement::{Bank, FieldValue};

lazy_static! {
    static ref HOLDER_NAME: RuleSet = RuleSet::new(&[
        r"(?i)Card\s+Member\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Dear\s+([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Customer\s+Name\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
    ]);
    static ref CARD_LAST4: RuleSet = RuleSet::new(&[
        r"Card\s+Number\s*:\s*X{4}\s+X{4}\s+X{4}\s+(\d{4})",
        r"Card\s+No[.:]\s*[Xx*]+\s*(\d{4})",
        r"(?i)Card\s+ending\s+with\s+(\d{4})",
    ]);
    // Axis labels the period "Billing Cycle".
    static ref BILLING_PERIOD: RuleSet = RuleSet::new(&[
        r"(?i)Billing\s+Cycle\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Statement\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Billing\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
    ]);
    static ref DUE_DATE: RuleSet = RuleSet::new(&[
        r"(?i)Payment\s+Due\s+Date\s*:\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Due\s+Date\s*:\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Pay\s+by\s+(\d{2}-\w{3}-\d{4})",
    ]);
    static ref TOTAL_DUE: RuleSet = RuleSet::new(&[
        r"(?i)Total\s+Amount\s+Due\s*[:\-]?\s*₹?\s*([\d,]+\.?\d*)",
        r"(?i)Amount\s+Due\s*[:\-]?\s*₹?\s*([\d,]+\.?\d*)",
        r"(?i)Total\s+Due\s*[:\-]?\s*₹?\s*([\d,]+\.?\d*)",
    ]);
}

/// Extraction strategy for Axis Bank statements.
pub struct AxisParser {
    min_total: f64,
}

impl AxisParser {
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

impl Default for AxisParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for AxisParser {
    fn bank(&self) -> Bank {
        Bank::Axis
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
    fn test_card_member_label() {
        let parser = AxisParser::new();
        let line = "Card Member: RAJESH KUMAR Card Number: XXXX XXXX XXXX 8765";

        assert_eq!(parser.card_holder_name(line), FieldValue::found("RAJESH KUMAR"));
        assert_eq!(parser.card_number_last4(line), FieldValue::found("8765"));
    }

    #[test]
    fn test_billing_cycle_label() {
        let parser = AxisParser::new();

        assert_eq!(
            parser.billing_period("Billing Cycle: 01-Nov-2024 to 30-Nov-2024"),
            FieldValue::found("01-Nov-2024 to 30-Nov-2024")
        );
    }

    #[test]
    fn test_total_due() {
        let parser = AxisParser::new();
        assert_eq!(parser.total_amount_due("Total Amount Due ₹41,123.00"), Some(41123.0));
    }
}
