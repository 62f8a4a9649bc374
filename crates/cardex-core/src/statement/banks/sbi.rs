//! SBI Card statement rules.

use lazy_static::lazy_static;

use super::super::StatementParser;
use super::super::rules::RuleSet;
use super::super::rules::amounts::MIN_PLAUSIBLE_TOTAL;
use crate::models::statement::{Bank, FieldValue};

lazy_static! {
    static ref HOLDER_NAME: RuleSet = RuleSet::new(&[
        r"(?i)Customer\s+Name\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Dear\s+([A-Z][a-z]+\s+[A-Z][a-z]+)",
        r"(?i)Card\s+Holder\s*:\s*([A-Z][a-z]+\s+[A-Z][a-z]+)",
    ]);
    static ref CARD_LAST4: RuleSet = RuleSet::new(&[
        r"Card\s+No\s*:\s*X{4}\s+X{4}\s+X{4}\s+(\d{4})",
        r"Card\s+Number\s*:\s*X{4}\s+X{4}\s+X{4}\s+(\d{4})",
        r"Card\s+No[.:]\s*[Xx*]+\s*(\d{4})",
        r"(?i)Card\s+ending\s+with\s+(\d{4})",
    ]);
    static ref BILLING_PERIOD: RuleSet = RuleSet::new(&[
        r"(?i)Statement\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Billing\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
        r"(?i)Bill\s+Period\s*:\s*(\d{2}-\w{3}-\d{4})\s*to\s*(\d{2}-\w{3}-\d{4})",
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

/// Extraction strategy for SBI Card statements.
pub struct SbiParser {
    min_total: f64,
}

impl SbiParser {
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

impl Default for SbiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for SbiParser {
    fn bank(&self) -> Bank {
        Bank::Sbi
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
    fn test_name_and_card_share_a_line() {
        let parser = SbiParser::new();
        let line = "Customer Name: RAJESH KUMAR Card No: XXXX XXXX XXXX 1234";

        assert_eq!(parser.card_holder_name(line), FieldValue::found("RAJESH KUMAR"));
        assert_eq!(parser.card_number_last4(line), FieldValue::found("1234"));
    }

    #[test]
    fn test_payment_due_date_outranks_due_date() {
        let parser = SbiParser::new();
        let text = "Due Date: 15-Dec-2024\nPayment Due Date: 15-Dec-2024";

        assert_eq!(parser.payment_due_date(text), FieldValue::found("15-Dec-2024"));
    }

    #[test]
    fn test_total_due() {
        let parser = SbiParser::new();
        assert_eq!(parser.total_amount_due("Total Amount Due ₹38,995.00"), Some(38995.0));
    }
}
