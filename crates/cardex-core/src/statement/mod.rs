//! Statement field extraction module.

pub mod banks;
mod classifier;
pub mod rules;
mod service;

pub use classifier::classify;
pub use service::ExtractionService;

use crate::error::ExtractionError;
use crate::models::statement::{Bank, FieldValue, Statement};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Capability set implemented by every issuer extraction strategy.
///
/// Each operation takes the full statement text (not pre-sliced) and never
/// fails: a field that cannot be located is reported via the sentinel, not
/// an error. Strategies are stateless apart from static rule tables and
/// may be shared across concurrently processed documents.
pub trait StatementParser: Send + Sync {
    /// The issuer this strategy understands.
    fn bank(&self) -> Bank;

    /// Cardholder name as printed on the statement.
    fn card_holder_name(&self, text: &str) -> FieldValue;

    /// Last four digits of the masked card number.
    fn card_number_last4(&self, text: &str) -> FieldValue;

    /// Billing period as `"<start> to <end>"`.
    fn billing_period(&self, text: &str) -> FieldValue;

    /// Payment due date, verbatim.
    fn payment_due_date(&self, text: &str) -> FieldValue;

    /// Total amount due, if a plausible figure was found.
    fn total_amount_due(&self, text: &str) -> Option<f64>;

    /// Run all five field operations and assemble the record.
    fn parse(&self, text: &str) -> Statement {
        Statement {
            card_holder_name: self.card_holder_name(text),
            card_number_last4: self.card_number_last4(text),
            billing_period: self.billing_period(text),
            payment_due_date: self.payment_due_date(text),
            total_amount_due: self.total_amount_due(text).unwrap_or(0.0),
            detected_bank: self.bank().label().to_string(),
        }
    }
}
