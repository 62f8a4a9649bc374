//! Statement data models for the extraction boundary.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire literal emitted when a field could not be extracted.
const NOT_FOUND: &str = "Not Found";

/// A supported card issuer.
///
/// An unrecognized statement has no `Bank` at all: the classifier returns
/// `Option<Bank>` and the service reports
/// [`ExtractionError::UnsupportedBank`](crate::error::ExtractionError)
/// for `None`, so a strategy can never be selected for an unknown issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Hdfc,
    Icici,
    Sbi,
    Axis,
    Citi,
}

impl Bank {
    /// All supported issuers, in classifier priority order.
    pub const ALL: [Bank; 5] = [Bank::Hdfc, Bank::Icici, Bank::Sbi, Bank::Axis, Bank::Citi];

    /// Short lowercase code used in file names, config, and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Bank::Hdfc => "hdfc",
            Bank::Icici => "icici",
            Bank::Sbi => "sbi",
            Bank::Axis => "axis",
            Bank::Citi => "citi",
        }
    }

    /// Display-cased label stamped onto extraction results.
    pub fn label(&self) -> &'static str {
        match self {
            Bank::Hdfc => "Hdfc",
            Bank::Icici => "Icici",
            Bank::Sbi => "Sbi",
            Bank::Axis => "Axis",
            Bank::Citi => "Citi",
        }
    }

    /// Full issuer name for display surfaces.
    pub fn full_name(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC Bank",
            Bank::Icici => "ICICI Bank",
            Bank::Sbi => "SBI Card",
            Bank::Axis => "Axis Bank",
            Bank::Citi => "Citibank",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of applying one field's rule sequence.
///
/// `NotFound` is a distinguished value, not an error, and is distinct from
/// an empty string: a statement missing a label still produces a fully
/// populated [`Statement`]. On the wire the sentinel is the literal string
/// `"Not Found"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Captured field text, trimmed of surrounding whitespace.
    Found(String),
    /// No rule in the field's sequence matched.
    NotFound,
}

impl FieldValue {
    /// Wrap captured text.
    pub fn found(value: impl Into<String>) -> Self {
        FieldValue::Found(value.into())
    }

    /// Whether a value was captured.
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }

    /// Captured text, or `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Found(value) => Some(value),
            FieldValue::NotFound => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(NOT_FOUND))
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str().unwrap_or(NOT_FOUND))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value == NOT_FOUND {
            Ok(FieldValue::NotFound)
        } else {
            Ok(FieldValue::Found(value))
        }
    }
}

/// Fully assembled extraction record for one statement.
///
/// Invariant: every field is populated — either with an extracted value or
/// with the explicit sentinel/default. `total_amount_due` is `0.0` when no
/// plausible amount was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Cardholder name as printed on the statement.
    pub card_holder_name: FieldValue,

    /// Last four digits of the masked card number.
    pub card_number_last4: FieldValue,

    /// Billing period as `"<start> to <end>"`.
    pub billing_period: FieldValue,

    /// Payment due date, verbatim from the statement.
    pub payment_due_date: FieldValue,

    /// Total amount due in statement currency.
    pub total_amount_due: f64,

    /// Display-cased issuer label, e.g. `"Hdfc"`.
    pub detected_bank: String,
}
