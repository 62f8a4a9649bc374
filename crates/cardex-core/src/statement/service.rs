//! Extraction service: classification plus strategy dispatch.

use tracing::info;

use crate::error::ExtractionError;
use crate::models::config::CardexConfig;
use crate::models::statement::{Bank, Statement};

use super::classifier::classify;
use super::{Result, StatementParser, banks};

/// Stateless extraction service holding the immutable strategy registry.
///
/// Construct once at startup and share freely: rule tables are compiled
/// once, extraction keeps no state between documents, and the registry is
/// never mutated.
pub struct ExtractionService {
    parsers: Vec<Box<dyn StatementParser>>,
}

impl ExtractionService {
    /// Build a service with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&CardexConfig::default())
    }

    /// Build a service with the given configuration.
    pub fn with_config(config: &CardexConfig) -> Self {
        Self {
            parsers: banks::all_parsers(config.extraction.min_total_due),
        }
    }

    /// Issuers this service can extract, in classifier priority order.
    pub fn supported_banks(&self) -> Vec<Bank> {
        self.parsers.iter().map(|p| p.bank()).collect()
    }

    /// Classify the statement text and run the matching strategy.
    ///
    /// Field-level absence never surfaces here — the record comes back
    /// fully populated with sentinels where needed. Only a failed
    /// classification ([`ExtractionError::UnsupportedBank`]) or an
    /// internal inconsistency ([`ExtractionError::Failure`]) is an error.
    pub fn classify_and_extract(&self, text: &str) -> Result<Statement> {
        let bank = classify(text).ok_or(ExtractionError::UnsupportedBank)?;

        let parser = self
            .parsers
            .iter()
            .find(|p| p.bank() == bank)
            .ok_or_else(|| ExtractionError::Failure(format!("no strategy registered for {}", bank)))?;

        let statement = parser.parse(text);
        info!(
            "extracted {} statement, total due {:.2}",
            statement.detected_bank, statement.total_amount_due
        );

        Ok(statement)
    }
}

impl Default for ExtractionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text_is_unsupported() {
        let service = ExtractionService::new();
        let result = service.classify_and_extract("");
        assert!(matches!(result, Err(ExtractionError::UnsupportedBank)));
    }

    #[test]
    fn test_registry_covers_every_bank() {
        let service = ExtractionService::new();
        assert_eq!(service.supported_banks(), Bank::ALL.to_vec());
    }

    #[test]
    fn test_dispatch_stamps_display_label() {
        let service = ExtractionService::new();
        let statement = service
            .classify_and_extract("ICICI Bank statement\nDear RAJESH KUMAR, welcome")
            .unwrap();

        assert_eq!(statement.detected_bank, "Icici");
        assert_eq!(statement.card_holder_name, FieldValue::found("RAJESH KUMAR"));
    }

    #[test]
    fn test_custom_floor_is_threaded_through() {
        let mut config = CardexConfig::default();
        config.extraction.min_total_due = 50.0;
        let service = ExtractionService::with_config(&config);

        let statement = service
            .classify_and_extract("HDFC Bank\nTotal Amount Due 750.00")
            .unwrap();
        assert_eq!(statement.total_amount_due, 750.0);
    }
}
