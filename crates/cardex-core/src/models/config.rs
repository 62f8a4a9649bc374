//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::statement::rules::amounts::MIN_PLAUSIBLE_TOTAL;

/// Main configuration for the cardex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// PDF rendering configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for CardexConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages accepted per document (0 = unlimited).
    pub max_pages: u32,

    /// Minimum text length to consider the PDF text-based; shorter
    /// renders usually mean a scanned document with no text layer.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Smallest amount accepted as a plausible statement total. Summary
    /// blocks label both the minimum due and the total due with
    /// near-identical text; candidates at or below this floor are skipped.
    pub min_total_due: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_total_due: MIN_PLAUSIBLE_TOTAL,
        }
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = CardexConfig::default();
        assert_eq!(config.extraction.min_total_due, 1000.0);
        assert_eq!(config.pdf.max_pages, 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CardexConfig =
            serde_json::from_str(r#"{"extraction": {"min_total_due": 250.0}}"#).unwrap();
        assert_eq!(config.extraction.min_total_due, 250.0);
        assert_eq!(config.pdf.min_text_length, 50);
    }
}
