//! Error types for the cardex-core library.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// PDF rendering error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to rendering a statement document to text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF exceeds the configured page limit.
    #[error("PDF has {0} pages, limit is {1}")]
    TooManyPages(u32, u32),
}

/// Errors surfaced by the extraction service.
///
/// Absence of a single field is never represented here: the strategies
/// absorb it into [`FieldValue::NotFound`](crate::models::statement::FieldValue)
/// and the assembled record stays fully populated.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The statement text matched no supported issuer. Recoverable: the
    /// caller may retry with a different document.
    #[error("unsupported bank statement")]
    UnsupportedBank,

    /// An unexpected fault downstream of classification, carrying the
    /// underlying cause for diagnostic display.
    #[error("extraction failed: {0}")]
    Failure(String),
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
