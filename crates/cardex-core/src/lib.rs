//! Core library for credit card statement extraction.
//!
//! This crate provides:
//! - PDF text rendering (statement documents to linear text)
//! - Bank identity classification from statement text
//! - Per-issuer field extraction (holder name, card last-4, billing period,
//!   due date, total amount due) via ordered fallback pattern rules
//! - Statement data models for the JSON boundary

pub mod error;
pub mod models;
pub mod pdf;
pub mod samples;
pub mod statement;

pub use error::{CardexError, ExtractionError, PdfError, Result};
pub use models::config::CardexConfig;
pub use models::statement::{Bank, FieldValue, Statement};
pub use pdf::{StatementRenderer, TextRenderer, render_statement};
pub use statement::{ExtractionService, StatementParser, classify};
