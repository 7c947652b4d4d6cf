//! Error types for fixture generation and export.

use thiserror::Error;

/// Errors that can occur while generating or writing fixture data.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A generation parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The catalog has no products to sample from.
    #[error("catalog has no products to sample from")]
    EmptyCatalog,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
