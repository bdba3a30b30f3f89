//! Import shapes from external documents.

mod svg;

pub use svg::{import_svg, parse_svg};

use thiserror::Error;

/// Import errors.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] roxmltree::Error),
    #[error("Invalid number in `{attribute}`: {value:?}")]
    InvalidNumber { attribute: &'static str, value: String },
    #[error("Negative radius: {0}")]
    NegativeRadius(f64),
    #[error("<{tag}> has {count} point(s), need at least 2")]
    TooFewPoints { tag: &'static str, count: usize },
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
