//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
///
/// Only loading a catalog can fail in practice. Lookups surface
/// `ProductNotFound` so callers can render a recoverable empty state.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// Invalid discount percentage.
    #[error("Invalid discount for {product}: {percent}% (must be 0-100)")]
    InvalidDiscount { product: String, percent: u8 },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
