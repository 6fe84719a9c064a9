//! Storefront error types.

use luz_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while assembling storefront pages.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The catalog failed to load or validate.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Input is not a site path (must start with `/`).
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),
}
