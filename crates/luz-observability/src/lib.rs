//! Observability for the Luz de Nuit storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with catalog-session context
//! - `init_logging` - Installs the `tracing` subscriber (human or JSON)

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

// Re-export SessionId from luz-commerce for convenience
pub use luz_commerce::SessionId;
