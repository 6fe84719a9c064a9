//! Catalog and outbound-messaging core for the Luz de Nuit storefront.
//!
//! - **Catalog**: the static product list with slug lookup and promotions
//! - **Search**: filter specification, query engine, facets, pagination and
//!   the catalog session reducer
//! - **Outbound**: purchase messages and the links that carry them
//! - **Contact**: PQRS form messages and mail drafts
//!
//! # Example
//!
//! ```rust
//! use luz_commerce::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::builtin().unwrap());
//! let mut session = CatalogSession::new(catalog.clone(), Paginator::default());
//! session.dispatch(CatalogAction::SetSearch("citr".into()));
//!
//! let view = session.view();
//! assert_eq!(view.items.len(), 1);
//!
//! let message = product_message(view.items[0], Currency::COP);
//! let link = MessagingTarget::default().link(&message);
//! assert!(link.starts_with("https://wa.me/"));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod contact;
pub mod outbound;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductType, Promo};

    // Search
    pub use crate::search::{
        distinct_scents, query, CatalogAction, CatalogSession, CatalogState, CatalogView,
        FilterSpec, PageMode, Pagination, Paginator, ScentFilter, TypeFilter,
    };

    // Outbound
    pub use crate::contact::{contact_email, contact_message, ContactForm, EmailDraft, PqrsKind};
    pub use crate::outbound::{
        build_external_link, decode_message, product_message, Greeting, MessagingTarget,
    };
}
