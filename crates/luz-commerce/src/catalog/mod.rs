//! Product catalog module.
//!
//! Contains the product record, promos, and the read-only catalog with its
//! slug index.

mod product;
mod store;

pub use product::{Product, ProductType, Promo};
pub use store::Catalog;
