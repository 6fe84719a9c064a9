//! Product detail view.

use chrono::NaiveDate;
use luz_commerce::outbound::{product_message, MessagingTarget};
use luz_commerce::catalog::{Catalog, Product};
use luz_commerce::{CommerceError, Currency, Money};
use serde::Serialize;

use crate::Route;

/// Everything the detail page shows for one product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub slug: String,
    pub name: String,
    pub type_label: String,
    pub capacity_ml: u32,
    pub burn_time_hours: u32,
    pub description: String,
    pub ingredients: Vec<String>,
    pub scent_notes: Vec<String>,
    pub is_natural: bool,
    pub is_massage_safe: bool,
    pub color: Option<String>,
    /// Struck-through price, only shown with a promo.
    pub nominal_price: Money,
    pub effective_price: Money,
    pub promo_label: Option<String>,
    pub promo_until: Option<NaiveDate>,
    pub purchase_link: String,
    pub catalog_path: String,
}

impl ProductView {
    pub fn new(product: &Product, target: &MessagingTarget, currency: Currency) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.name.clone(),
            type_label: product.product_type.label().to_string(),
            capacity_ml: product.capacity_ml,
            burn_time_hours: product.burn_time_hours,
            description: product.description.clone(),
            ingredients: product.ingredients.clone(),
            scent_notes: product.scent_notes.clone(),
            is_natural: product.is_natural,
            is_massage_safe: product.is_massage_safe,
            color: product.color.clone(),
            nominal_price: product.nominal_price(currency),
            effective_price: product.effective_price(currency),
            promo_label: product.promo.as_ref().map(|p| p.label.clone()),
            promo_until: product.promo.as_ref().and_then(|p| p.until),
            purchase_link: target.link(&product_message(product, currency)),
            catalog_path: Route::Catalog.path(),
        }
    }

    pub fn has_promo(&self) -> bool {
        self.promo_label.is_some()
    }
}

/// Empty state for an unknown slug.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub slug: String,
    pub title: String,
    pub message: String,
    pub catalog_path: String,
}

impl NotFoundView {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: "Producto no encontrado".to_string(),
            message: "El producto que buscas no existe o fue movido.".to_string(),
            catalog_path: Route::Catalog.path(),
        }
    }
}

/// Result of resolving `/catalogo/{slug}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProductDetail {
    Found(Box<ProductView>),
    NotFound(NotFoundView),
}

impl ProductDetail {
    /// Look up `slug`. An unknown slug is a normal, recoverable state.
    pub fn resolve(
        catalog: &Catalog,
        slug: &str,
        target: &MessagingTarget,
        currency: Currency,
    ) -> Self {
        match catalog.require(slug) {
            Ok(product) => {
                ProductDetail::Found(Box::new(ProductView::new(product, target, currency)))
            }
            Err(CommerceError::ProductNotFound(missing)) => {
                tracing::debug!(slug = %missing, "product detail not found");
                ProductDetail::NotFound(NotFoundView::new(&missing))
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "unexpected lookup failure");
                ProductDetail::NotFound(NotFoundView::new(slug))
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProductDetail::Found(_))
    }

    pub fn view(&self) -> Option<&ProductView> {
        match self {
            ProductDetail::Found(view) => Some(view),
            ProductDetail::NotFound(_) => None,
        }
    }
}
