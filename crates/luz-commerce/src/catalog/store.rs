//! The read-only product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, Slug};
use std::collections::HashMap;

/// Seed catalog shipped with the storefront.
const SEED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Immutable, ordered product list with unique-key indexes.
///
/// Catalog order is the display order everywhere; nothing re-sorts it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_slug: HashMap<Slug, usize>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, checking every product and key uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut by_slug = HashMap::with_capacity(products.len());
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            product.validate()?;
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CommerceError::DuplicateId(product.id.to_string()));
            }
            if by_slug.insert(product.slug.clone(), index).is_some() {
                return Err(CommerceError::DuplicateSlug(product.slug.to_string()));
            }
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self {
            products,
            by_slug,
            by_id,
        })
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The seed catalog embedded at compile time.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_json(SEED_PRODUCTS)
    }

    /// A catalog with no products.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact-match lookup by slug.
    pub fn get(&self, slug: &str) -> Option<&Product> {
        self.by_slug.get(slug).map(|&i| &self.products[i])
    }

    /// Exact-match lookup by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    /// Lookup by slug, failing with `ProductNotFound`.
    pub fn require(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.get(slug).ok_or_else(|| {
            tracing::debug!(slug, "product lookup missed");
            CommerceError::ProductNotFound(slug.to_string())
        })
    }

    /// Products carrying a promo, in catalog order.
    pub fn promotions(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.has_promo()).collect()
    }

    /// The first `n` products, used by the hero mockup.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Promo, ProductType};

    fn candle(id: &str) -> Product {
        Product::new(id, id, ProductType::Decorative, 10000, vec!["neutra".into()])
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.products()[0].slug.as_str(), "vela-lavanda");
    }

    #[test]
    fn test_lookup_by_slug_and_id() {
        let catalog = Catalog::builtin().unwrap();
        let p = catalog.get("vela-citronela").unwrap();
        assert_eq!(p.price, 45000);
        assert!(catalog.get_by_id("vela-vainilla").is_some());
        assert!(catalog.get("VELA-CITRONELA").is_none());
    }

    #[test]
    fn test_require_reports_not_found() {
        let catalog = Catalog::builtin().unwrap();
        match catalog.require("vela-inexistente") {
            Err(CommerceError::ProductNotFound(slug)) => assert_eq!(slug, "vela-inexistente"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let a = candle("a");
        let mut b = candle("b");
        b.slug = Slug::new("a");
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CommerceError::DuplicateSlug(s)) if s == "a"
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let a = candle("a");
        let mut b = candle("a");
        b.slug = Slug::new("b");
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CommerceError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CommerceError::Serialization(_))
        ));
    }

    #[test]
    fn test_promotions_and_featured() {
        let catalog = Catalog::builtin().unwrap();
        let promos: Vec<&str> = catalog
            .promotions()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(
            promos,
            vec!["vela-lavanda", "vela-citronela", "vela-personalizada"]
        );
        assert_eq!(catalog.featured(3).len(), 3);
        assert_eq!(catalog.featured(50).len(), 6);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.promotions().is_empty());
        assert!(catalog.featured(3).is_empty());
        let mut p = candle("x");
        p.promo = Some(Promo::new("x", 5));
        assert_eq!(Catalog::new(vec![p]).unwrap().promotions().len(), 1);
    }
}
