//! Product and promo types.

use crate::error::CommerceError;
use crate::ids::{ProductId, Slug};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candle category. Serialized with the catalog's Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Aromaterapia")]
    Aromatherapy,
    #[serde(rename = "Masaje")]
    Massage,
    #[serde(rename = "Decorativa")]
    Decorative,
    #[serde(rename = "Personalizada")]
    Custom,
}

impl ProductType {
    /// Every category, in the order the catalog filter lists them.
    pub const ALL: [ProductType; 4] = [
        ProductType::Aromatherapy,
        ProductType::Massage,
        ProductType::Decorative,
        ProductType::Custom,
    ];

    /// Display label as shown in the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Aromatherapy => "Aromaterapia",
            ProductType::Massage => "Masaje",
            ProductType::Decorative => "Decorativa",
            ProductType::Custom => "Personalizada",
        }
    }

    /// Parse a label or English variant name, ignoring case.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aromaterapia" | "aromatherapy" => Some(ProductType::Aromatherapy),
            "masaje" | "massage" => Some(ProductType::Massage),
            "decorativa" | "decorative" => Some(ProductType::Decorative),
            "personalizada" | "custom" => Some(ProductType::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage discount annotation shown on catalog cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Promo {
    /// Badge text (e.g., "-10% Semana Zen").
    pub label: String,
    /// Discount in percent, 0-100.
    pub discount_percent: u8,
    /// Last day the promo runs, if limited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<NaiveDate>,
}

impl Promo {
    pub fn new(label: impl Into<String>, discount_percent: u8) -> Self {
        Self {
            label: label.into(),
            discount_percent,
            until: None,
        }
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    /// True while `until` is unset or not yet passed.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.until.map_or(true, |until| date <= until)
    }
}

/// A candle in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: Slug,
    /// Category.
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Nominal price in whole currency units.
    pub price: u64,
    /// Wax capacity in millilitres.
    pub capacity_ml: u32,
    /// Approximate burn time in hours.
    pub burn_time_hours: u32,
    /// Scent notes, most prominent first. Never empty.
    pub scent_notes: Vec<String>,
    /// Persuasive description, also searched.
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub is_massage_safe: bool,
    #[serde(default)]
    pub is_natural: bool,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Placeholder colour for the product image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<Promo>,
}

impl Product {
    /// Create a product with the required fields; optional ones start empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        product_type: ProductType,
        price: u64,
        scent_notes: Vec<String>,
    ) -> Self {
        let id = id.into();
        Self {
            slug: Slug::new(id.as_str()),
            id,
            name: name.into(),
            product_type,
            price,
            capacity_ml: 0,
            burn_time_hours: 0,
            scent_notes,
            description: String::new(),
            ingredients: Vec::new(),
            is_massage_safe: false,
            is_natural: false,
            tags: Vec::new(),
            color: None,
            promo: None,
        }
    }

    /// Nominal price as money.
    pub fn nominal_price(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Price after the promo discount, or the nominal price without one.
    pub fn effective_price(&self, currency: Currency) -> Money {
        let nominal = self.nominal_price(currency);
        match &self.promo {
            Some(promo) => nominal.discounted(promo.discount_percent),
            None => nominal,
        }
    }

    /// Check if the product carries a promo.
    pub fn has_promo(&self) -> bool {
        self.promo.is_some()
    }

    /// Check the per-product invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::Validation("product id is empty".into()));
        }
        if self.slug.as_str().trim().is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {} has an empty slug",
                self.id
            )));
        }
        if self.scent_notes.is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {} has no scent notes",
                self.id
            )));
        }
        if let Some(promo) = &self.promo {
            if promo.discount_percent > 100 {
                return Err(CommerceError::InvalidDiscount {
                    product: self.id.to_string(),
                    percent: promo.discount_percent,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lavender() -> Product {
        let mut p = Product::new(
            "vela-lavanda",
            "Vela de Lavanda Provenzal",
            ProductType::Aromatherapy,
            48000,
            vec!["lavanda fresca".into()],
        );
        p.promo = Some(Promo::new("-10% Semana Zen", 10));
        p
    }

    #[test]
    fn test_product_creation() {
        let p = lavender();
        assert_eq!(p.slug.as_str(), "vela-lavanda");
        assert!(p.has_promo());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_effective_price() {
        let mut p = lavender();
        assert_eq!(p.effective_price(Currency::COP).amount, 43200);
        assert_eq!(p.nominal_price(Currency::COP).amount, 48000);

        p.promo = None;
        assert_eq!(p.effective_price(Currency::COP).amount, 48000);
    }

    #[test]
    fn test_validate_rejects_missing_scents() {
        let mut p = lavender();
        p.scent_notes.clear();
        assert!(matches!(p.validate(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_large_discount() {
        let mut p = lavender();
        p.promo = Some(Promo::new("gratis", 120));
        assert!(matches!(
            p.validate(),
            Err(CommerceError::InvalidDiscount { percent: 120, .. })
        ));
    }

    #[test]
    fn test_promo_expiry() {
        let until = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let promo = Promo::new("-10%", 10).with_until(until);
        assert!(promo.is_active_on(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()));
        assert!(!promo.is_active_on(NaiveDate::from_ymd_opt(2025, 9, 16).unwrap()));
        assert!(Promo::new("2x1", 50).is_active_on(NaiveDate::MAX));
    }

    #[test]
    fn test_product_type_labels() {
        assert_eq!(ProductType::Aromatherapy.to_string(), "Aromaterapia");
        assert_eq!(ProductType::from_label("masaje"), Some(ProductType::Massage));
        assert_eq!(ProductType::from_label("Custom"), Some(ProductType::Custom));
        assert_eq!(ProductType::from_label("Todos"), None);
    }

    #[test]
    fn test_product_deserializes_catalog_json() {
        let json = r#"{
            "id": "vela-citronela",
            "name": "Vela de Citronela al Aire Libre",
            "slug": "vela-citronela",
            "type": "Aromaterapia",
            "price": 45000,
            "capacityMl": 200,
            "burnTimeHours": 30,
            "scentNotes": ["cítrica", "limpia", "herbal"],
            "description": "Refresca terrazas y balcones.",
            "isNatural": true,
            "promo": { "label": "2x1 Terraza Feliz", "discountPercent": 50 }
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.product_type, ProductType::Aromatherapy);
        assert_eq!(p.capacity_ml, 200);
        assert!(p.is_natural);
        assert!(!p.is_massage_safe);
        assert!(p.ingredients.is_empty());
        assert_eq!(p.promo.as_ref().map(|p| p.discount_percent), Some(50));
    }
}
