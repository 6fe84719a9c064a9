//! Filter specification and its individual predicates.

use crate::catalog::{Product, ProductType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shared by the "no filter" option of both selects.
pub const ALL_LABEL: &str = "All";

/// Category select: everything, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ProductType),
}

impl TypeFilter {
    /// Parse a select value. Blank, "All" and "Todos" mean no filter.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || is_all_label(trimmed) {
            return Some(TypeFilter::All);
        }
        ProductType::from_label(trimmed).map(TypeFilter::Only)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TypeFilter::All)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL_LABEL),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

/// Scent select: everything, or a note matched by containment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScentFilter {
    #[default]
    All,
    Note(String),
}

impl ScentFilter {
    /// Parse a select value. Blank, "All" and "Todos" mean no filter.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || is_all_label(trimmed) {
            ScentFilter::All
        } else {
            ScentFilter::Note(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ScentFilter::All)
    }
}

impl fmt::Display for ScentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScentFilter::All => f.write_str(ALL_LABEL),
            ScentFilter::Note(note) => f.write_str(note),
        }
    }
}

fn is_all_label(s: &str) -> bool {
    s.eq_ignore_ascii_case(ALL_LABEL) || s.eq_ignore_ascii_case("todos")
}

/// Which end of the price range a field sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Min,
    Max,
}

/// Parse the text of a min/max price field.
///
/// Any finite number counts, including decimals, negatives and exponent
/// notation. Prices are whole units, so a minimum rounds up and a maximum
/// rounds down. Blank or non-numeric input means the bound is not set.
pub fn parse_price_bound(raw: &str, kind: BoundKind) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let rounded = match kind {
                BoundKind::Min => value.ceil(),
                BoundKind::Max => value.floor(),
            };
            // Float to int casts saturate at the i64 range.
            Some(rounded as i64)
        }
        _ => {
            tracing::debug!(input = trimmed, "ignoring non-numeric price bound");
            None
        }
    }
}

/// The combined search/filter constraints of a catalog session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterSpec {
    /// Free text, matched case-insensitively as a substring.
    pub search_text: String,
    pub type_filter: TypeFilter,
    pub scent_filter: ScentFilter,
    /// Inclusive lower bound on the nominal price.
    pub min_price: Option<i64>,
    /// Inclusive upper bound on the nominal price. A negative bound matches
    /// nothing.
    pub max_price: Option<i64>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_type(mut self, product_type: ProductType) -> Self {
        self.type_filter = TypeFilter::Only(product_type);
        self
    }

    pub fn with_scent(mut self, note: impl Into<String>) -> Self {
        self.scent_filter = ScentFilter::parse(&note.into());
        self
    }

    pub fn with_min_price(mut self, min: i64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: i64) -> Self {
        self.max_price = Some(max);
        self
    }

    /// True when no constraint is active.
    pub fn is_default(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.type_filter.is_all()
            && self.scent_filter.is_all()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// The active constraints as individual predicates.
    pub fn predicates(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        let text = self.search_text.trim();
        if !text.is_empty() {
            filters.push(Filter::Text(text.to_lowercase()));
        }
        if let TypeFilter::Only(t) = self.type_filter {
            filters.push(Filter::ProductType(t));
        }
        if let ScentFilter::Note(note) = &self.scent_filter {
            filters.push(Filter::Scent(note.to_lowercase()));
        }
        if let Some(min) = self.min_price {
            filters.push(Filter::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            filters.push(Filter::MaxPrice(max));
        }

        filters
    }
}

/// A single catalog predicate. Text values are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Name, description, any scent note or any tag contains the text.
    Text(String),
    /// Exact category.
    ProductType(ProductType),
    /// Some scent note contains the value.
    Scent(String),
    /// Nominal price at or above.
    MinPrice(i64),
    /// Nominal price at or below.
    MaxPrice(i64),
}

impl Filter {
    /// Check whether a product satisfies this predicate.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => {
                contains(&product.name, needle)
                    || contains(&product.description, needle)
                    || product.scent_notes.iter().any(|n| contains(n, needle))
                    || product.tags.iter().any(|t| contains(t, needle))
            }
            Filter::ProductType(t) => product.product_type == *t,
            Filter::Scent(needle) => product.scent_notes.iter().any(|n| contains(n, needle)),
            Filter::MinPrice(min) => i128::from(product.price) >= i128::from(*min),
            Filter::MaxPrice(max) => i128::from(product.price) <= i128::from(*max),
        }
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
