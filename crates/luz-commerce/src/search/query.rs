//! Query engine: applies a filter specification to the catalog.

use crate::catalog::Product;
use crate::search::FilterSpec;

/// Select the products matching every active constraint of `spec`.
///
/// Pure and order-preserving: the result is a subsequence of `products`.
pub fn query<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let predicates = spec.predicates();
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| predicates.iter().all(|f| f.matches(p)))
        .collect();

    tracing::debug!(
        predicates = predicates.len(),
        catalog = products.len(),
        matched = matched.len(),
        "catalog query"
    );
    matched
}
