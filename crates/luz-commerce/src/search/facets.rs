//! Options for the catalog's filter selects.

use crate::catalog::{Product, ProductType};
use crate::search::{ScentFilter, TypeFilter};
use std::collections::HashSet;

/// Scent select options: `All`, then every distinct note in first-seen order.
///
/// Notes that would read back as the `All` option (blank, "All", "Todos")
/// are left out.
pub fn distinct_scents(products: &[Product]) -> Vec<ScentFilter> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = vec![ScentFilter::All];

    for note in products.iter().flat_map(|p| p.scent_notes.iter()) {
        if ScentFilter::parse(note).is_all() {
            tracing::debug!(note = note.as_str(), "scent note shadows the All option");
            continue;
        }
        if seen.insert(note.as_str()) {
            options.push(ScentFilter::Note(note.clone()));
        }
    }

    options
}

/// Category select options: `All`, then every category.
pub fn type_options() -> Vec<TypeFilter> {
    std::iter::once(TypeFilter::All)
        .chain(ProductType::ALL.iter().copied().map(TypeFilter::Only))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::ALL_LABEL;

    #[test]
    fn test_distinct_scents_first_seen_order() {
        let catalog = Catalog::builtin().unwrap();
        let options = distinct_scents(catalog.products());

        assert_eq!(options[0], ScentFilter::All);
        assert_eq!(options[1], ScentFilter::Note("lavanda fresca".into()));
        assert_eq!(options[4], ScentFilter::Note("vainilla cremosa".into()));
        // 6 products x 3 notes, all distinct in the seed data.
        assert_eq!(options.len(), 19);
    }

    #[test]
    fn test_distinct_scents_deduplicates() {
        let a = Product::new("a", "A", ProductType::Decorative, 1, vec!["coco".into(), "miel".into()]);
        let b = Product::new("b", "B", ProductType::Decorative, 1, vec!["miel".into(), "rosa".into()]);
        let options: Vec<String> = distinct_scents(&[a, b])
            .iter()
            .map(|o| o.to_string())
            .collect();
        assert_eq!(options, vec!["All", "coco", "miel", "rosa"]);
    }

    #[test]
    fn test_notes_named_like_all_are_skipped() {
        let a = Product::new("a", "A", ProductType::Decorative, 1, vec!["All".into(), "coco".into()]);
        let b = Product::new("b", "B", ProductType::Decorative, 1, vec!["todos".into(), " ".into()]);
        let options = distinct_scents(&[a, b]);
        assert_eq!(options, vec![ScentFilter::All, ScentFilter::Note("coco".into())]);
        assert_eq!(
            options.iter().filter(|o| o.to_string() == ALL_LABEL).count(),
            1
        );
    }

    #[test]
    fn test_distinct_scents_empty_catalog() {
        assert_eq!(distinct_scents(&[]), vec![ScentFilter::All]);
    }

    #[test]
    fn test_type_options() {
        let options = type_options();
        assert_eq!(options.len(), 5);
        assert!(options[0].is_all());
        assert_eq!(options[2].to_string(), "Masaje");
    }
}
