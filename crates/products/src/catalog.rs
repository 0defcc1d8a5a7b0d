//! Read-side views over the product catalog.

use std::collections::HashMap;

use gradeflow_core::locale_cmp;
use serde::Serialize;

use crate::product::Product;
use crate::size::sort_sizes;

/// One grade (reference + color) with all its registered variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogGroup {
    pub reference: String,
    pub color: String,
    pub variants: Vec<Product>,
}

impl CatalogGroup {
    /// Variant sizes ordered by the size table.
    pub fn sizes(&self) -> Vec<&str> {
        let mut sizes: Vec<&str> = self.variants.iter().map(|p| p.size.as_str()).collect();
        sort_sizes(&mut sizes);
        sizes
    }
}

/// Borrowed view over a fetched product list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    products: &'a [Product],
}

impl<'a> Catalog<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &'a [Product] {
        self.products
    }

    /// Group variants by grade, groups sorted by reference.
    pub fn groups(&self) -> Vec<CatalogGroup> {
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();
        let mut groups: Vec<CatalogGroup> = Vec::new();

        for product in self.products {
            let key = (product.reference.as_str(), product.color.as_str());
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(CatalogGroup {
                    reference: product.reference.clone(),
                    color: product.color.clone(),
                    variants: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].variants.push(product.clone());
        }

        groups.sort_by(|a, b| locale_cmp(&a.reference, &b.reference));
        groups
    }

    /// Distinct references, sorted.
    pub fn references(&self) -> Vec<&'a str> {
        let mut refs: Vec<&str> = self.products.iter().map(|p| p.reference.as_str()).collect();
        refs.sort_unstable();
        refs.dedup();
        refs
    }

    /// Distinct colors registered for a reference, sorted.
    pub fn colors_for(&self, reference: &str) -> Vec<&'a str> {
        let mut colors: Vec<&str> = self
            .products
            .iter()
            .filter(|p| p.reference == reference)
            .map(|p| p.color.as_str())
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors
    }

    /// Distinct sizes registered for a grade, in size-table order.
    pub fn sizes_for(&self, reference: &str, color: &str) -> Vec<&'a str> {
        let mut sizes: Vec<&str> = Vec::new();
        for product in self.products.iter().filter(|p| p.is_grade(reference, color)) {
            if !sizes.contains(&product.size.as_str()) {
                sizes.push(product.size.as_str());
            }
        }
        sort_sizes(&mut sizes);
        sizes
    }

    /// Exact variant lookup.
    pub fn find_variant(&self, reference: &str, color: &str, size: &str) -> Option<&'a Product> {
        self.products.iter().find(|p| p.is_variant(reference, color, size))
    }

    /// Every variant of a grade.
    pub fn grade_variants(&self, reference: &str, color: &str) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| p.is_grade(reference, color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeflow_core::ProductId;

    fn variant(reference: &str, color: &str, size: &str) -> Product {
        Product {
            id: ProductId::new(),
            reference: reference.to_string(),
            color: color.to_string(),
            size: size.to_string(),
            search_key: crate::product::search_key(reference, color, size),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            variant("B20", "AZUL", "G"),
            variant("A10", "PRETO", "M"),
            variant("B20", "AZUL", "P"),
            variant("A10", "BRANCO", "GG"),
            variant("A10", "PRETO", "PP"),
            variant("B20", "AZUL", "P"),
        ]
    }

    #[test]
    fn groups_are_sorted_by_reference_and_keep_all_variants() {
        let products = sample();
        let groups = Catalog::new(&products).groups();

        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.reference.as_str(), g.color.as_str()))
            .collect();
        assert_eq!(keys, vec![("A10", "PRETO"), ("A10", "BRANCO"), ("B20", "AZUL")]);
        assert_eq!(groups[2].variants.len(), 3);
        assert_eq!(groups[0].sizes(), vec!["PP", "M"]);
    }

    #[test]
    fn order_entry_options_are_distinct_and_sorted() {
        let products = sample();
        let catalog = Catalog::new(&products);

        assert_eq!(catalog.references(), vec!["A10", "B20"]);
        assert_eq!(catalog.colors_for("A10"), vec!["BRANCO", "PRETO"]);
        assert_eq!(catalog.sizes_for("B20", "AZUL"), vec!["P", "G"]);
        assert!(catalog.colors_for("Z99").is_empty());
    }

    #[test]
    fn find_variant_requires_exact_match() {
        let products = sample();
        let catalog = Catalog::new(&products);

        assert!(catalog.find_variant("A10", "PRETO", "M").is_some());
        assert!(catalog.find_variant("A10", "PRETO", "G").is_none());
        assert_eq!(catalog.grade_variants("A10", "PRETO").len(), 2);
    }
}
