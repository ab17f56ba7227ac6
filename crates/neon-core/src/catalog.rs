//! # Catalog
//!
//! The read-only product collection the storefront renders and the cart
//! prices against.
//!
//! The cart core only needs lookup-by-id, expressed as [`ProductLookup`].
//! [`Catalog`] adds the handful of queries the landing page and listing
//! need. There is no search, pagination or index.

use std::collections::BTreeMap;

use crate::types::{Category, Product};

/// Lookup-by-id over some collection of products.
pub trait ProductLookup {
    fn product(&self, id: &str) -> Option<&Product>;
}

impl ProductLookup for [Product] {
    fn product(&self, id: &str) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }
}

impl ProductLookup for Vec<Product> {
    fn product(&self, id: &str) -> Option<&Product> {
        self.as_slice().product(id)
    }
}

/// Ordered product list as delivered by the catalog source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a product by its URL slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Finds a product by id, falling back to slug. Used for user input.
    pub fn resolve(&self, id_or_slug: &str) -> Option<&Product> {
        self.get(id_or_slug).or_else(|| self.by_slug(id_or_slug))
    }

    /// The first `limit` featured products, in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }

    /// Products in one category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Product count per category. Every category is present, zero included.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for product in &self.products {
            *counts.entry(product.category).or_insert(0) += 1;
        }
        counts
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: &str) -> Option<&Product> {
        self.get(id)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Catalog::from_products(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::product;

    fn sample() -> Catalog {
        let mut a = product("A", 100, &[]);
        a.featured = true;
        let mut b = product("B", 200, &[]);
        b.category = Category::Pcb;
        let mut c = product("C", 300, &[]);
        c.featured = true;
        c.category = Category::Pcb;
        let mut d = product("D", 400, &[]);
        d.featured = true;
        let mut e = product("E", 500, &[]);
        e.featured = true;
        Catalog::from_products(vec![a, b, c, d, e])
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let catalog = sample();
        assert_eq!(catalog.get("B").map(|p| p.price.amount.cents()), Some(200));
        assert_eq!(catalog.by_slug("C-slug").map(|p| p.id.as_str()), Some("C"));
        assert_eq!(catalog.resolve("D-slug").map(|p| p.id.as_str()), Some("D"));
        assert!(catalog.get("Z").is_none());
    }

    #[test]
    fn test_featured_respects_order_and_limit() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.featured(3).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_category_counts_include_empty_categories() {
        let counts = sample().category_counts();
        assert_eq!(counts[&Category::Cabinet], 3);
        assert_eq!(counts[&Category::Pcb], 2);
        assert_eq!(counts[&Category::Controller], 0);
        assert_eq!(counts[&Category::Artwork], 0);
        assert_eq!(sample().in_category(Category::Pcb).len(), 2);
    }
}
