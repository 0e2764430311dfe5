//! # Catalog Module
//!
//! Products and the per-store catalog they live in.
//!
//! A catalog is an ordered collection of products with unique
//! (case-insensitive) names and mutable stock. It is constructed once
//! per store session, mutated in place by committed purchases, and
//! discarded at process end. The single invariant that matters:
//! **stock never goes negative**, and a failed commit never mutates.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name, validate_stock};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name; unique within a catalog (case-insensitive).
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Currently available quantity. Never negative.
    pub stock: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be sold right now.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.stock
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered collection of products with unique names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and name uniqueness.
    ///
    /// ## Errors
    /// - `Validation(Required | TooLong)` for a bad product name
    /// - `Validation(OutOfRange)` for negative price or stock
    /// - `Validation(Duplicate)` when two names collide case-insensitively
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (idx, product) in products.iter().enumerate() {
            validate_product_name(&product.name)?;
            validate_price_cents(product.price_cents)?;
            validate_stock(product.stock)?;

            let duplicate = products[..idx]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&product.name));
            if duplicate {
                return Err(ValidationError::Duplicate {
                    field: "name".to_string(),
                    value: product.name.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a catalog from JSON seed data.
    ///
    /// The register embeds its store seeds as JSON; this is the only
    /// place seed data enters the core.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(raw).map_err(|e| CoreError::InvalidCatalog {
                reason: e.to_string(),
            })?;
        Catalog::new(products)
    }

    /// Returns the products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a product by name, case-insensitively, ignoring
    /// surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Commits a purchase: validates the request, decrements stock,
    /// and returns the frozen unit price for the order line.
    ///
    /// ## Behavior
    /// - Unknown name → `ProductNotFound`, no mutation
    /// - `quantity <= 0` → `QuantityNotPositive`, no mutation
    /// - `quantity > stock` → `InsufficientStock`, no mutation
    /// - Otherwise stock is reduced by exactly `quantity`
    pub fn commit(&mut self, name: &str, quantity: i64) -> CoreResult<Money> {
        let name = name.trim();
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        if quantity <= 0 {
            return Err(CoreError::QuantityNotPositive {
                requested: quantity,
            });
        }

        if quantity > product.stock {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        product.stock -= quantity;
        Ok(product.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            Product {
                name: "Keyboard".to_string(),
                price_cents: 10_000,
                stock: 500,
            },
            Product {
                name: "Mouse".to_string(),
                price_cents: 5_000,
                stock: 3,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = test_catalog();
        assert!(catalog.find("keyboard").is_some());
        assert!(catalog.find("  MOUSE  ").is_some());
        assert!(catalog.find("Laptop").is_none());
    }

    #[test]
    fn test_commit_decrements_stock_and_freezes_price() {
        let mut catalog = test_catalog();
        let price = catalog.commit("keyboard", 200).unwrap();
        assert_eq!(price.cents(), 10_000);
        assert_eq!(catalog.find("Keyboard").unwrap().stock, 300);
    }

    #[test]
    fn test_commit_insufficient_stock_never_mutates() {
        let mut catalog = test_catalog();
        let err = catalog.commit("Mouse", 4).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 3,
                requested: 4,
                ..
            }
        ));
        assert_eq!(catalog.find("Mouse").unwrap().stock, 3);
    }

    #[test]
    fn test_commit_rejects_non_positive_quantity() {
        let mut catalog = test_catalog();
        assert!(matches!(
            catalog.commit("Mouse", 0),
            Err(CoreError::QuantityNotPositive { requested: 0 })
        ));
        assert!(matches!(
            catalog.commit("Mouse", -2),
            Err(CoreError::QuantityNotPositive { requested: -2 })
        ));
        assert_eq!(catalog.find("Mouse").unwrap().stock, 3);
    }

    #[test]
    fn test_commit_unknown_product() {
        let mut catalog = test_catalog();
        assert!(matches!(
            catalog.commit("Laptop", 1),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_stock_can_reach_but_never_cross_zero() {
        let mut catalog = test_catalog();
        catalog.commit("Mouse", 3).unwrap();
        assert_eq!(catalog.find("Mouse").unwrap().stock, 0);
        assert!(catalog.commit("Mouse", 1).is_err());
        assert_eq!(catalog.find("Mouse").unwrap().stock, 0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![
            Product {
                name: "Pen".to_string(),
                price_cents: 80,
                stock: 10,
            },
            Product {
                name: "pen".to_string(),
                price_cents: 90,
                stock: 10,
            },
        ]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"name": "Pen", "price_cents": 80, "stock": 200}]"#,
        )
        .unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.find("Pen").unwrap().price().cents(), 80);

        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"[{"name": "", "price_cents": 1, "stock": 1}]"#).is_err());
    }

    #[test]
    fn test_can_sell() {
        let catalog = test_catalog();
        let mouse = catalog.find("Mouse").unwrap();
        assert!(mouse.can_sell(1));
        assert!(mouse.can_sell(3));
        assert!(!mouse.can_sell(4));
        assert!(!mouse.can_sell(0));
        assert!(!mouse.can_sell(-1));
    }
}
