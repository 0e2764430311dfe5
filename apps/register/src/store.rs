//! # Store Definitions
//!
//! The two storefronts the register serves, plus their catalog seed
//! data. Seeds ship embedded as JSON and are parsed once at startup;
//! bad seed data fails the process before any prompt is shown.

use tally_core::{Catalog, CoreResult, DiscountPolicy};

/// A storefront: greeting, discount policy, and a label for logs.
#[derive(Debug, Clone, Copy)]
pub struct Store {
    pub name: &'static str,
    pub greeting: &'static str,
    pub policy: DiscountPolicy,
}

/// The devices store: banded tiers (bulk thresholds).
pub const ELECTRONICS: Store = Store {
    name: "devices",
    greeting: "Hello! The available products are:",
    policy: DiscountPolicy::Banded,
};

/// The stationery store: 2% per 50 units.
pub const STATIONERY: Store = Store {
    name: "stationery",
    greeting: "Hello! The available stationery products are:",
    policy: DiscountPolicy::LinearStep,
};

/// Seeds the devices catalog.
pub fn electronics_catalog() -> CoreResult<Catalog> {
    Catalog::from_json(include_str!("../data/electronics.json"))
}

/// Seeds the stationery catalog.
pub fn stationery_catalog() -> CoreResult<Catalog> {
    Catalog::from_json(include_str!("../data/stationery.json"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Money;

    #[test]
    fn test_electronics_seed_parses() {
        let catalog = electronics_catalog().unwrap();
        assert_eq!(catalog.products().len(), 8);

        let laptop = catalog.find("Laptop").unwrap();
        assert_eq!(laptop.price(), Money::from_major_minor(1200, 0));
        assert_eq!(laptop.stock, 50);
    }

    #[test]
    fn test_stationery_seed_parses() {
        let catalog = stationery_catalog().unwrap();
        assert_eq!(catalog.products().len(), 10);

        let pen = catalog.find("Pen").unwrap();
        assert_eq!(pen.price(), Money::from_major_minor(0, 80));
        assert_eq!(pen.stock, 200);
    }
}
