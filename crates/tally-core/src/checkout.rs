//! # Checkout Finalization
//!
//! Two independent steps applied in sequence to the combined total:
//! a flat fulfillment surcharge, then a currency conversion.
//!
//! Neither step rejects input. Unrecognized fulfillment input means
//! "decline both" (no charge); an unrecognized currency code is
//! treated as USD. Both are terminal: unlike the selection loop,
//! there is no retry here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Fulfillment
// =============================================================================

/// Flat fee for home delivery.
pub const DELIVERY_SURCHARGE: Money = Money::from_cents(20_000);

/// Flat fee for in-store pick-up.
pub const PICKUP_SURCHARGE: Money = Money::from_cents(5_000);

/// The shopper's fulfillment choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    /// Home delivery: +$200.00.
    Delivery,
    /// In-store pick-up: +$50.00.
    PickUp,
    /// Neither chosen; total unchanged.
    Declined,
}

impl Fulfillment {
    /// Parses a choice from console input.
    ///
    /// `d`/`D` → Delivery, `p`/`P` → PickUp, anything else →
    /// Declined. Never an error.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "d" | "D" => Fulfillment::Delivery,
            "p" | "P" => Fulfillment::PickUp,
            _ => Fulfillment::Declined,
        }
    }

    /// The flat surcharge for this choice.
    pub const fn surcharge(&self) -> Money {
        match self {
            Fulfillment::Delivery => DELIVERY_SURCHARGE,
            Fulfillment::PickUp => PICKUP_SURCHARGE,
            Fulfillment::Declined => Money::zero(),
        }
    }

    /// Applies the surcharge to an amount.
    pub fn apply(&self, amount: Money) -> Money {
        amount + self.surcharge()
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Supported display currencies with a static conversion table.
///
/// All prices are USD internally; conversion is the last step of
/// checkout and purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Egp,
}

impl Currency {
    /// Parses a currency code, case-insensitively.
    ///
    /// Unrecognized input falls back to USD (identity conversion),
    /// a defined default rather than an error.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_uppercase().as_str() {
            "EUR" => Currency::Eur,
            "EGP" => Currency::Egp,
            _ => Currency::Usd,
        }
    }

    /// Returns the ISO 4217 currency code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Egp => "EGP",
        }
    }

    /// The conversion rate from USD as a rational `(num, den)`.
    const fn rate(&self) -> (i64, i64) {
        match self {
            Currency::Usd => (1, 1),
            Currency::Eur => (92, 100),
            Currency::Egp => (30, 1),
        }
    }

    /// Converts a USD amount into this currency.
    pub fn convert(&self, amount: Money) -> Money {
        let (num, den) = self.rate();
        amount.convert(num, den)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_parse() {
        assert_eq!(Fulfillment::parse("D"), Fulfillment::Delivery);
        assert_eq!(Fulfillment::parse(" d "), Fulfillment::Delivery);
        assert_eq!(Fulfillment::parse("P"), Fulfillment::PickUp);
        assert_eq!(Fulfillment::parse("p"), Fulfillment::PickUp);
        assert_eq!(Fulfillment::parse("X"), Fulfillment::Declined);
        assert_eq!(Fulfillment::parse(""), Fulfillment::Declined);
    }

    #[test]
    fn test_fulfillment_surcharges() {
        // 500 + delivery = 700; 300 + pick-up = 350; 250 + nothing = 250
        assert_eq!(
            Fulfillment::Delivery.apply(Money::from_cents(50_000)).cents(),
            70_000
        );
        assert_eq!(
            Fulfillment::PickUp.apply(Money::from_cents(30_000)).cents(),
            35_000
        );
        assert_eq!(
            Fulfillment::Declined.apply(Money::from_cents(25_000)).cents(),
            25_000
        );
    }

    #[test]
    fn test_currency_parse_defaults_to_usd() {
        assert_eq!(Currency::parse("EUR"), Currency::Eur);
        assert_eq!(Currency::parse("eur"), Currency::Eur);
        assert_eq!(Currency::parse("EGP"), Currency::Egp);
        assert_eq!(Currency::parse("USD"), Currency::Usd);
        assert_eq!(Currency::parse("GBP"), Currency::Usd);
        assert_eq!(Currency::parse(""), Currency::Usd);
    }

    #[test]
    fn test_currency_conversion_table() {
        let hundred = Money::from_cents(10_000);
        assert_eq!(Currency::Eur.convert(hundred).cents(), 9_200);
        assert_eq!(Currency::Egp.convert(hundred).cents(), 300_000);
        assert_eq!(Currency::Usd.convert(hundred), hundred);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::parse("???").to_string(), "USD");
    }
}
