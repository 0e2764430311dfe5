//! # Billing Module
//!
//! Bill computation over the session's order lines.
//!
//! A [`Bill`] is derived state: it is recomputed whole from the full
//! line sequence every time a line commits. There is no incremental
//! update path, so the figures can never drift from the lines.

use serde::{Deserialize, Serialize};

use crate::discount::DiscountRate;
use crate::money::Money;
use crate::session::OrderLine;

/// The three figures presented after every committed line.
///
/// `net = gross - discount`, with the discount computed from `rate`
/// in basis points using half-up integer rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Σ unit_price × quantity over all lines.
    pub gross: Money,

    /// The discount rate applied.
    pub rate: DiscountRate,

    /// The amount taken off the gross total.
    pub discount: Money,

    /// The payable amount after discount.
    pub net: Money,
}

impl Bill {
    /// Computes a bill from order lines and a discount rate.
    ///
    /// Pure and idempotent: identical inputs always produce an
    /// identical bill, and the inputs are never mutated.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::billing::Bill;
    /// use tally_core::discount::DiscountRate;
    /// use tally_core::money::Money;
    /// use tally_core::session::OrderLine;
    ///
    /// let lines = vec![
    ///     OrderLine::new("A", Money::from_cents(1000), 2),
    ///     OrderLine::new("B", Money::from_cents(2000), 3),
    ///     OrderLine::new("C", Money::from_cents(3000), 1),
    /// ];
    /// let bill = Bill::compute(&lines, DiscountRate::from_bps(1000));
    /// assert_eq!(bill.gross.cents(), 11_000); // $110.00
    /// assert_eq!(bill.net.cents(), 9_900);    // $99.00
    /// ```
    pub fn compute(lines: &[OrderLine], rate: DiscountRate) -> Bill {
        let gross = lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        let discount = gross.discount_amount(rate);

        Bill {
            gross,
            rate,
            discount,
            net: gross - discount,
        }
    }

    /// An all-zero bill (empty session).
    pub fn empty() -> Bill {
        Bill::compute(&[], DiscountRate::zero())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine::new("A", Money::from_cents(1000), 2),
            OrderLine::new("B", Money::from_cents(2000), 3),
            OrderLine::new("C", Money::from_cents(3000), 1),
        ]
    }

    #[test]
    fn test_reference_bill() {
        // prices [10, 20, 30], quantities [2, 3, 1], rate 10%
        let bill = Bill::compute(&lines(), DiscountRate::from_bps(1000));
        assert_eq!(bill.gross.cents(), 11_000);
        assert_eq!(bill.discount.cents(), 1_100);
        assert_eq!(bill.net.cents(), 9_900);
    }

    #[test]
    fn test_zero_rate_bill() {
        let bill = Bill::compute(&lines(), DiscountRate::zero());
        assert_eq!(bill.gross, bill.net);
        assert!(bill.discount.is_zero());
    }

    #[test]
    fn test_empty_bill() {
        let bill = Bill::empty();
        assert!(bill.gross.is_zero());
        assert!(bill.net.is_zero());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let lines = lines();
        let rate = DiscountRate::from_bps(1000);
        let first = Bill::compute(&lines, rate);
        let second = Bill::compute(&lines, rate);
        assert_eq!(first, second);
    }
}
