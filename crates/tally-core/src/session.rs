//! # Session Module
//!
//! One shopper's pass through a single catalog.
//!
//! ## Session Scoping
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Store A session                Store B session                │
//! │  ┌──────────────┐               ┌──────────────┐               │
//! │  │ Session::new │               │ Session::new │  ← fresh      │
//! │  │ lines: [...] │               │ lines: [...] │    value,     │
//! │  └──────────────┘               └──────────────┘    not reuse  │
//! │                                                                │
//! │  Accumulated quantities from store A must NEVER influence      │
//! │  store B's discount rate. The accumulator is a value owned     │
//! │  by the session runner, never a process-wide singleton.        │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::billing::Bill;
use crate::discount::DiscountPolicy;
use crate::money::Money;

// =============================================================================
// Order Line
// =============================================================================

/// An append-only record of a committed purchase.
///
/// Uses the snapshot pattern: name and unit price are frozen at
/// commit time, so the line stays consistent even though the catalog
/// keeps mutating underneath it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name at time of commit (frozen).
    pub product_name: String,

    /// Unit price in cents at time of commit (frozen).
    pub unit_price_cents: i64,

    /// Quantity purchased.
    pub quantity: i64,

    /// When this line was committed.
    pub committed_at: DateTime<Utc>,
}

impl OrderLine {
    /// Creates a line from a committed purchase.
    pub fn new(product_name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        OrderLine {
            product_name: product_name.into(),
            unit_price_cents: unit_price.cents(),
            quantity,
            committed_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Session
// =============================================================================

/// The committed order lines of one store visit.
///
/// ## Invariants
/// - Lines are append-only; nothing edits or removes a committed line
/// - A session belongs to exactly one catalog/store visit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    lines: Vec<OrderLine>,
}

impl Session {
    /// Creates a new empty session. Call once per store visit.
    pub fn new() -> Self {
        Session { lines: Vec::new() }
    }

    /// Appends a committed order line.
    pub fn push_line(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    /// Returns the committed lines in commit order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of committed lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the cumulative quantity across ALL lines so far.
    ///
    /// This is the figure the discount policy tiers on.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Recomputes the session bill under a policy.
    ///
    /// The rate is derived from the cumulative quantity, then the
    /// bill is recomputed whole from the full line sequence rather
    /// than incrementally updated.
    pub fn bill(&self, policy: DiscountPolicy) -> Bill {
        let rate = policy.rate_for(self.total_quantity());
        Bill::compute(&self.lines, rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = OrderLine::new("Keyboard", Money::from_cents(10_000), 3);
        assert_eq!(line.line_total().cents(), 30_000);
        assert_eq!(line.unit_price().cents(), 10_000);
    }

    #[test]
    fn test_total_quantity_accumulates() {
        let mut session = Session::new();
        assert!(session.is_empty());

        session.push_line(OrderLine::new("Pen", Money::from_cents(80), 30));
        session.push_line(OrderLine::new("Pencil", Money::from_cents(50), 25));

        assert_eq!(session.line_count(), 2);
        assert_eq!(session.total_quantity(), 55);
    }

    #[test]
    fn test_bill_rate_follows_cumulative_quantity() {
        let mut session = Session::new();
        session.push_line(OrderLine::new("Pen", Money::from_cents(80), 30));
        // 30 units: below the first linear step
        assert!(session.bill(DiscountPolicy::LinearStep).rate.is_zero());

        session.push_line(OrderLine::new("Pencil", Money::from_cents(50), 25));
        // 55 units: one step = 2%
        assert_eq!(session.bill(DiscountPolicy::LinearStep).rate.bps(), 200);
    }

    #[test]
    fn test_fresh_sessions_are_isolated() {
        let mut first = Session::new();
        first.push_line(OrderLine::new("Keyboard", Money::from_cents(10_000), 300));
        assert_eq!(first.bill(DiscountPolicy::Banded).rate.bps(), 500);

        // A second store visit starts from zero: the first session's
        // 300 units must not leak into its rate.
        let mut second = Session::new();
        second.push_line(OrderLine::new("Pen", Money::from_cents(80), 10));
        assert_eq!(second.total_quantity(), 10);
        assert!(second.bill(DiscountPolicy::Banded).rate.is_zero());
    }
}
