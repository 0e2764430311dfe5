//! # Discount Policy
//!
//! Quantity-tiered discount rates.
//!
//! A policy is a pure, total function from the session's cumulative
//! quantity to a rate. Two interchangeable policies exist, selected
//! explicitly by the caller (a tagged enum, not a function pointer):
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Banded                      LinearStep                        │
//! │  ──────                      ──────────                        │
//! │  [ 250,  500) →  5%          rate = (qty / 50) × 2%            │
//! │  [ 500,  750) → 10%          clamped at 98%                    │
//! │  [ 750, 1000) → 15%                                            │
//! │  [1000, 1250) → 20%          49 → 0%, 50 → 2%, 120 → 4%        │
//! │  [1250, 1500) → 25%                                            │
//! │  elsewhere    →  0%                                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bands are half-open and lower-inclusive; there is no discount
//! below 250 or at/above 1500.

use serde::{Deserialize, Serialize};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5%, the smallest banded tier.
///
/// Rates produced by a [`DiscountPolicy`] always lie in `[0, 10000)`,
/// i.e. a discount never reaches 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// Rate granted per step of [`DiscountPolicy::LinearStep`].
pub const LINEAR_STEP_BPS: u32 = 200;

/// Quantity per step of [`DiscountPolicy::LinearStep`].
pub const LINEAR_STEP_QTY: i64 = 50;

/// Cap for the linear-step rate: the largest step multiple below 100%.
///
/// The step formula grows without bound and would exceed 100% around
/// 2500 units; clamping keeps the rate in `[0, 1)`.
pub const LINEAR_CAP_BPS: u32 = 9800;

/// A pluggable quantity-to-rate pricing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Fixed thresholds mapped to fixed rates (the device store tiers).
    Banded,
    /// 2% per 50 units, clamped below 100% (the stationery store tiers).
    LinearStep,
}

impl DiscountPolicy {
    /// Returns the discount rate for a cumulative session quantity.
    ///
    /// Pure and total: defined for every `i64`, negative quantities
    /// get a zero rate.
    pub fn rate_for(&self, total_qty: i64) -> DiscountRate {
        match self {
            DiscountPolicy::Banded => DiscountRate::from_bps(banded_bps(total_qty)),
            DiscountPolicy::LinearStep => DiscountRate::from_bps(linear_step_bps(total_qty)),
        }
    }
}

/// Banded tier table. Half-open bands, lower-inclusive.
fn banded_bps(qty: i64) -> u32 {
    match qty {
        250..=499 => 500,
        500..=749 => 1000,
        750..=999 => 1500,
        1000..=1249 => 2000,
        1250..=1499 => 2500,
        _ => 0,
    }
}

/// Linear-step rate: one step of 2% per full 50 units, clamped.
fn linear_step_bps(qty: i64) -> u32 {
    if qty < LINEAR_STEP_QTY {
        return 0;
    }
    let steps = qty / LINEAR_STEP_QTY;
    let bps = steps.saturating_mul(LINEAR_STEP_BPS as i64);
    bps.min(LINEAR_CAP_BPS as i64) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================
