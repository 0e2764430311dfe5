//! # tally-core: Pure Checkout Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It contains the whole
//! order-accumulation and pricing pipeline as pure logic with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Tally POS Architecture                     │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                  apps/register (terminal)                │  │
//! │  │   prompts ──► table display ──► bill/receipt printing    │  │
//! │  └────────────────────────────┬─────────────────────────────┘  │
//! │                               │ one input line at a time       │
//! │  ┌────────────────────────────▼─────────────────────────────┐  │
//! │  │              ★ tally-core (THIS CRATE) ★                 │  │
//! │  │                                                          │  │
//! │  │  ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌───────────────┐  │  │
//! │  │  │ catalog │ │ discount │ │ billing │ │   selection   │  │  │
//! │  │  │ Product │ │  Banded  │ │  Bill   │ │ state machine │  │  │
//! │  │  │  stock  │ │  Linear  │ │  math   │ │   sentinel    │  │  │
//! │  │  └─────────┘ └──────────┘ └─────────┘ └───────────────┘  │  │
//! │  │  ┌─────────┐ ┌──────────┐ ┌──────────────────────────┐   │  │
//! │  │  │  money  │ │ session  │ │        checkout          │   │  │
//! │  │  │  cents  │ │ OrderLine│ │  surcharge + conversion  │   │  │
//! │  │  └─────────┘ └──────────┘ └──────────────────────────┘   │  │
//! │  │                                                          │  │
//! │  │  NO I/O • NO TERMINAL • NO NETWORK • PURE FUNCTIONS      │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Quantity-tiered discount policies
//! - [`billing`] - Bill computation over order lines
//! - [`catalog`] - Products and per-store stock
//! - [`session`] - Per-visit order accumulation
//! - [`selection`] - The interactive reservation state machine
//! - [`checkout`] - Fulfillment surcharge and currency conversion
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, everywhere
//! 2. **No I/O**: the console lives in the register app, never here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: typed errors, never strings or panics
//! 5. **Session Scoping**: accumulators are per-visit values, never
//!    process-wide singletons
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::discount::DiscountPolicy;
//! use tally_core::money::Money;
//! use tally_core::session::{OrderLine, Session};
//!
//! let mut session = Session::new();
//! session.push_line(OrderLine::new("Keyboard", Money::from_cents(10_000), 300));
//!
//! // 300 units lands in the first banded tier: 5% off
//! let bill = session.bill(DiscountPolicy::Banded);
//! assert_eq!(bill.rate.bps(), 500);
//! assert_eq!(bill.net.cents(), 2_850_000); // $28,500.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod checkout;
pub mod discount;
pub mod error;
pub mod money;
pub mod selection;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`.

pub use billing::Bill;
pub use catalog::{Catalog, Product};
pub use checkout::{Currency, Fulfillment};
pub use discount::{DiscountPolicy, DiscountRate};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::{SelectionLoop, SelectionReply, SelectionState};
pub use session::{OrderLine, Session};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
///
/// ## Business Reason
/// Keeps catalog tables renderable; anything longer is seed-data
/// corruption, not a real product.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
