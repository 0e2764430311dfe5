//! # Selection Loop
//!
//! The interactive reservation state machine, with the console kept
//! entirely outside. The caller reads a line, feeds it in, and
//! renders the reply; every invalid input is recoverable and answered
//! with a reply that says how to re-prompt.
//!
//! ## State Machine
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                                                                │
//! │   ┌─────────────────┐  sentinel   ┌──────┐                     │
//! │   │ AwaitingProduct ├────────────►│ Done │                     │
//! │   └───────┬─────────┘             └──────┘                     │
//! │           │ match         ▲                                    │
//! │  no match │ ┌─────────────┘ commit (stock -= qty,              │
//! │  (re-ask) ▼ │               line appended, bill recomputed)    │
//! │   ┌─────────┴────────┐                                         │
//! │   │ AwaitingQuantity │◄── not a number / out of range (re-ask) │
//! │   └──────────────────┘                                         │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is unbounded: only the sentinel (or the caller running
//! out of input) can end it.

use crate::billing::Bill;
use crate::catalog::Catalog;
use crate::discount::DiscountPolicy;
use crate::error::CoreError;
use crate::session::{OrderLine, Session};
use crate::validation::parse_quantity;

/// The reserved input that quits the selection loop.
pub const QUIT_SENTINEL: &str = "q";

/// Checks whether an input line is the quit signal.
pub fn is_sentinel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_SENTINEL)
}

// =============================================================================
// States and Replies
// =============================================================================

/// Where the loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Waiting for a product name (or the sentinel).
    AwaitingProduct,
    /// Product matched; waiting for a quantity for it.
    AwaitingQuantity { product_name: String },
    /// Sentinel received, terminal.
    Done,
}

/// What the caller should do next after feeding a line.
#[derive(Debug, Clone)]
pub enum SelectionReply {
    /// Input matched no catalog entry. Re-prompt and re-display
    /// the catalog.
    UnknownProduct { input: String },

    /// Product matched; ask for a quantity next.
    ProductChosen { name: String },

    /// Quantity input didn't parse as an integer. Re-prompt, same
    /// product, nothing changed.
    NotANumber,

    /// Quantity was non-positive or exceeded stock. Re-prompt with
    /// the current availability; stock unchanged.
    OutOfRange { name: String, available: i64 },

    /// Purchase committed: stock decremented, line appended, bill
    /// recomputed over the whole session.
    Committed { line: OrderLine, bill: Bill },

    /// Sentinel received; the loop is over.
    Quit { lines_committed: usize },
}

// =============================================================================
// Selection Loop
// =============================================================================

/// The selection state machine for one store session.
///
/// Borrows the catalog and session for the duration of the visit;
/// both mutate only through [`SelectionLoop::handle_line`].
pub struct SelectionLoop<'a> {
    catalog: &'a mut Catalog,
    session: &'a mut Session,
    policy: DiscountPolicy,
    state: SelectionState,
}

impl<'a> SelectionLoop<'a> {
    /// Starts a selection loop at the product prompt.
    pub fn new(
        catalog: &'a mut Catalog,
        session: &'a mut Session,
        policy: DiscountPolicy,
    ) -> Self {
        SelectionLoop {
            catalog,
            session,
            policy,
            state: SelectionState::AwaitingProduct,
        }
    }

    /// The current state (drives which prompt the caller shows).
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Read access to the catalog, for re-displaying the table.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Whether the sentinel has been received.
    pub fn is_done(&self) -> bool {
        self.state == SelectionState::Done
    }

    /// Feeds one input line and advances the machine.
    pub fn handle_line(&mut self, input: &str) -> SelectionReply {
        match self.state.clone() {
            SelectionState::AwaitingProduct => self.handle_product_line(input),
            SelectionState::AwaitingQuantity { product_name } => {
                self.handle_quantity_line(&product_name, input)
            }
            SelectionState::Done => SelectionReply::Quit {
                lines_committed: self.session.line_count(),
            },
        }
    }

    fn handle_product_line(&mut self, input: &str) -> SelectionReply {
        if is_sentinel(input) {
            self.state = SelectionState::Done;
            return SelectionReply::Quit {
                lines_committed: self.session.line_count(),
            };
        }

        match self.catalog.find(input) {
            Some(product) => {
                let name = product.name.clone();
                self.state = SelectionState::AwaitingQuantity {
                    product_name: name.clone(),
                };
                SelectionReply::ProductChosen { name }
            }
            None => SelectionReply::UnknownProduct {
                input: input.trim().to_string(),
            },
        }
    }

    fn handle_quantity_line(&mut self, product_name: &str, input: &str) -> SelectionReply {
        let quantity = match parse_quantity(input) {
            Ok(q) => q,
            Err(_) => return SelectionReply::NotANumber,
        };

        match self.catalog.commit(product_name, quantity) {
            Ok(unit_price) => {
                let line = OrderLine::new(product_name, unit_price, quantity);
                self.session.push_line(line.clone());
                let bill = self.session.bill(self.policy);
                self.state = SelectionState::AwaitingProduct;
                SelectionReply::Committed { line, bill }
            }
            Err(
                CoreError::QuantityNotPositive { .. } | CoreError::InsufficientStock { .. },
            ) => {
                let available = self
                    .catalog
                    .find(product_name)
                    .map_or(0, |p| p.stock);
                SelectionReply::OutOfRange {
                    name: product_name.to_string(),
                    available,
                }
            }
            // The name came from a successful find; losing it mid-prompt
            // means the catalog changed underneath us. Start over.
            Err(_) => {
                self.state = SelectionState::AwaitingProduct;
                SelectionReply::UnknownProduct {
                    input: product_name.to_string(),
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product {
                name: "Keyboard".to_string(),
                price_cents: 10_000,
                stock: 500,
            },
            Product {
                name: "Mouse".to_string(),
                price_cents: 5_000,
                stock: 10,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        assert!(is_sentinel("q"));
        assert!(is_sentinel("Q"));
        assert!(is_sentinel("  q  "));
        assert!(!is_sentinel("quit"));
    }

    #[test]
    fn test_quit_from_product_prompt() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        let reply = sel.handle_line("Q");
        assert!(matches!(reply, SelectionReply::Quit { lines_committed: 0 }));
        assert!(sel.is_done());
    }

    #[test]
    fn test_unknown_product_reprompts_without_state_change() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        let reply = sel.handle_line("Laptop");
        assert!(matches!(reply, SelectionReply::UnknownProduct { .. }));
        assert_eq!(*sel.state(), SelectionState::AwaitingProduct);
    }

    #[test]
    fn test_commit_flow() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        assert!(matches!(
            sel.handle_line("keyboard"),
            SelectionReply::ProductChosen { .. }
        ));
        let reply = sel.handle_line("300");
        match reply {
            SelectionReply::Committed { line, bill } => {
                assert_eq!(line.quantity, 300);
                assert_eq!(bill.gross.cents(), 3_000_000);
                // 300 units → banded 5%
                assert_eq!(bill.rate.bps(), 500);
                assert_eq!(bill.net.cents(), 2_850_000);
            }
            other => panic!("expected Committed, got {other:?}"),
        }
        // loops straight back to the product prompt
        assert_eq!(*sel.state(), SelectionState::AwaitingProduct);
        assert_eq!(catalog.find("Keyboard").unwrap().stock, 200);
    }

    #[test]
    fn test_non_numeric_quantity_never_mutates_stock() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        sel.handle_line("Mouse");
        assert!(matches!(sel.handle_line("ten"), SelectionReply::NotANumber));
        assert!(matches!(
            *sel.state(),
            SelectionState::AwaitingQuantity { .. }
        ));
        drop(sel);
        assert_eq!(catalog.find("Mouse").unwrap().stock, 10);
        assert!(session.is_empty());
    }

    #[test]
    fn test_oversized_quantity_reprompts_with_availability() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        sel.handle_line("Mouse");
        match sel.handle_line("11") {
            SelectionReply::OutOfRange { name, available } => {
                assert_eq!(name, "Mouse");
                assert_eq!(available, 10);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        // still awaiting a quantity for the same product
        assert!(matches!(
            *sel.state(),
            SelectionState::AwaitingQuantity { .. }
        ));
        // a valid retry goes through
        assert!(matches!(
            sel.handle_line("10"),
            SelectionReply::Committed { .. }
        ));
        drop(sel);
        assert_eq!(catalog.find("Mouse").unwrap().stock, 0);
    }

    #[test]
    fn test_zero_and_negative_quantity_are_out_of_range() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        sel.handle_line("Mouse");
        assert!(matches!(
            sel.handle_line("0"),
            SelectionReply::OutOfRange { .. }
        ));
        assert!(matches!(
            sel.handle_line("-5"),
            SelectionReply::OutOfRange { .. }
        ));
        drop(sel);
        assert_eq!(catalog.find("Mouse").unwrap().stock, 10);
    }

    #[test]
    fn test_sentinel_at_quantity_prompt_is_not_a_number() {
        // 'q' only quits at the product prompt; at the quantity
        // prompt it simply fails to parse.
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel = SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::Banded);

        sel.handle_line("Mouse");
        assert!(matches!(sel.handle_line("q"), SelectionReply::NotANumber));
        assert!(!sel.is_done());
    }

    #[test]
    fn test_bill_recomputed_over_all_lines() {
        let mut catalog = catalog();
        let mut session = Session::new();
        let mut sel =
            SelectionLoop::new(&mut catalog, &mut session, DiscountPolicy::LinearStep);

        sel.handle_line("Keyboard");
        sel.handle_line("45");
        sel.handle_line("Mouse");
        let reply = sel.handle_line("10");
        match reply {
            SelectionReply::Committed { bill, .. } => {
                // 55 cumulative units → one linear step (2%)
                assert_eq!(bill.rate.bps(), 200);
                // gross: 45×$100 + 10×$50 = $5,000.00
                assert_eq!(bill.gross.cents(), 500_000);
            }
            other => panic!("expected Committed, got {other:?}"),
        }
    }
}
