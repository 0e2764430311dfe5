//! # Tally Register
//!
//! Terminal register for the Tally POS. Everything stateful lives in
//! `tally-core`; this crate only reads lines, renders tables, and
//! narrates what the core decided.
//!
//! ```text
//!   ┌──────────┐   lines    ┌───────────────┐   replies   ┌─────────┐
//!   │ Console  │ ─────────► │ SelectionLoop │ ──────────► │ display │
//!   │ (stdin)  │            │ (tally-core)  │             │ (stdout)│
//!   └──────────┘            └───────────────┘             └─────────┘
//! ```

pub mod console;
pub mod display;
pub mod run;
pub mod store;
