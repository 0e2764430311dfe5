//! # Display Helpers
//!
//! Rendering for the register: the catalog grid, the bill block, and
//! the warning notices. Pure string builders; the console decides
//! where they go.

use colored::Colorize;
use comfy_table::Table;
use tally_core::{Bill, Catalog};

/// Renders the catalog as a Name / Price / QTY grid.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Price", "QTY"]);
    for product in catalog.products() {
        table.add_row(vec![
            product.name.clone(),
            product.price().to_string(),
            product.stock.to_string(),
        ]);
    }
    table.to_string()
}

/// The three bill figures, presented after every committed line and
/// once more when a session closes.
pub fn bill_block(bill: &Bill) -> String {
    format!(
        "The bill amount = {}\nYou have a discount = {}%\nThe bill amount after discount = {}",
        bill.gross,
        bill.rate.percentage(),
        bill.net
    )
}

/// A tinted warning notice for recoverable input problems.
pub fn warning(text: &str) -> String {
    format!("⚠  {text}  ⚠").yellow().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
