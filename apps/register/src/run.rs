//! # Session Runner
//!
//! Drives one store session (and later the checkout finalization)
//! over a [`Console`]. This is the only code that knows both what the
//! selection machine replied and what the shopper should see next.

use std::io::{self, Write};

use tracing::{debug, info};

use tally_core::{
    Currency, Fulfillment, Money, SelectionLoop, SelectionReply, SelectionState, Session,
};

use crate::console::{Console, LineSource};
use crate::display;
use crate::store::Store;

/// Runs one full store session: greet, display, loop until quit.
///
/// Returns the session with every committed line. A drained line
/// source (EOF) ends the session like the sentinel would.
pub fn run_store<R: LineSource, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
    catalog: &mut tally_core::Catalog,
) -> io::Result<Session> {
    info!(store = store.name, "store session opened");

    console.say("")?;
    console.say(store.greeting)?;
    console.say(&display::catalog_table(catalog))?;

    let mut session = Session::new();
    let mut selection = SelectionLoop::new(catalog, &mut session, store.policy);

    loop {
        match selection.state().clone() {
            SelectionState::AwaitingProduct => {
                let Some(line) = console.prompt("Choose a product, or press 'q' to quit: ")?
                else {
                    debug!(store = store.name, "input exhausted, treating as quit");
                    break;
                };
                match selection.handle_line(&line) {
                    SelectionReply::Quit { lines_committed } => {
                        debug!(store = store.name, lines_committed, "quit signal received");
                        break;
                    }
                    SelectionReply::UnknownProduct { input } => {
                        console.say("")?;
                        console.say(&display::warning(&format!(
                            "You entered an invalid product: [{input}]"
                        )))?;
                        console.say("The available products are:")?;
                        console.say(&display::catalog_table(selection.catalog()))?;
                    }
                    SelectionReply::ProductChosen { name } => {
                        console.say(&format!("\nYou chose => [ {name} ]\n"))?;
                    }
                    _ => {}
                }
            }
            SelectionState::AwaitingQuantity { .. } => {
                let Some(line) = console.prompt("Please enter the required quantity: ")? else {
                    debug!(store = store.name, "input exhausted, treating as quit");
                    break;
                };
                match selection.handle_line(&line) {
                    SelectionReply::NotANumber => {
                        console.say("")?;
                        console.say(&display::warning("Please enter a number"))?;
                    }
                    SelectionReply::OutOfRange { name, available } => {
                        console.say("")?;
                        console.say(&display::warning(&format!(
                            "The available quantity for [{name}] => {available}"
                        )))?;
                    }
                    SelectionReply::Committed { line, bill } => {
                        debug!(
                            store = store.name,
                            product = %line.product_name,
                            quantity = line.quantity,
                            net_cents = bill.net.cents(),
                            "line committed"
                        );
                        console.say(&format!(
                            "\nYou chose => [ {} ], with quantity => [ {} ]\n",
                            line.product_name, line.quantity
                        ))?;
                        console.say(&display::bill_block(&bill))?;
                    }
                    _ => {}
                }
            }
            SelectionState::Done => break,
        }
    }
    drop(selection);

    let bill = session.bill(store.policy);
    info!(
        store = store.name,
        lines = session.line_count(),
        total_quantity = session.total_quantity(),
        net_cents = bill.net.cents(),
        "store session closed"
    );
    console.say("\nYour bill:")?;
    console.say(&display::bill_block(&bill))?;

    Ok(session)
}

/// Finalizes the combined total: fulfillment surcharge, then currency
/// conversion. Both steps accept any input — unrecognized choices
/// fall back (no charge / USD) with a notice, and neither re-prompts.
pub fn finalize<R: LineSource, W: Write>(
    console: &mut Console<R, W>,
    total: Money,
) -> io::Result<Money> {
    let choice = console
        .prompt("Press 'D' for delivery, or 'P' for pick-up: ")?
        .unwrap_or_default();
    let fulfillment = Fulfillment::parse(&choice);
    let with_surcharge = fulfillment.apply(total);

    match fulfillment {
        Fulfillment::Delivery => {
            console.say(&format!(
                "\nYou chose the delivery option, so {} will be added to your bill.",
                fulfillment.surcharge()
            ))?;
            console.say(&format!(
                "The bill amount after discount and delivery = {with_surcharge}\n"
            ))?;
        }
        Fulfillment::PickUp => {
            console.say(&format!(
                "\nYou chose the pick-up option, so {} will be added to your bill.",
                fulfillment.surcharge()
            ))?;
            console.say(&format!(
                "The bill amount after discount and pick-up = {with_surcharge}\n"
            ))?;
        }
        Fulfillment::Declined => {
            console.say("\nYou did not choose either delivery or pick-up.")?;
            console.say(&format!(
                "The bill amount after discount = {with_surcharge}\n"
            ))?;
        }
    }
    info!(
        ?fulfillment,
        total_cents = with_surcharge.cents(),
        "fulfillment surcharge applied"
    );

    let code = console
        .prompt("Choose a currency from [USD, EUR, EGP]: ")?
        .unwrap_or_default();
    let currency = Currency::parse(&code);
    let converted = currency.convert(with_surcharge);

    console.say(&format!(
        "\nThe total bill amount in {} = {}.{:02}",
        currency,
        converted.dollars(),
        converted.cents_part()
    ))?;
    console.say("Your order is on the way")?;
    info!(
        currency = %currency,
        total_cents = converted.cents(),
        "currency conversion applied"
    );

    Ok(converted)
}
