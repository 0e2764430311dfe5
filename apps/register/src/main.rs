use std::io;

use tracing_subscriber::EnvFilter;

use tally_register::console::{Console, StdinSource};
use tally_register::run;
use tally_register::store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let mut console = Console::new(StdinSource::new(), io::stdout());

    let mut electronics = store::electronics_catalog()?;
    let mut stationery = store::stationery_catalog()?;

    let devices_session = run::run_store(&mut console, &store::ELECTRONICS, &mut electronics)?;
    let devices_bill = devices_session.bill(store::ELECTRONICS.policy);

    let stationery_session = run::run_store(&mut console, &store::STATIONERY, &mut stationery)?;
    let stationery_bill = stationery_session.bill(store::STATIONERY.policy);

    let combined = devices_bill.net + stationery_bill.net;
    console.say(&format!(
        "\nThe total bill amount of [devices & stationery] products after discount = {combined}\n"
    ))?;

    run::finalize(&mut console, combined)?;

    Ok(())
}
