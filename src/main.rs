mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use billing_date::{BillingDateCalculator, BillingDates, Month};
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Request};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let last_month = if cli.through_december {
        Month::DECEMBER
    } else {
        Month::LAST_BILLED
    };

    for request in cli.requests() {
        let dates = compute(request, last_month)
            .with_context(|| format!("cannot compute billing dates for {request}"))?;
        info!(%request, count = dates.len(), "computed billing dates");

        if cli.json {
            println!("{}", serde_json::to_string(&dates)?);
        } else {
            println!("{dates}");
        }
    }
    Ok(())
}

fn compute(request: Request, last_month: Month) -> Result<BillingDates> {
    let dates = BillingDateCalculator::new(request.first_day, request.second_day)?
        .through_month(last_month)
        .compute(request.year)?;
    Ok(dates)
}
