//! # Tally
//!
//! Entry point for the `tally` terminal binary.

use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use tally_terminal::cli::Cli;
use tally_terminal::config::{resolve_output, OutputFormat, PriceList, OUTPUT_ENV};
use tally_terminal::{init_tracing, input, price_items, report};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = resolve_output(cli.json, std::env::var(OUTPUT_ENV).ok().as_deref())
        .context("Invalid output format")?;

    let registry = PriceList::load(cli.pricing.clone())
        .and_then(PriceList::into_registry)
        .context("Failed to load price list")?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if cli.list_prices {
        write!(stdout, "{}", report::render_price_list(&registry))?;
        return Ok(());
    }

    let items = input::collect_items(&cli.items, &mut io::stdin().lock(), &mut stdout)
        .context("Failed to read scanned items")?;
    if cli.items.is_empty() && !io::stdin().is_terminal() {
        // piped input is not echoed, so the prompt line is still open
        writeln!(stdout)?;
    }

    let receipt = price_items(&registry, &items).context("Failed to price basket")?;

    match output {
        OutputFormat::Text => write!(stdout, "{}", report::render_text(&receipt))?,
        OutputFormat::Json => writeln!(stdout, "{}", report::render_json(&receipt)?)?,
    }

    Ok(())
}
