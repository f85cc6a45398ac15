//! `generics-kb-avl`: load a knowledge base and answer term queries.
//!
//! Usage:
//!   generics-kb-avl [--kb FILE] [--queries FILE] [--output FILE]
//!                   [--metrics text|json] [--strict | --no-strict]
//!                   [--config FILE]
//!
//! Query results go to the output file; tree metrics go to stdout.

use anyhow::Context;
use clap::Parser;
use generics_kb::{init_tracing, render_metrics, run, AppArgs};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = AppArgs::parse();
    let config = args.resolve().context("loading settings")?;
    let summary = run(&config)?;
    println!("{}", render_metrics(&summary.metrics, config.metrics)?);
    Ok(())
}
