//! `kb-query-match`: check which test queries occur in the knowledge-base
//! query list.
//!
//! Usage:
//!   kb-query-match [--test FILE] [--kb-queries FILE]

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use generics_kb::{init_tracing, match_queries, read_queries, MatchArgs};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = MatchArgs::parse();
    let known = File::open(&args.kb_queries)
        .with_context(|| format!("opening {}", args.kb_queries.display()))?;
    let known = read_queries(BufReader::new(known))?;
    let tests =
        File::open(&args.test).with_context(|| format!("opening {}", args.test.display()))?;

    let matches = match_queries(&known, BufReader::new(tests), io::stdout().lock())?;
    info!(matches, known = known.len(), "query lists compared");
    Ok(())
}
