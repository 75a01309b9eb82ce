#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod repl;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use trivium_kb::{TripleStore, parse_table};
use trivium_nlp::{ExtractionEngine, QueryEngine};

#[derive(Parser)]
#[command(name = "trivium")]
#[command(about = "Fact extraction and question answering over a tiny triple store", long_about = None)]
struct Cli {
    /// Tab-separated fact table (subject, relation, object per row)
    facts: PathBuf,

    /// Free-text passage to extract additional facts from
    passage: PathBuf,

    /// Log at debug level instead of warnings only
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = fs::read_to_string(&cli.facts)
        .with_context(|| format!("reading fact table {}", cli.facts.display()))?;
    let passage = fs::read_to_string(&cli.passage)
        .with_context(|| format!("reading passage {}", cli.passage.display()))?;

    let mut store = TripleStore::new();
    store.extend(parse_table(&table));
    info!("loaded {} facts from the table", store.len());

    let extractor = ExtractionEngine::with_defaults()?;
    store.extend(extractor.ingest(&passage));
    info!("{} facts known after ingesting the passage", store.len());

    let engine = QueryEngine::with_defaults()?;
    repl::run(&store, &engine)?;

    Ok(())
}
