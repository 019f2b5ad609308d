// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `kural` binary: thin serving glue around the retrieval engine.
//!
//! Startup is a one-time blocking phase - load the CSV, build the index -
//! and if any of it fails the process exits nonzero before answering
//! anything. Query resolution itself never fails except for out-of-range
//! couplet numbers, which render as a user-visible message.

use clap::Parser;
use kural::{detect_language, normalize, Engine};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            data,
            query,
            json,
            show_normalized,
        } => run_search(&data, &query, json, show_normalized),
        Commands::Inspect { data } => run_inspect(&data),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Load the corpus and build the engine, logging the startup phases.
fn load_engine(data: &str) -> Result<Engine, String> {
    eprintln!("Loading corpus from {}...", data);
    let engine = Engine::from_csv_path(data).map_err(|e| e.to_string())?;
    eprintln!(
        "Indexed {} couplets │ {} vocabulary terms",
        engine.corpus().len(),
        engine.index().vocabulary_len()
    );
    Ok(engine)
}

fn run_search(data: &str, query: &str, json: bool, show_normalized: bool) -> Result<(), String> {
    let engine = load_engine(data)?;

    if show_normalized {
        let lang = detect_language(query);
        eprintln!(
            "Query detected as {:?}, normalized to {:?}",
            lang,
            normalize(query, lang)
        );
    }

    let record = engine.resolve(query).map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(record).map_err(|e| e.to_string())?;
        println!("{}", rendered);
    } else {
        println!("{}", display::render_record(record));
    }
    Ok(())
}

fn run_inspect(data: &str) -> Result<(), String> {
    let engine = load_engine(data)?;
    let index = engine.index();

    println!("Corpus");
    println!("  records            {}", engine.corpus().len());
    println!("Index");
    println!("  vocabulary terms   {}", index.vocabulary_len());
    println!("  document rows      {}", index.doc_count());
    println!("  empty documents    {}", index.empty_row_count());
    Ok(())
}
