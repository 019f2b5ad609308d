// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kural command-line interface.
//!
//! Two subcommands: `search` resolves one query (a couplet number or free
//! text in either language) against a corpus CSV, and `inspect` prints
//! corpus and index statistics. The corpus is loaded and indexed fresh on
//! every invocation - the index is never persisted.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kural",
    about = "Bilingual TF-IDF retrieval for the Thirukkural couplets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a query (couplet number or free text) to its best couplet
    Search {
        /// Path to the five-column corpus CSV
        #[arg(short, long)]
        data: String,

        /// A couplet number ("42") or free text in English or Tamil
        query: String,

        /// Emit the resolved record as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Print the detected language and normalized query to stderr
        #[arg(long)]
        show_normalized: bool,
    },

    /// Print corpus and index statistics
    Inspect {
        /// Path to the five-column corpus CSV
        #[arg(short, long)]
        data: String,
    },
}
