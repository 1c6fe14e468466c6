// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quarry command-line interface.
//!
//! Four subcommands over one index directory: `index` adds `.txt` files,
//! `search` queries them with every-occurrence snippets, `stats` shows what
//! the index holds and `clear` empties it.

pub mod display;

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quarry",
    about = "Index plain-text files and search them with every-occurrence snippets",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./quarry.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Index directory, overriding the config file
    #[arg(long, global = true, env = "QUARRY_INDEX_DIR")]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a .txt file or every .txt file under a directory
    Index {
        /// File or directory to index
        path: PathBuf,
    },

    /// Search the index
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Maximum snippet length in characters
        #[arg(short = 's', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        snippet_length: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document counts and a sample of indexed files
    Stats {
        /// Number of sample documents to list
        #[arg(long)]
        sample: Option<usize>,
    },

    /// Delete every document from the index
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
