// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quarry::{
    clear_index, index_path, index_stats, search_with_snippets, Config, QueryExecutor,
    SnippetOptions, TantivyStore,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quarry=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.index {
        config.index.dir = dir;
    }

    match cli.command {
        Commands::Index { path } => run_index(&config, &path),
        Commands::Search {
            query,
            limit,
            snippet_length,
            json,
        } => run_search(&config, &query, limit, snippet_length, json),
        Commands::Stats { sample } => run_stats(&config, sample),
        Commands::Clear { yes } => run_clear(&config, yes),
    }
}

fn open_store(config: &Config) -> Result<TantivyStore> {
    TantivyStore::open(&config.index.dir, config.index.writer_heap_bytes)
        .with_context(|| format!("Failed to open index at {}", config.index.dir.display()))
}

fn run_index(config: &Config, path: &Path) -> Result<()> {
    let mut store = open_store(config)?;
    let report = index_path(path, &mut store)?;
    display::print_lines(&display::index_report_lines(&report));
    Ok(())
}

fn run_search(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    snippet_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let store = open_store(config)?;
    let executor = QueryExecutor::new(&store)
        .with_fields(config.search.fields.iter().cloned())
        .with_limit(limit.unwrap_or(config.search.result_limit));

    let mut options =
        SnippetOptions::default().with_max_length(snippet_length.unwrap_or(config.search.snippet_length));
    if !json {
        options = options.with_highlight(display::snippet_highlight());
    }

    let matches = search_with_snippets(&executor, query, options).context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        display::print_lines(&display::search_lines(&matches));
    }
    Ok(())
}

fn run_stats(config: &Config, sample: Option<usize>) -> Result<()> {
    let store = open_store(config)?;
    let stats = index_stats(&store, sample.unwrap_or(config.search.stats_sample_limit))?;
    display::print_lines(&display::stats_lines(&stats, &config.index.dir));
    Ok(())
}

fn run_clear(config: &Config, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to clear the entire index? (y/N): ")? {
        println!("Index clearing cancelled.");
        return Ok(());
    }

    let mut store = open_store(config)?;
    clear_index(&mut store)?;
    println!("Index cleared successfully.");
    Ok(())
}

/// Anything other than `y` (any case) is a no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
