//! Custom cargo commands for quarry.
//!
//! Usage:
//!   cargo xtask check     - cargo check + tests + clippy
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run a fuzz target briefly (needs cargo-fuzz)
//!   cargo xtask corpus    - Write a sample .txt corpus to target/corpus

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref().unwrap_or("snippet_extraction"))?,
        Some("corpus") => corpus()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check           Quick check (cargo check + test + clippy)
  test            Run all Rust tests, with and without the parallel feature
  bench           Run benchmarks
  fuzz [TARGET]   Run a fuzz target for 60 seconds (default: snippet_extraction)
  corpus          Write a sample .txt corpus to target/corpus
"#
    );
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run a fuzz target for a minute
fn fuzz(target: &str) -> Result<()> {
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

/// Write a small nested corpus for trying the CLI by hand.
fn corpus() -> Result<()> {
    const TOPICS: &[(&str, &str)] = &[
        ("animals/cats.txt", "cat"),
        ("animals/dogs.txt", "dog"),
        ("animals/mixed.txt", "cat dog"),
        ("travel/cafes.txt", "café"),
        ("notes/todo.txt", "deadline"),
    ];

    let out = project_root()?.join("target/corpus");
    for (relative, words) in TOPICS {
        let path = out.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, sample_text(words)).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    println!("✓ Wrote {} files to {}", TOPICS.len(), out.display());
    println!("  Try: cargo run -- index {}", out.display());
    Ok(())
}

fn sample_text(words: &str) -> String {
    let mut text = String::new();
    for i in 0..60 {
        if i % 7 == 0 {
            text.push_str(&format!("Line {} talks about {} at some length. ", i, words));
        } else {
            text.push_str(&format!("Line {} is unrelated filler. ", i));
        }
        if i % 10 == 9 {
            text.push('\n');
        }
    }
    text
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
