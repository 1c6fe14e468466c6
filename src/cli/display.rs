// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the quarry CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `QUARRY_THEME` first, then `COLORFGBG`, then falls back to dark. Colors
//! are dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so
//! piped output is plain text.
//!
//! Everything here builds lines as strings and the `print_*` functions only
//! write them out; tests check the strings.

use std::path::Path;
use std::sync::OnceLock;

use quarry::build::IndexReport;
use quarry::snippet::Highlight;
use quarry::types::{IndexStats, SearchMatch};

/// Width of the rule lines between results.
pub const RULE_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("QUARRY_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", bg of 7 or above (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Markers used to highlight query terms in snippets.
///
/// Bold bright yellow on a color terminal, the default `**` markers otherwise.
pub fn snippet_highlight() -> Highlight {
    if use_colors() {
        Highlight::new(format!("{}{}", BOLD, BRIGHT_YELLOW()), RESET)
    } else {
        Highlight::default()
    }
}

fn rule(ch: char) -> String {
    themed(GRAY, &[], &ch.to_string().repeat(RULE_WIDTH))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score with two decimals, colored by magnitude.
pub fn score_value(score: f32) -> String {
    let text = format!("{:.2}", score);
    if score >= 5.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 1.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Lines for a search result list.
pub fn search_lines(matches: &[SearchMatch]) -> Vec<String> {
    if matches.is_empty() {
        return vec!["No results found.".to_string()];
    }

    let mut lines = vec![
        String::new(),
        format!("Found {} result(s):", matches.len()),
        String::new(),
        rule('='),
    ];

    for m in matches {
        let doc = &m.hit.document;
        lines.push(themed(CYAN, &[BOLD], &format!("Result {}:", m.rank)));
        lines.push(format!("File: {}", doc.filename));
        lines.push(format!("Path: {}", themed(GRAY, &[], &doc.path)));
        lines.push(format!("Score: {}", score_value(m.hit.score)));
        lines.push(format!("Found {} occurrence(s) in this file:", m.snippets.len()));
        for (j, snippet) in m.snippets.iter().enumerate() {
            lines.push(format!("  Occurrence {}: {}", j + 1, snippet.text));
        }
        lines.push(rule('-'));
    }
    lines
}

/// Lines for the index statistics view.
pub fn stats_lines(stats: &IndexStats, index_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        themed(CYAN, &[BOLD], "=== Index Statistics ==="),
        format!("Total indexed documents: {}", stats.document_count),
        format!("Total deleted documents: {}", stats.deleted_document_count),
        format!("Index directory: {}", index_dir.display()),
    ];

    if !stats.sample.is_empty() {
        lines.push(String::new());
        lines.push("Sample documents:".to_string());
        for doc in &stats.sample {
            lines.push(format!("- {} ({})", doc.filename, themed(GRAY, &[], &doc.path)));
        }
    }
    lines
}

/// Lines summarizing an indexing run.
pub fn index_report_lines(report: &IndexReport) -> Vec<String> {
    if report.found == 0 {
        return vec!["No .txt files found.".to_string()];
    }

    let mut lines = vec![format!("Found {} text file(s).", report.found)];
    for failure in &report.failures {
        lines.push(themed(
            RED,
            &[],
            &format!("Error indexing {}: {}", failure.path.display(), failure.reason),
        ));
    }
    lines.push(String::new());
    lines.push(themed(
        GREEN,
        &[BOLD],
        &format!("Successfully indexed {} file(s).", report.indexed),
    ));
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
