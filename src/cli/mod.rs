// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scour command-line interface.
//!
//! Three subcommands: `search` to run one query against a posts file,
//! `inspect` to see what the per-locale indexes hold, and `palette` to drive
//! the command palette from stdin, one line per keystroke batch.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use scour::{Event, Key, KeyPress};

#[derive(Parser)]
#[command(name = "scour", about = "Fuzzy search over a blog's posts", version)]
pub struct Cli {
    /// JSON config file overriding search and palette defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a posts file and display ranked, highlighted results
    Search {
        /// Path to the posts JSON array
        file: PathBuf,

        /// Search query (extended syntax: =exact 'include !not ^prefix suffix$ a | b)
        query: String,

        /// Language of the posts to search
        #[arg(long, default_value = "en")]
        locale: String,

        /// Maximum number of results (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Drop results whose score is not below this value
        #[arg(long)]
        cutoff: Option<f64>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show per-locale index statistics
    Inspect {
        /// Path to the posts JSON array
        file: PathBuf,

        /// Only inspect this language
        #[arg(long)]
        locale: Option<String>,
    },

    /// Drive the command palette from stdin
    ///
    /// Each line is typed into the search box, except for commands:
    /// `:down`, `:up`, `:enter`, `:esc`, `:open` and `:locale <code>`.
    /// Debounce timers fire immediately.
    Palette {
        /// Path to the posts JSON array
        file: PathBuf,

        /// Language to start in
        #[arg(long, default_value = "en")]
        locale: String,
    },
}

/// One parsed palette input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteInput {
    Event(Event),
    SwitchLocale(String),
}

/// Parse one line of palette input.
pub fn parse_palette_line(line: &str) -> PaletteInput {
    let key = |k| PaletteInput::Event(Event::Key(KeyPress::new(k)));
    match line.trim() {
        ":down" => key(Key::ArrowDown),
        ":up" => key(Key::ArrowUp),
        ":enter" => key(Key::Enter),
        ":esc" => key(Key::Escape),
        ":open" => PaletteInput::Event(Event::Key(KeyPress::new(Key::Char('k')).ctrl())),
        cmd if cmd.starts_with(":locale ") => {
            PaletteInput::SwitchLocale(cmd[":locale ".len()..].trim().to_string())
        }
        _ => PaletteInput::Event(Event::QueryChanged(line.to_string())),
    }
}
