// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the minidex command-line interface.
//!
//! Four subcommands over one in-memory engine: `search` for exact lookup,
//! `complete` for autocomplete, `stats` for index sizes, and `repl` for the
//! interactive menu (the default when no subcommand is given). Documents come
//! from `--input`, or the built-in demo documents when it is omitted.

pub mod display;
pub mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "minidex",
    about = "In-memory term search and prefix autocomplete",
    version
)]
pub struct Cli {
    /// Documents to index: a JSON array file, a directory of .txt files
    /// (or one with manifest.json), or a single text file.
    /// Defaults to the built-in demo documents.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find documents containing a term, ranked by frequency
    Search {
        /// Term to look up (normalized before lookup)
        query: String,

        /// Maximum number of documents to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List indexed terms starting with a prefix
    Complete {
        /// Prefix to complete; empty lists the whole vocabulary
        #[arg(default_value = "")]
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search / autocomplete menu
    Repl,
}
