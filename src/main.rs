use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use minidex::{load_documents, seed_documents, Engine, QueryResults};

mod cli;
use cli::{display, repl, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = build_engine(cli.input.as_deref())?;
    let colored = display::use_colors();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Search { query, limit, json } => {
            let mut hits = engine.search_exact(&query);
            if let Some(limit) = limit {
                hits.truncate(limit);
            }
            if json {
                print_json(&QueryResults::Exact(hits))?;
            } else {
                print!(
                    "{}",
                    display::format_hits(&minidex::normalize(&query), &hits, colored)
                );
            }
        }
        Commands::Complete {
            prefix,
            limit,
            json,
        } => {
            let terms = match limit {
                Some(limit) => engine.suggest(&prefix, limit),
                None => engine.autocomplete(&prefix),
            };
            if json {
                print_json(&QueryResults::Prefix(terms))?;
            } else {
                print!(
                    "{}",
                    display::format_suggestions(&minidex::normalize(&prefix), &terms, colored)
                );
            }
        }
        Commands::Stats { json } => {
            let stats = engine.stats();
            if json {
                print_json(&stats)?;
            } else {
                print!("{}", display::format_stats(&stats, colored));
            }
        }
        Commands::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run(&engine, stdin.lock(), &mut stdout, colored)
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}

/// Ingest `--input` documents, or the demo documents when no input is given.
fn build_engine(input: Option<&Path>) -> Result<Engine> {
    let Some(path) = input else {
        return Ok(Engine::from_documents(&seed_documents()));
    };

    let documents = load_documents(path)
        .with_context(|| format!("Failed to load documents from {}", path.display()))?;

    if documents.is_empty() {
        eprintln!("⚠️  No documents found in {}", path.display());
    } else {
        eprintln!("  ✓ {} documents from {}", documents.len(), path.display());
    }

    Ok(Engine::from_documents(&documents))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
