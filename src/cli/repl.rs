// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive menu: search, autocomplete, exit.
//!
//! Reads one line per answer. End of input behaves like choosing "Exit", so the
//! loop can be driven from a pipe as well as a terminal.

use std::io::{self, BufRead, Write};

use minidex::{normalize, Engine};

use super::display::{format_hits, format_suggestions};

const MENU: &str = "\n1. Search\n2. Autocomplete\n3. Exit\n> ";

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    engine: &Engine,
    mut input: R,
    out: &mut W,
    colored: bool,
) -> io::Result<()> {
    writeln!(out, "=== Mini Search Engine ===")?;

    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            writeln!(out, "Goodbye!")?;
            return Ok(());
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                let query = prompt(&mut input, out, "Enter word: ")?;
                let hits = engine.search_exact(&query);
                write!(out, "{}", format_hits(&normalize(&query), &hits, colored))?;
            }
            Ok(2) => {
                let prefix = prompt(&mut input, out, "Enter prefix: ")?;
                let terms = engine.autocomplete(&prefix);
                write!(
                    out,
                    "{}",
                    format_suggestions(&normalize(&prefix), &terms, colored)
                )?;
            }
            Ok(3) => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Print a prompt and read the answer. Missing input reads as an empty answer.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
