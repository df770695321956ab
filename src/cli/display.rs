// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the minidex CLI.
//!
//! Result lines, suggestion lists and the stats box. Colors follow the
//! terminal: OneDark for dark backgrounds, One Light for light ones. Detection
//! tries `MINIDEX_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then defaults to dark.
//!
//! Every `format_*` function takes a `colored` flag instead of asking the
//! terminal itself, so the interactive menu can render plain text into any
//! writer. `use_colors()` decides the flag for real stdout: `NO_COLOR` wins,
//! then TTY detection.
//!
//! # Theme detection order
//!
//! 1. `MINIDEX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use minidex::{IndexStats, Posting};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Parse an explicit theme name.
fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret `COLORFGBG` ("fg;bg"): background colors 7+ (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("MINIDEX_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
    {
        return theme;
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

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
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap text in a theme color when `colored` is set
pub fn paint(colored: bool, color_fn: fn() -> String, text: &str) -> String {
    if colored {
        format!("{}{}{}", color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Exact-lookup results, one document per line.
///
/// `query` is shown as given; callers pass the normalized form.
pub fn format_hits(query: &str, hits: &[Posting], colored: bool) -> String {
    if hits.is_empty() {
        return format!(
            "{} \"{}\"\n",
            paint(colored, RED, "No results found for"),
            query
        );
    }

    let mut out = format!("Results for \"{}\":\n", paint(colored, CYAN, query));
    for hit in hits {
        out.push_str(&format!(
            " - {} (frequency: {})\n",
            paint(colored, BLUE, &hit.doc_id),
            paint(colored, YELLOW, &hit.count.to_string())
        ));
    }
    out
}

/// Autocomplete results on a single line, each term followed by a space.
pub fn format_suggestions(prefix: &str, terms: &[String], colored: bool) -> String {
    if terms.is_empty() {
        return format!(
            "{} \"{}\"\n",
            paint(colored, RED, "No suggestions for"),
            prefix
        );
    }

    let mut out = String::from("Suggestions: ");
    for term in terms {
        out.push_str(&paint(colored, GREEN, term));
        out.push(' ');
    }
    out.push('\n');
    out
}

/// Index statistics inside a box.
pub fn format_stats(stats: &IndexStats, colored: bool) -> String {
    let rows = [
        ("Documents", stats.documents),
        ("Terms", stats.terms),
        ("Postings", stats.postings),
        ("Tokens", stats.tokens),
        ("Trie nodes", stats.trie_nodes),
    ];

    let border = |s: &str| paint(colored, GRAY, s);
    let label = if colored {
        format!("{}{}{}", BOLD, paint(true, CYAN, "INDEX"), RESET)
    } else {
        "INDEX".to_string()
    };
    let label_part = format!("─ {} ", label);

    let mut out = format!(
        "{}{}{}\n",
        border("┌"),
        label_part,
        border(&format!(
            "{}┐",
            "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label_part)))
        ))
    );
    for (name, value) in rows {
        let content = format!(
            "  {:<12}{}",
            name,
            paint(colored, YELLOW, &value.to_string())
        );
        let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
        out.push_str(&format!(
            "{}{}{}{}\n",
            border("│"),
            content,
            " ".repeat(pad),
            border("│")
        ));
    }
    out.push_str(&border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
    out.push('\n');
    out
}
