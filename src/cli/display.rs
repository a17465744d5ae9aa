// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the scour CLI.
//!
//! Colours are only emitted when stdout is a TTY and `NO_COLOR` is unset.
//! Without them highlights fall back to `[brackets]`, so piped output still
//! shows what matched. `SCOUR_THEME=light|dark` picks the palette; otherwise a
//! light `COLORFGBG` background selects One Light and anything else OneDark.

use std::sync::OnceLock;

use scour::{render, SearchResult, Segment, StatusHint};

/// Inner width of a box, between the two `│`.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// What a piece of text is, which decides how it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Match,
    Good,
    Fair,
    Muted,
    Tag,
    Link,
}

type Rgb = (u8, u8, u8);

#[derive(Debug, PartialEq)]
struct Palette {
    heading: Rgb,
    matched: Rgb,
    good: Rgb,
    fair: Rgb,
    muted: Rgb,
    tag: Rgb,
    link: Rgb,
}

// OneDark
const DARK: Palette = Palette {
    heading: (86, 182, 194),
    matched: (255, 215, 0),
    good: (152, 195, 121),
    fair: (229, 192, 123),
    muted: (92, 99, 112),
    tag: (198, 120, 221),
    link: (97, 175, 239),
};

// One Light
const LIGHT: Palette = Palette {
    heading: (1, 132, 188),
    matched: (152, 104, 1),
    good: (80, 161, 79),
    fair: (193, 132, 1),
    muted: (160, 161, 167),
    tag: (166, 38, 164),
    link: (64, 120, 242),
};

fn palette() -> &'static Palette {
    static LIGHT_BACKGROUND: OnceLock<bool> = OnceLock::new();
    if *LIGHT_BACKGROUND.get_or_init(prefers_light) {
        &LIGHT
    } else {
        &DARK
    }
}

fn prefers_light() -> bool {
    match std::env::var("SCOUR_THEME")
        .map(|t| t.to_ascii_lowercase())
        .as_deref()
    {
        Ok("light" | "l") => return true,
        Ok("dark" | "d") => return false,
        _ => {}
    }
    // COLORFGBG is "fg;bg"; backgrounds 7 and up, except 8, are light
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

impl Role {
    fn escape(self) -> String {
        let p = palette();
        let ((r, g, b), lead) = match self {
            Role::Heading => (p.heading, BOLD),
            Role::Match => (p.matched, BOLD),
            Role::Good => (p.good, ""),
            Role::Fair => (p.fair, ""),
            Role::Muted => (p.muted, ""),
            Role::Tag => (p.tag, ""),
            Role::Link => (p.link, DIM),
        };
        format!("{lead}\x1b[38;2;{r};{g};{b}m")
    }
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", role.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printed width of `s`, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip through the terminating `m`
            let _ = chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// `┌─ LABEL ───┐`
pub fn box_top(label: &str) {
    let title = format!("{} {} ", paint(Role::Muted, "─"), paint(Role::Heading, label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title)));
    println!(
        "{}{}{}",
        paint(Role::Muted, "┌"),
        title,
        paint(Role::Muted, &format!("{}┐", rule))
    );
}

/// `│ content   │`
pub fn box_row(content: &str) {
    let side = paint(Role::Muted, "│");
    println!("{}{}{}", side, pad_right(content, BOX_WIDTH), side);
}

/// `└───────────┘`
pub fn box_bottom() {
    println!("{}", paint(Role::Muted, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Join highlight segments, coloured or bracketed.
pub fn highlighted(segments: &[Segment], colors: bool) -> String {
    if colors {
        render(segments, &Role::Match.escape(), RESET)
    } else {
        render(segments, "[", "]")
    }
}

/// Lower is better.
pub fn score_value(score: f64) -> String {
    let role = if score < 0.1 {
        Role::Good
    } else if score < 0.3 {
        Role::Fair
    } else {
        Role::Muted
    };
    paint(role, &format!("{:.4}", score))
}

/// `2024-01-15 · 3 min · #rust #tutorial`, updated date first when present.
pub fn meta_line(result: &SearchResult) -> String {
    let record = &result.record;
    let date = record.display_date().format("%Y-%m-%d").to_string();
    let date = if record.is_updated() {
        format!("updated {}", date)
    } else {
        date
    };
    let mut parts = vec![
        paint(Role::Muted, &date),
        paint(Role::Muted, &format!("{} min", record.metadata.reading_time)),
    ];
    let tags: Vec<String> = record
        .top_tags(3)
        .iter()
        .map(|t| paint(Role::Tag, &format!("#{}", t)))
        .collect();
    if !tags.is_empty() {
        parts.push(tags.join(" "));
    }
    parts.join(&paint(Role::Muted, " · "))
}

/// The hint line under the palette's search box.
pub fn status_text(hint: StatusHint) -> String {
    match hint {
        StatusHint::Starting => "Searching...".to_string(),
        StatusHint::TypeToSearch => "Type to search posts".to_string(),
        StatusHint::MinChars => "Type at least 3 characters".to_string(),
        StatusHint::NoResults => "No posts found".to_string(),
        StatusHint::Results(1) => "1 result".to_string(),
        StatusHint::Results(n) => format!("{} results", n),
    }
}

pub fn route_text(path: &str) -> String {
    paint(Role::Link, path)
}
