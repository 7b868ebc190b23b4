// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the induce CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `INDUCE_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! defaults to dark.
//!
//! Colors are only emitted to a TTY and never when `NO_COLOR` is set. Plain
//! results on stdout are never styled; styling is for `inspect` boxes and
//! log lines on stderr.
//!
//! # Theme detection order
//!
//! 1. `INDUCE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// COLORFGBG is "fg;bg"; background 7 or 9..=15 is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("INDUCE_THEME").ok().and_then(|t| parse_theme(&t)) {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
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

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
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
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Which stream a styled string is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Check if colors should be used on `target` (TTY detection)
pub fn use_colors(target: Target) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match target {
        Target::Stdout => atty::is(atty::Stream::Stdout),
        Target::Stderr => atty::is(atty::Stream::Stderr),
    }
}

/// Apply theme color with optional modifiers, for stdout
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    themed_for(Target::Stdout, color_fn, modifiers, text)
}

/// Apply theme color with optional modifiers, for a given stream
pub fn themed_for(
    target: Target,
    color_fn: fn() -> String,
    modifiers: &[&str],
    text: &str,
) -> String {
    if use_colors(target) {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors(Target::Stdout) {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
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
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{reset}{}{}{b}│{reset}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{reset}{}{b}{}┐{reset}", label_part, "─".repeat(remaining));
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{reset}{}{b}{}┤{reset}", label_part, "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// Print a boxed, centered title
pub fn title(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!("{b}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
    println!(
        "{b}║{reset}{}{}{}{b}║{reset}",
        " ".repeat(left_pad),
        colored,
        " ".repeat(total_pad - left_pad)
    );
    println!("{b}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Green ✓ or red ✗ with a label
pub fn check_mark(ok: bool, label: &str) -> String {
    if ok {
        themed(GREEN, &[BOLD], &format!("✓ {}", label))
    } else {
        themed(RED, &[BOLD], &format!("✗ {}", label))
    }
}

/// Colored level badge: L0, L1, ... cycling through the palette
pub fn level_badge(depth: usize) -> String {
    let color: fn() -> String = match depth % 4 {
        0 => GREEN,
        1 => BLUE,
        2 => MAGENTA,
        _ => YELLOW,
    };
    themed(color, &[BOLD], &format!("L{}", depth))
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Printable preview of raw bytes, escaped and cut to `max_len` characters.
pub fn preview(bytes: &[u8], max_len: usize) -> String {
    let escaped: String = bytes.escape_ascii().to_string();
    if escaped.chars().count() <= max_len {
        escaped
    } else {
        let cut: String = escaped.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
