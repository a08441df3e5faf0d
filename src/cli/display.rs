//! Terminal display helpers for the `lexirank` CLI.
//!
//! Grounded on the teacher's `cli::display` box-drawing conventions
//! (`row`/`section_top`/`section_bot`, `use_colors` via `NO_COLOR` + `atty`),
//! trimmed to plain ANSI (no OneDark/One Light theme detection — this
//! program has no persistent color preference to detect) plus an
//! `indicatif` progress bar for long-running stages, per §A2.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const BOX_WIDTH: usize = 64;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    #[allow(dead_code)]
    pub const GRAY: &str = "\x1b[90m";
}
use colors::*;

/// Whether stdout is a color-capable terminal; respects `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply ANSI styles to `text` only when writing to a color-capable terminal.
pub fn styled(style: &str, text: &str) -> String {
    if use_colors() {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// A progress bar for a stage with a known item count; a no-op spinner-free
/// bar when stdout isn't a terminal, since indicatif already detects that.
pub fn progress_bar(len: u64, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{prefix:.bold} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar.set_prefix(label.to_string());
    bar
}

/// A ticking spinner for a stage whose total item count isn't known up
/// front (e.g. crawl, which discovers URLs as it runs). Auto-advances on
/// a background tick rather than requiring manual `inc` calls.
pub fn spinner(label: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {prefix:.bold} {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_prefix(label.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Print a boxed top border with a centered label: `┌─ LABEL ─...─┐`.
pub fn section_top(label: &str) {
    let colored = styled(BOLD, label);
    let label_part = format!("─ {colored} ");
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("┌{label_part}{}┐", "─".repeat(remaining));
}

/// Print a single content row inside the box: `│ content ... │`.
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("│{content}{}│", " ".repeat(pad));
}

/// Print the box's bottom border.
pub fn section_bot() {
    println!("└{}┘", "─".repeat(BOX_WIDTH));
}

/// Visible length of `s`, excluding ANSI escape sequences.
fn visible_len(s: &str) -> usize {
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

/// Color a stage's pass/fail summary line.
pub fn stage_status(stage: &str, ok: bool, detail: &str) -> String {
    let badge = if ok {
        styled(GREEN, "ok")
    } else {
        styled(RED, "skipped")
    };
    format!("{stage}: {badge} ({detail})")
}
