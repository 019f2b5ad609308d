// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for resolved couplets.
//!
//! Box-drawn output with a handful of ANSI accents. Colors are dropped when
//! `NO_COLOR` is set or when `TERM` is "dumb", so piped output stays clean.

use kural::KuralRecord;
use std::sync::OnceLock;

/// Width between the border characters (excluding the borders themselves).
pub const BOX_WIDTH: usize = 72;

/// Cached color-support detection.
static COLOR: OnceLock<bool> = OnceLock::new();

fn color_enabled() -> bool {
    *COLOR.get_or_init(|| {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
    })
}

fn paint(code: &str, text: &str) -> String {
    if color_enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

fn bold(text: &str) -> String {
    paint("1", text)
}

fn dim(text: &str) -> String {
    paint("2", text)
}

fn cyan(text: &str) -> String {
    paint("36", text)
}

/// Greedy word wrap on character count.
///
/// Character count is an approximation of display width (Tamil combining
/// signs render at zero width), so wrapped lines may come up slightly short.
/// Close enough for a terminal box.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn section(out: &mut String, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(&format!("│ {}\n", dim(label)));
    for line in wrap(text, BOX_WIDTH - 2) {
        out.push_str(&format!("│   {}\n", line));
    }
}

/// Render one resolved couplet as a box-drawn block.
pub fn render_record(record: &KuralRecord) -> String {
    let title = format!(" Kural {} ", record.number);
    let rule_len = BOX_WIDTH.saturating_sub(title.chars().count() + 2);

    let mut out = String::new();
    out.push_str(&format!(
        "╭─{}{}╮\n",
        cyan(&bold(&title)),
        "─".repeat(rule_len)
    ));
    section(&mut out, "verse", &record.tamil_verse);
    section(&mut out, "translation", &record.english_verse);
    section(&mut out, "explanation", &record.english_explanation);
    section(&mut out, "விளக்கம்", &record.tamil_explanation);
    out.push_str(&format!("╰{}╯", "─".repeat(BOX_WIDTH)));
    out
}
