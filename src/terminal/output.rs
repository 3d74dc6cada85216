//! Box-drawn text for the help screen.
//!
//! Rows are collected into a `String` so the whole box goes out in one write.

use std::fmt::Write as _;

pub const BOX_WIDTH: usize = 64;

/// Columns between the `│ ` and ` │` borders.
const INNER: usize = BOX_WIDTH - 4;

/// Width of the flag column in option rows.
const FLAG_COL: usize = 20;

pub struct HelpBox {
    out: String,
}

impl HelpBox {
    /// Start a box whose top border carries `title`: `┌─ title ─────┐`.
    pub fn new(title: &str) -> Self {
        let mut out = String::new();
        if title.is_empty() {
            let _ = writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
        } else {
            let label = format!("─ {title} ");
            let fill = (BOX_WIDTH - 2).saturating_sub(label.chars().count());
            let _ = writeln!(out, "┌{label}{}┐", "─".repeat(fill));
        }
        HelpBox { out }
    }

    fn row(&mut self, content: &str) {
        let _ = writeln!(self.out, "│ {content} │");
    }

    /// Left-aligned row; over-long content runs past the right border.
    pub fn line(mut self, content: &str) -> Self {
        self.row(&pad_right(content, INNER));
        self
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn center(mut self, content: &str) -> Self {
        let width = content.chars().count();
        let left = INNER.saturating_sub(width) / 2;
        let centered = format!("{}{content}", " ".repeat(left));
        self.row(&pad_right(&centered, INNER));
        self
    }

    /// Flag in a fixed column, description word-wrapped beside it.
    pub fn opt(mut self, flag: &str, desc: &str) -> Self {
        for row in opt_rows(flag, desc) {
            self.row(&row);
        }
        self
    }

    /// Close the box and return the rendered text.
    pub fn finish(mut self) -> String {
        let _ = writeln!(self.out, "└{}┘", "─".repeat(BOX_WIDTH - 2));
        self.out
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

fn opt_rows(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = INNER - FLAG_COL;
    let flag: String = flag.chars().take(FLAG_COL).collect();

    let mut wrapped: Vec<String> = vec![String::new()];
    for word in desc.split_whitespace() {
        let Some(current) = wrapped.last_mut() else {
            break;
        };
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(word.to_string());
        }
    }

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { flag.as_str() } else { "" };
            format!("{}{}", pad_right(lead, FLAG_COL), pad_right(&text, desc_col))
        })
        .collect()
}
