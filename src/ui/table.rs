//! Width-aware plain-text tables
//!
//! Column widths are computed with `unicode-width` so names with wide or
//! combining characters still line up.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A simple column-aligned table without borders
pub struct Table {
    aligns: Vec<Align>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<(&str, Align)>) -> Self {
        Self {
            aligns: header.iter().map(|(_, a)| *a).collect(),
            header: header.iter().map(|(h, _)| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.header.len());
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();
        out.push_str(&self.render_row(&self.header, &widths));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&rule.join("──"));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_row(row, &widths));
            out.push('\n');
        }
        out
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            let pad = widths[i].saturating_sub(cell.width());
            let padded = match self.aligns[i] {
                Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                Align::Right => format!("{}{}", " ".repeat(pad), cell),
            };
            parts.push(padded);
        }
        parts.join("  ").trim_end().to_string()
    }
}

/// Format a share count with thousands separators (12,500,000)
pub fn format_shares(shares: u64) -> String {
    let digits = shares.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a dollar amount ($5,000,000; cents only when fractional)
pub fn format_money(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let cents = ((amount - amount.trunc()) * 100.0).round() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    let grouped = format_shares(whole.unsigned_abs());
    if cents == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{:02}", cents.abs())
    }
}

/// Format a percentage with one decimal place for display
pub fn format_pct(pct: f64) -> String {
    format!("{pct:.1}%")
}
