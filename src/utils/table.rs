//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Pad to the display width, not the byte length, so note text with
    /// wide glyphs keeps the columns aligned.
    fn pad(cell: &str, width: usize) -> String {
        let display = UnicodeWidthStr::width(cell);
        let fill = width.saturating_sub(display);
        format!("{}{}", cell, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&Self::pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
