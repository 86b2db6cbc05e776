//! Terminal rendering of a month grid.
//!
//! Each cell is `CELL_WIDTH` columns: a day label (`[20]` when selected,
//! a trailing `*` for today), then up to `limit` preview lines and the
//! `+N more` line.

use crate::core::calendar::{Cell, DayCell, MonthGrid};
use crate::utils::colors::{dim, highlight_today};
use crate::utils::date::WEEKDAY_LABELS;
use crate::utils::formatting::{pad_right, truncate_to_width};
use chrono::Datelike;

pub const CELL_WIDTH: usize = 14;

fn day_label(day: &DayCell<'_>) -> String {
    let n = format!("{:>2}", day.date.day());
    let mut label = if day.is_selected {
        format!("[{n}]")
    } else {
        format!(" {n} ")
    };
    if day.is_today {
        label.push('*');
    }
    label
}

/// Text lines of one cell, before padding. Empty cells have none.
fn cell_lines(cell: &Cell<'_>, limit: usize) -> Vec<String> {
    let Some(day) = cell.as_day() else {
        return Vec::new();
    };

    let preview = day.preview(limit);
    let mut lines = vec![day_label(day)];
    lines.extend(
        preview
            .lines
            .iter()
            .map(|l| truncate_to_width(&l.to_string(), CELL_WIDTH - 1)),
    );
    lines.extend(preview.more_label());
    lines
}

pub fn render_month(grid: &MonthGrid<'_>, limit: usize, color: bool) -> String {
    let total_width = (CELL_WIDTH + 1) * WEEKDAY_LABELS.len() - 1;
    let mut out = String::new();

    let title = grid.month.label();
    let indent = total_width.saturating_sub(title.len()) / 2;
    out.push_str(&format!("{}{title}\n", " ".repeat(indent)));

    let heads: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|d| pad_right(&format!(" {d}"), CELL_WIDTH))
        .collect();
    out.push_str(heads.join("|").trim_end());
    out.push('\n');

    let rule = "-".repeat(total_width);
    out.push_str(&rule);
    out.push('\n');

    for week in grid.weeks() {
        let columns: Vec<(Vec<String>, bool)> = week
            .iter()
            .map(|c| (cell_lines(c, limit), c.as_day().is_some_and(|d| d.is_today)))
            .collect();

        let height = columns.iter().map(|(l, _)| l.len()).max().unwrap_or(0).max(1);

        for row in 0..height {
            let line: Vec<String> = columns
                .iter()
                .map(|(lines, today)| {
                    let text = lines.get(row).map(String::as_str).unwrap_or("");
                    let padded = pad_right(text, CELL_WIDTH);
                    if row == 0 && *today {
                        highlight_today(&padded, color)
                    } else if text.starts_with('+') {
                        dim(&padded, color)
                    } else {
                        padded
                    }
                })
                .collect();
            out.push_str(line.join("|").trim_end());
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
    }

    out
}
