//! Calendar formatting and display.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::calendar::{days_in_month, first_weekday};
use crate::types::{
    COLOR_RESET, COLOR_REVERSE, CalContext, MONTH_GRID_HEIGHT, MONTH_NAMES, MONTH_WIDTH,
    MONTHS_PER_ROW, MonthGrid, WEEKDAY_NAMES, YEAR_COLUMN_WIDTH, YEAR_HEADER_INDENT,
};

/// Left-pad text so it sits centered within `width`. No right padding is added.
pub fn center_text(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Width of text as seen on a terminal, ignoring the highlight escape codes.
fn visible_width(text: &str) -> usize {
    text.replace(COLOR_REVERSE, "")
        .replace(COLOR_RESET, "")
        .width()
}

/// Right-pad text with spaces up to `width` visible columns.
pub fn right_pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Wrap text in reverse video.
pub fn invert(text: &str) -> String {
    format!("{}{}{}", COLOR_REVERSE, text, COLOR_RESET)
}

/// Format month header with optional year, centered over the day columns.
pub fn format_month_header(year: i64, month: u32, show_year: bool) -> String {
    let month_name = MONTH_NAMES[month as usize];
    let header = if show_year {
        format!("{} {}", month_name, year)
    } else {
        month_name.to_string()
    };
    center_text(&header, MONTH_WIDTH)
}

pub fn format_weekday_headers() -> String {
    WEEKDAY_NAMES.join(" ")
}

/// Format month as a fixed-height grid of lines.
///
/// Week rows the month does not reach are left empty so grids can be laid
/// side by side line for line.
pub fn format_month_grid(ctx: &CalContext, year: i64, month: u32, show_year: bool) -> MonthGrid {
    let mut lines: MonthGrid = std::array::from_fn(|_| String::new());
    let weekday = first_weekday(year, month);
    let last_day = days_in_month(year, month);

    lines[0] = format_month_header(year, month, show_year);
    lines[1] = format_weekday_headers();

    let mut current = 2;
    lines[current] = "   ".repeat(weekday as usize);

    for day in 1..=last_day {
        if (weekday + day - 1) % 7 == 0 && day != 1 {
            current += 1;
        } else if day > 1 {
            lines[current].push(' ');
        }

        // Pad on the bare digits so highlighting never shifts columns
        if day < 10 {
            lines[current].push(' ');
        }
        if ctx.is_today(year, month, day) {
            lines[current].push_str(&invert(&day.to_string()));
        } else {
            lines[current].push_str(&day.to_string());
        }
    }

    lines
}

/// Join grids column-wise: every grid but the last is padded to a fixed column.
fn join_side_by_side(grids: &[MonthGrid]) -> Vec<String> {
    (0..MONTH_GRID_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, grid) in grids.iter().enumerate() {
                if i < grids.len() - 1 {
                    line.push_str(&right_pad(&grid[row], YEAR_COLUMN_WIDTH));
                } else {
                    line.push_str(&grid[row]);
                }
            }
            line.trim_end_matches(' ').to_string()
        })
        .collect()
}

/// Format all 12 months of a year: a centered year title, a blank line, then
/// four rows of three months.
pub fn format_year(ctx: &CalContext, year: i64) -> Vec<String> {
    let mut lines = vec![
        format!("{}{}", " ".repeat(YEAR_HEADER_INDENT), year),
        String::new(),
    ];

    let grids: Vec<MonthGrid> = (0..12)
        .map(|month| format_month_grid(ctx, year, month, false))
        .collect();

    for row in grids.chunks(MONTHS_PER_ROW) {
        lines.extend(join_side_by_side(row));
    }
    lines
}

/// Print single month with the year in its title.
pub fn print_month<W: Write>(
    out: &mut W,
    ctx: &CalContext,
    year: i64,
    month: u32,
) -> io::Result<()> {
    for line in format_month_grid(ctx, year, month, true) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print all 12 months of a year.
pub fn print_year<W: Write>(out: &mut W, ctx: &CalContext, year: i64) -> io::Result<()> {
    for line in format_year(ctx, year) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
