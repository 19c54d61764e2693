//! Type definitions and constants for calendar formatting.

use chrono::{Datelike, NaiveDate};

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Whole year in a 4x3 grid.
    Year(i64),
    /// Single month. `month` is zero-based (0 = January).
    Month { year: i64, month: u32 },
}

/// Rendering context shared by every month of one invocation.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Today's date for highlighting, read once per run.
    pub today: NaiveDate,
}

impl CalContext {
    pub fn new(today: NaiveDate) -> Self {
        CalContext { today }
    }

    /// Whether `day` of zero-based `month` in `year` is today.
    pub fn is_today(&self, year: i64, month: u32, day: u32) -> bool {
        i64::from(self.today.year()) == year
            && self.today.month0() == month
            && self.today.day() == day
    }
}

/// Fixed-height lines of one rendered month: title, weekday header, six week rows.
pub type MonthGrid = [String; MONTH_GRID_HEIGHT];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// Constants for calendar formatting
pub const MONTH_GRID_HEIGHT: usize = 8;
pub const MONTH_WIDTH: usize = 20;
pub const YEAR_COLUMN_WIDTH: usize = 22;
pub const YEAR_HEADER_INDENT: usize = 29;
pub const MONTHS_PER_ROW: usize = 3;

// Smallest value a lone argument may take to be read as a year
pub const MIN_YEAR: i64 = 1900;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
