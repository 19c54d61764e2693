//! Minimal terminal calendar.
//!
//! Features:
//! - Single month or whole-year layouts
//! - Month and year arguments in either order, or as `YYYY-MM`
//! - Today's date shown in reverse video

pub mod args;
pub mod calendar;
pub mod formatter;
pub mod types;
