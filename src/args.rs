//! Command-line argument parsing using clap.
//!
//! Arguments are free-form tokens: `[month] [year]` in either order, a lone
//! year, a lone month, or a single `YYYY-MM` token.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, ValueHint};
use regex::Regex;

use crate::types::{MIN_YEAR, Request};

#[derive(Parser, Debug)]
#[command(name = "mcal")]
#[command(about = "Displays calendar for specified month or year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12), year (>= 1900), both in any order, or YYYY-MM.
    #[arg(
        value_name = "month|year",
        num_args = 0..,
        allow_hyphen_values = true,
        value_hint = ValueHint::Other
    )]
    pub params: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Examples:
  mcal               Display current month
  mcal 3             Display March of the current year
  mcal 2026          Display year 2026
  mcal 2 2026        Display February 2026
  mcal 2026 2        Same as above
  mcal 2026-02       Same as above";

/// Printed to stdout whenever the arguments cannot be interpreted.
pub const USAGE: &str = "Usage:
mcal [month] [year]
mcal [year] [month]
mcal YYYY-MM";

static MONTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{1,2}").expect("month token pattern is valid"));

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Get today's date, respecting MCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("MCAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Parse the leading base-10 integer of a token, ignoring whatever follows it.
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digits lead the token or the value does not fit an `i64`.
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

/// Split a lone token containing `YYYY-MM` on every hyphen; other inputs pass through.
fn split_tokens(params: &[String]) -> Vec<&str> {
    match params {
        [single] if MONTH_TOKEN.is_match(single) => single.split('-').collect(),
        _ => params.iter().map(String::as_str).collect(),
    }
}

/// Resolve positional arguments into a [`Request`].
///
/// Argument patterns:
/// - 0 args: current month
/// - 1 arg: year (>= 1900) or month (1-12) of the current year
/// - 2 args: month and year in either order
pub fn parse_request(params: &[String], today: NaiveDate) -> Result<Request, String> {
    let tokens = split_tokens(params);
    let values: Vec<Option<i64>> = tokens.iter().map(|t| parse_leading_int(t)).collect();

    match values.as_slice() {
        [] => Ok(Request::Month {
            year: i64::from(today.year()),
            month: today.month0(),
        }),
        [Some(param)] if *param >= MIN_YEAR => Ok(Request::Year(*param)),
        [Some(param)] if (1..=12).contains(param) => Ok(Request::Month {
            year: i64::from(today.year()),
            month: (*param - 1) as u32,
        }),
        [_] => Err(format!("Invalid month or year: {}", tokens[0])),
        [Some(a), Some(b)] => {
            let (lo, hi) = if a <= b { (*a, *b) } else { (*b, *a) };
            if lo <= 0 || lo > 12 || hi < MIN_YEAR {
                return Err(format!("Invalid month/year pair: {} {}", tokens[0], tokens[1]));
            }
            Ok(Request::Month {
                year: hi,
                month: (lo - 1) as u32,
            })
        }
        [_, _] => Err(format!("Not a number: {} {}", tokens[0], tokens[1])),
        _ => Err(format!("Too many arguments: {}", tokens.len())),
    }
}
