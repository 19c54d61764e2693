//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! mcal            // Current month
//! mcal 3          // March of the current year
//! mcal 2026       // Year 2026
//! mcal 2 2026     // February 2026
//! mcal 2026-02    // February 2026
//! ```

use std::io::Write;
use std::process::ExitCode;

use flexi_logger::Logger;
use log::debug;

use mcal::args::{Args, USAGE, get_today_date, parse_request};
use mcal::formatter::{print_month, print_year};
use mcal::types::{CalContext, Request};

const DEFAULT_LOG_LEVEL: &str = "error";

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("mcal: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, String> {
    let _logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .and_then(|logger| logger.start())
        .map_err(|e| format!("Cannot start logger: {}", e))?;

    let ctx = CalContext::new(get_today_date());
    debug!("today is {}", ctx.today);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let request = match parse_request(&args.params, ctx.today) {
        Ok(request) => request,
        Err(reason) => {
            debug!("{}", reason);
            writeln!(out, "{}", USAGE).map_err(|e| e.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("rendering {:?}", request);

    match request {
        Request::Year(year) => print_year(&mut out, &ctx, year),
        Request::Month { year, month } => print_month(&mut out, &ctx, year, month),
    }
    .and_then(|()| out.flush())
    .map_err(|e| e.to_string())?;

    Ok(ExitCode::SUCCESS)
}
