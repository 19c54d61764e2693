//! Calendar arithmetic on the proleptic Gregorian calendar.
//!
//! Months are zero-based throughout (0 = January), matching [`crate::types::Request`].

/// Check if a year is a Gregorian leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Map a year onto 2000..2400 with the same weekdays and month lengths.
///
/// A 400-year Gregorian cycle is 146097 days, a whole number of weeks.
fn cycle_year(year: i64) -> i64 {
    2000 + year.rem_euclid(400)
}

/// Days since 1970-01-01 for a civil date. `month` is 1-based here.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Day number of the 1st of a zero-based month within the equivalent cycle year.
fn first_of_month(year: i64, month: u32) -> i64 {
    days_from_civil(cycle_year(year), i64::from(month) + 1, 1)
}

/// Weekday of the 1st of the month (0 = Sunday .. 6 = Saturday).
pub fn first_weekday(year: i64, month: u32) -> u32 {
    // 1970-01-01 was a Thursday
    (first_of_month(year, month) + 4).rem_euclid(7) as u32
}

/// Number of days in a zero-based month, as the distance to the next month's 1st.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    let next = if month == 11 {
        days_from_civil(cycle_year(year) + 1, 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (next - first_of_month(year, month)) as u32
}
