//! Interval decomposition and quarter / week-of-year helpers.

use super::months::is_end_of_month;
use crate::date::month_length;
use crate::date::Date;

/// Split the interval from `start` to `end` into `(days, months)`.
///
/// Advancing `start` by `months` months and then `days` days lands on (or,
/// where month lengths differ, near) `end`.  End-of-month dates are matched
/// to each other, so 2015-01-31 to 2015-02-28 is exactly one month.
pub fn days_and_months_between(start: Date, end: Date) -> (i32, i32) {
    if start == end {
        return (0, 0);
    }

    let (start_year, start_month, start_day) = start.ymd();
    let (end_year, end_month, end_day) = end.ymd();

    let mut months = (end_year - start_year) * 12 + (end_month as i32 - start_month as i32);
    let start_eom = is_end_of_month(start);
    let end_eom = is_end_of_month(end);
    if !end_eom && (start_eom || start_day > end_day) {
        months -= 1;
    }

    let days = if start_day == end_day || (start_eom && end_eom) {
        0
    } else if start_day < end_day {
        end_day as i32 - start_day as i32
    } else {
        month_length(start_year, start_month) as i32 - start_day as i32 + end_day as i32
    };

    (days, months)
}

/// Return `true` if both dates fall in the same calendar quarter.
///
/// The check is symmetric in its arguments.  Within a year, two months share
/// a quarter when they are less than four months apart and the later one
/// sits strictly further into its quarter.
///
/// Two different days of the same month therefore do *not* count as the same
/// quarter (2015-05-02 and 2015-05-30 give `false`); only identical dates
/// short-circuit to `true`.
pub fn are_in_same_quarter(first: Date, second: Date) -> bool {
    let (first, second) = if first > second {
        (second, first)
    } else {
        (first, second)
    };
    if first == second {
        return true;
    }

    let (first_year, first_month, _) = first.ymd();
    let (second_year, second_month, _) = second.ymd();
    first_year == second_year
        && second_month - first_month < 4
        && (second_month - 1) % 3 > (first_month - 1) % 3
}

/// Return the quarter (1–4) of the year `date` falls in.
pub fn quarter_of_year(date: Date) -> u8 {
    date.month_of_year().quarter()
}

/// Return the week of the year of `date`.
///
/// With `iso` set this is the ISO 8601 week number (1–53), which may belong
/// to the neighbouring year.  Otherwise weeks are counted from January 1:
/// days 1–7 are week 1, days 8–14 week 2, and so on.
pub fn week_of_year(date: Date, iso: bool) -> u8 {
    if iso {
        date.iso_week().1
    } else {
        (1 + (date.day_of_year() - 1) / 7) as u8
    }
}
