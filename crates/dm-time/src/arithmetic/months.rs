//! Month and year length helpers, end-of-month checks, and month shifting.

use crate::date::{month_length, Date};
use dm_core::errors::{Error, Result};
use dm_core::Year;

pub use crate::date::{days_in_month, is_leap_year};

/// Number of days in `year`: 366 in a leap year, 365 otherwise.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Return `true` if `date` is the last calendar day of its month.
pub fn is_end_of_month(date: Date) -> bool {
    let (year, month, day) = date.ymd();
    day == month_length(year, month)
}

/// Return the last calendar day of `month` in `year`.
pub fn end_of_month(year: Year, month: u8) -> Result<Date> {
    Date::from_ymd(year, month, days_in_month(year, month)?)
}

/// Shift `date` by a signed number of months.
///
/// The day of month is clamped to the length of the target month.  When
/// `eom` is set and `date` is the last day of its month, the result is the
/// last day of the target month instead, so end-of-month schedules stay on
/// month ends.
///
/// ```
/// use dm_time::arithmetic::add_months;
/// use dm_time::Date;
///
/// let feb = Date::from_ymd(2013, 2, 28).unwrap();
/// assert_eq!(add_months(feb, 2, false).unwrap(), Date::from_ymd(2013, 4, 28).unwrap());
/// assert_eq!(add_months(feb, 2, true).unwrap(), Date::from_ymd(2013, 4, 30).unwrap());
/// ```
pub fn add_months(date: Date, months: i32, eom: bool) -> Result<Date> {
    let (year, month, day) = date.ymd();
    let total = (month as i32 - 1)
        .checked_add(months)
        .ok_or_else(|| Error::Date(format!("{date} + {months} months out of range")))?;
    let year = year + total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u8;
    let last = month_length(year, month);
    let day = if eom && is_end_of_month(date) {
        last
    } else {
        day.min(last)
    };
    Date::from_ymd(year, month, day)
}
