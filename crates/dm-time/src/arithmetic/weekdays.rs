//! Day-of-week stepping.

use crate::date::Date;
use crate::day_of_week::DayOfWeek;
use dm_core::errors::{Error, Result};

/// Return the `nth` occurrence of `dow` counting forwards (`nth > 0`) or
/// backwards (`nth < 0`) from `date`.
///
/// A start date that already falls on `dow` counts as the first occurrence
/// unless `strictly_different` is set.  `nth == 0` returns `date`, and so does
/// a Saturday or Sunday target: only Monday to Friday are searched for.
///
/// ```
/// use dm_time::arithmetic::add_nth_day_of_week;
/// use dm_time::{Date, DayOfWeek};
///
/// let june_first = Date::from_ymd(2015, 6, 1).unwrap(); // a Monday
/// let third_wed = add_nth_day_of_week(june_first, 3, DayOfWeek::Wednesday, false).unwrap();
/// assert_eq!(third_wed, Date::from_ymd(2015, 6, 17).unwrap());
/// ```
pub fn add_nth_day_of_week(
    date: Date,
    nth: i32,
    dow: DayOfWeek,
    strictly_different: bool,
) -> Result<Date> {
    if nth == 0 || !dow.is_weekday() {
        return Ok(date);
    }

    let out_of_range = || Error::Date(format!("{date} + {nth} x {dow} out of range"));

    let mut diff = dow.ordinal() as i32 - date.weekday().ordinal() as i32;
    let nth = if diff == 0 && strictly_different {
        nth.checked_add(nth.signum()).ok_or_else(out_of_range)?
    } else {
        nth
    };

    let (first, weeks) = if nth > 0 {
        if diff < 0 {
            diff += 7;
        }
        (diff, nth - 1)
    } else {
        if diff > 0 {
            diff -= 7;
        }
        (diff, nth + 1)
    };

    let days = weeks
        .checked_mul(7)
        .and_then(|w| w.checked_add(first))
        .ok_or_else(out_of_range)?;
    date.add_days(days)
}
