//! Date arithmetic over a [`Date`](crate::Date) and a
//! [`Calendar`](crate::Calendar).
//!
//! Every function here is stateless; the only state involved is whatever
//! the calendar passed in keeps (see
//! [`YearlyCalendar`](crate::calendars::YearlyCalendar)).

mod business_days;
mod easter;
mod months;
mod periods;
mod weekdays;

pub use business_days::{add_business_days, adjust, advance, nearest_business_day, Offset};
pub use easter::easter;
pub use months::{
    add_months, days_in_month, days_in_year, end_of_month, is_end_of_month, is_leap_year,
};
pub use periods::{are_in_same_quarter, days_and_months_between, quarter_of_year, week_of_year};
pub use weekdays::add_nth_day_of_week;
