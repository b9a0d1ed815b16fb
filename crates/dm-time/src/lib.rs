//! # dm-time
//!
//! Date, calendar, business-day-convention, and date arithmetic types.
//!
//! ```
//! use dm_time::arithmetic::{adjust, advance, Offset};
//! use dm_time::calendars::FixedCalendar;
//! use dm_time::{BusinessDayConvention, Date, Weekends};
//!
//! let new_year = Date::from_ymd(2015, 1, 1).unwrap();
//! let cal = FixedCalendar::new("Example", Weekends::SATURDAY_SUNDAY, [new_year]);
//!
//! let adjusted = adjust(new_year, BusinessDayConvention::Following, true, &cal).unwrap();
//! assert_eq!(adjusted, Date::from_ymd(2015, 1, 2).unwrap());
//!
//! let settle = advance(new_year, Offset::new().days(5), BusinessDayConvention::Following, false, &cal)
//!     .unwrap();
//! assert_eq!(settle, Date::from_ymd(2015, 1, 8).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date arithmetic: month shifting, business-day adjustment, Easter, periods.
pub mod arithmetic;

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait, weekend sets, and the weekend-only calendar.
pub mod calendar;

/// Concrete calendar implementations (fixed list, yearly cached).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayOfWeek`: day of the week.
pub mod day_of_week;

/// `MonthOfYear`: month of the year.
pub mod month_of_year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arithmetic::Offset;
pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, Weekends, WeekendsOnly};
pub use calendars::{FixedCalendar, HolidayMap, YearlyCalendar};
pub use date::Date;
pub use day_of_week::DayOfWeek;
pub use month_of_year::MonthOfYear;
