//! Concrete calendar implementations.

/// Calendar with an explicit, fixed holiday list.
pub mod fixed_calendar;

/// Calendar whose holidays are fetched per year and cached.
pub mod yearly_calendar;

pub use fixed_calendar::FixedCalendar;
pub use yearly_calendar::{HolidayMap, YearlyCalendar};
