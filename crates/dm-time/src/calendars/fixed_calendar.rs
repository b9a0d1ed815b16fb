//! Fixed calendar: a calendar with an explicit holiday list.

use crate::calendar::{Calendar, Weekends};
use crate::date::Date;
use std::collections::HashSet;

/// A calendar whose weekend days and holidays are both given up front.
///
/// The holiday set is fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCalendar {
    name: String,
    weekends: Weekends,
    holidays: HashSet<Date>,
}

impl FixedCalendar {
    /// Create a calendar from a name, weekend set and holiday list.
    pub fn new(
        name: impl Into<String>,
        weekends: Weekends,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            name: name.into(),
            weekends,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Return the weekend days.
    pub fn weekends(&self) -> Weekends {
        self.weekends
    }

    /// Return the holidays in ascending order.
    pub fn holidays(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self.holidays.iter().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// Return the number of declared holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for FixedCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekends.contains(date.weekday())
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_of_week::DayOfWeek;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn christmas_2014() -> FixedCalendar {
        FixedCalendar::new(
            "Test",
            Weekends::SATURDAY_SUNDAY,
            [date(2014, 12, 25), date(2014, 12, 26)],
        )
    }

    #[test]
    fn empty_fixed_is_weekends_only() {
        let cal = FixedCalendar::new("Empty", Weekends::default(), std::iter::empty());
        assert_eq!(cal.name(), "Empty");
        // Monday is a business day
        assert!(cal.is_business_day(date(2024, 1, 8)));
        // Saturday is not
        assert!(!cal.is_business_day(date(2024, 1, 6)));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn holidays() {
        let cal = christmas_2014();
        assert!(cal.is_holiday(date(2014, 12, 25)));
        assert!(cal.is_holiday(date(2014, 12, 26)));
        // Saturday is a weekend day, not a holiday
        assert!(!cal.is_holiday(date(2014, 12, 27)));
        assert!(cal.is_weekend(date(2014, 12, 27)));
    }

    #[test]
    fn business_days() {
        let cal = christmas_2014();
        assert!(cal.is_business_day(date(2014, 12, 24)));
        assert!(!cal.is_business_day(date(2014, 12, 25)));
        assert!(!cal.is_business_day(date(2014, 12, 26)));
        assert!(!cal.is_business_day(date(2014, 12, 27)));
        assert!(!cal.is_business_day(date(2014, 12, 28)));
        assert!(cal.is_business_day(date(2014, 12, 29)));
    }

    #[test]
    fn custom_weekend() {
        let cal = FixedCalendar::new("Gulf", Weekends::FRIDAY_SATURDAY, std::iter::empty());
        // 2024-01-05 is a Friday, 2024-01-07 a Sunday
        assert!(!cal.is_business_day(date(2024, 1, 5)));
        assert!(cal.is_business_day(date(2024, 1, 7)));
        assert!(cal.weekends().contains(DayOfWeek::Saturday));
    }

    #[test]
    fn holidays_are_sorted() {
        let cal = FixedCalendar::new(
            "Unsorted",
            Weekends::default(),
            [date(2025, 1, 1), date(2024, 12, 25), date(2024, 12, 26)],
        );
        assert_eq!(
            cal.holidays(),
            vec![date(2024, 12, 25), date(2024, 12, 26), date(2025, 1, 1)]
        );
    }
}
