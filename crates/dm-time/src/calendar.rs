//! `Calendar` trait, the [`Weekends`] day set, and the [`WeekendsOnly`]
//! calendar.
//!
//! A calendar knows which dates are weekends and which are holidays; a
//! business day is a date that is neither.  Date adjustment and business-day
//! stepping live in [`crate::arithmetic`] and only rely on this contract.

use crate::date::Date;
use crate::day_of_week::DayOfWeek;
use dm_core::ensure;
use dm_core::errors::Result;

/// A business-day calendar.
///
/// Implementors provide [`is_weekend`][Self::is_weekend] and
/// [`is_holiday`][Self::is_holiday]; the two checks are independent and both
/// block business-day status.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"London"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` falls on one of the calendar's weekend days.
    fn is_weekend(&self, date: Date) -> bool;

    /// Return `true` if `date` is a declared holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !(self.is_weekend(date) || self.is_holiday(date))
    }

    /// Collect the declared holidays in the inclusive range `[from, to]` that
    /// do not fall on a weekend.
    ///
    /// # Errors
    /// Returns a precondition error if `from > to`.
    fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<Date>> {
        ensure!(from <= to, "holidays_between: {from} is after {to}");
        Ok((from.serial()..=to.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_holiday(d) && !self.is_weekend(d))
            .collect())
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }
}

// ── Weekends ──────────────────────────────────────────────────────────────────

/// The set of days of the week a calendar treats as weekend.
///
/// Stored as a bit set indexed by [`DayOfWeek::ordinal`].  The default is
/// Saturday and Sunday.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<DayOfWeek>", from = "Vec<DayOfWeek>")
)]
pub struct Weekends(u8);

impl Weekends {
    /// No weekend days at all.
    pub const NONE: Weekends = Weekends(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: Weekends =
        Weekends((1 << DayOfWeek::Saturday as u8) | (1 << DayOfWeek::Sunday as u8));

    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: Weekends =
        Weekends((1 << DayOfWeek::Friday as u8) | (1 << DayOfWeek::Saturday as u8));

    /// Build a weekend set from a list of days.
    pub fn new(days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        days.into_iter().collect()
    }

    /// Return `true` if `day` is a weekend day.
    pub fn contains(&self, day: DayOfWeek) -> bool {
        self.0 & (1 << day.ordinal()) != 0
    }

    /// Add `day` to the set.
    pub fn insert(&mut self, day: DayOfWeek) {
        self.0 |= 1 << day.ordinal();
    }

    /// Return `true` if no day is a weekend day.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the weekend days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        DayOfWeek::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl Default for Weekends {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl FromIterator<DayOfWeek> for Weekends {
    fn from_iter<I: IntoIterator<Item = DayOfWeek>>(iter: I) -> Self {
        let mut w = Weekends::NONE;
        for day in iter {
            w.insert(day);
        }
        w
    }
}

impl From<Vec<DayOfWeek>> for Weekends {
    fn from(days: Vec<DayOfWeek>) -> Self {
        days.into_iter().collect()
    }
}

impl From<Weekends> for Vec<DayOfWeek> {
    fn from(w: Weekends) -> Self {
        w.iter().collect()
    }
}

impl std::fmt::Debug for Weekends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── WeekendsOnly ──────────────────────────────────────────────────────────────

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
///
/// This is the calendar date adjustment falls back to when no other calendar
/// is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_weekend(&self, date: Date) -> bool {
        Weekends::SATURDAY_SUNDAY.contains(date.weekday())
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2014-12-19 is a Friday, 2014-12-20/21 the weekend
        assert!(!cal.is_weekend(date(2014, 12, 19)));
        assert!(cal.is_weekend(date(2014, 12, 20)));
        assert!(cal.is_weekend(date(2014, 12, 21)));
        assert!(!cal.is_weekend(date(2014, 12, 22)));
        assert!(!cal.is_business_day(date(2014, 12, 20)));
        assert!(cal.is_business_day(date(2014, 12, 22)));
    }

    #[test]
    fn weekend_set() {
        let w = Weekends::new([DayOfWeek::Friday, DayOfWeek::Saturday]);
        assert_eq!(w, Weekends::FRIDAY_SATURDAY);
        assert!(w.contains(DayOfWeek::Friday));
        assert!(!w.contains(DayOfWeek::Sunday));
        assert_eq!(
            w.iter().collect::<Vec<_>>(),
            vec![DayOfWeek::Friday, DayOfWeek::Saturday]
        );
        assert!(Weekends::NONE.is_empty());
        assert_eq!(Weekends::default(), Weekends::SATURDAY_SUNDAY);
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 business days (d1 exclusive)
        assert_eq!(cal.business_days_between(d1, d2), 4);
        assert_eq!(cal.business_days_between(d2, d1), -4);
        assert_eq!(cal.business_days_between(d1, d1), 0);
    }

    #[test]
    fn holidays_between_rejects_reversed_range() {
        let cal = WeekendsOnly;
        assert!(cal.holidays_between(date(2023, 9, 8), date(2023, 9, 4)).is_err());
        assert!(cal
            .holidays_between(date(2023, 9, 4), date(2023, 9, 8))
            .unwrap()
            .is_empty());
    }
}
