//! Business-day search, convention-based adjustment, and composite advance.

use super::months::add_months;
use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::{Calendar, WeekendsOnly};
use crate::date::Date;
use dm_core::errors::Result;
use tracing::trace;

/// Find the business day closest to `date`.
///
/// A business day is returned unchanged.  Otherwise candidates are examined
/// one day further out in both directions at a time; when both sides reach a
/// business day at the same distance, `prefer_forward` picks the side.
///
/// On a calendar without business days the search only stops once it leaves
/// the supported date range, with an [`Error::Date`](dm_core::Error::Date).
pub fn nearest_business_day(date: Date, prefer_forward: bool, cal: &dyn Calendar) -> Result<Date> {
    if cal.is_business_day(date) {
        return Ok(date);
    }

    let mut forward = date;
    let mut backward = date;
    loop {
        forward = forward.add_days(1)?;
        backward = backward.add_days(-1)?;
        let forward_ok = cal.is_business_day(forward);
        let backward_ok = cal.is_business_day(backward);
        if forward_ok && (prefer_forward || !backward_ok) {
            return Ok(forward);
        }
        if backward_ok {
            return Ok(backward);
        }
    }
}

/// Move `date` by `count` business days (backwards when negative).
///
/// Every unit of `count` lands on a business day; non-business days passed
/// over are not counted.  `count == 0` returns `date` unchanged, even if it is
/// not a business day.
pub fn add_business_days(mut date: Date, count: i32, cal: &dyn Calendar) -> Result<Date> {
    let step = count.signum();
    let mut remaining = count;
    while remaining != 0 {
        date = date.add_days(step)?;
        if cal.is_business_day(date) {
            remaining -= step;
        }
    }
    Ok(date)
}

/// Adjust `date` to a business day according to `convention`.
///
/// `prefer_forward` only matters for [`BusinessDayConvention::Nearest`].
pub fn adjust(
    date: Date,
    convention: BusinessDayConvention,
    prefer_forward: bool,
    cal: &dyn Calendar,
) -> Result<Date> {
    if convention == BusinessDayConvention::None || cal.is_business_day(date) {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::None => Ok(date),
        BusinessDayConvention::Nearest => nearest_business_day(date, prefer_forward, cal),
        BusinessDayConvention::Following => add_business_days(date, 1, cal),
        BusinessDayConvention::Preceding => add_business_days(date, -1, cal),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = add_business_days(date, 1, cal)?;
            if adjusted.month() == date.month() {
                Ok(adjusted)
            } else {
                trace!(
                    %date,
                    %adjusted,
                    calendar = cal.name(),
                    "following crosses month end, using preceding"
                );
                add_business_days(date, -1, cal)
            }
        }
        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = add_business_days(date, -1, cal)?;
            if adjusted.month() == date.month() {
                Ok(adjusted)
            } else {
                trace!(
                    %date,
                    %adjusted,
                    calendar = cal.name(),
                    "preceding crosses month start, using following"
                );
                add_business_days(date, 1, cal)
            }
        }
    }
}

/// A composite date offset used by [`advance`].
///
/// A zero component means the stage is skipped.
///
/// ```
/// use dm_time::arithmetic::Offset;
///
/// let tenor = Offset::new().years(1).months(6);
/// assert_eq!(tenor.months, 6);
/// assert!(!tenor.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Offset {
    /// Business days, applied last.
    pub days: i32,
    /// Calendar weeks.
    pub weeks: i32,
    /// Calendar months.
    pub months: i32,
    /// Calendar years.
    pub years: i32,
}

impl Offset {
    /// An offset with every component zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the business-day component.
    pub fn days(mut self, n: i32) -> Self {
        self.days = n;
        self
    }

    /// Set the week component.
    pub fn weeks(mut self, n: i32) -> Self {
        self.weeks = n;
        self
    }

    /// Set the month component.
    pub fn months(mut self, n: i32) -> Self {
        self.months = n;
        self
    }

    /// Set the year component.
    pub fn years(mut self, n: i32) -> Self {
        self.years = n;
        self
    }

    /// Return `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.weeks == 0 && self.months == 0 && self.years == 0
    }
}

/// Advance `date` by `offset` and adjust the result to a business day.
///
/// With a zero offset this is `adjust(date, convention)`.  Otherwise the
/// stages run in a fixed order, each starting from the previous result:
///
/// 1. years: `add_months(12 * years, eom)`, then adjust on `cal`;
/// 2. months: `add_months(months, eom)`, then adjust on `cal`;
/// 3. weeks: `7 * weeks` calendar days, then adjust on [`WeekendsOnly`];
/// 4. days: `add_business_days(days)` on `cal`.
///
/// The week stage adjusts against Saturday/Sunday only and ignores the
/// holidays of `cal`.  Callers relying on holiday-aware week offsets should
/// adjust the result again themselves.
pub fn advance(
    date: Date,
    offset: Offset,
    convention: BusinessDayConvention,
    eom: bool,
    cal: &dyn Calendar,
) -> Result<Date> {
    if offset.is_zero() {
        return adjust(date, convention, true, cal);
    }

    let mut date = date;
    if offset.years != 0 {
        let shifted = add_months(date, offset.years.saturating_mul(12), eom)?;
        date = adjust(shifted, convention, true, cal)?;
    }
    if offset.months != 0 {
        date = adjust(add_months(date, offset.months, eom)?, convention, true, cal)?;
    }
    if offset.weeks != 0 {
        let shifted = date.add_days(offset.weeks.saturating_mul(7))?;
        date = adjust(shifted, convention, true, &WeekendsOnly)?;
    }
    if offset.days != 0 {
        date = add_business_days(date, offset.days, cal)?;
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Weekends;
    use crate::calendars::FixedCalendar;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn cal_2015() -> FixedCalendar {
        FixedCalendar::new(
            "2015",
            Weekends::SATURDAY_SUNDAY,
            [
                date(2015, 1, 1),
                date(2015, 4, 3),
                date(2015, 4, 6),
                date(2015, 5, 1),
                date(2015, 12, 25),
                date(2015, 12, 16),
            ],
        )
    }

    #[test]
    fn add_business_days_skips_holidays() {
        let cal = cal_2015();
        assert_eq!(add_business_days(date(2015, 1, 1), 5, &cal).unwrap(), date(2015, 1, 8));
        assert_eq!(add_business_days(date(2015, 1, 2), 4, &cal).unwrap(), date(2015, 1, 8));
        assert_eq!(add_business_days(date(2014, 12, 29), 3, &cal).unwrap(), date(2015, 1, 2));
        assert_eq!(add_business_days(date(2015, 1, 8), -5, &cal).unwrap(), date(2014, 12, 31));
        assert_eq!(add_business_days(date(2015, 1, 8), -4, &cal).unwrap(), date(2015, 1, 2));
        assert_eq!(add_business_days(date(2015, 1, 2), -3, &cal).unwrap(), date(2014, 12, 29));
    }

    #[test]
    fn add_zero_business_days_is_identity() {
        let cal = cal_2015();
        // a holiday stays put
        assert_eq!(add_business_days(date(2015, 1, 1), 0, &cal).unwrap(), date(2015, 1, 1));
    }

    #[test]
    fn nearest() {
        let cal = FixedCalendar::new("July", Weekends::SATURDAY_SUNDAY, [date(2015, 7, 13)]);
        assert_eq!(nearest_business_day(date(2015, 7, 4), true, &cal).unwrap(), date(2015, 7, 3));
        assert_eq!(nearest_business_day(date(2015, 7, 5), true, &cal).unwrap(), date(2015, 7, 6));
        assert_eq!(nearest_business_day(date(2015, 7, 12), true, &cal).unwrap(), date(2015, 7, 14));
        assert_eq!(nearest_business_day(date(2015, 7, 12), false, &cal).unwrap(), date(2015, 7, 10));
        assert_eq!(nearest_business_day(date(2015, 7, 15), false, &cal).unwrap(), date(2015, 7, 15));
    }

    #[test]
    fn adjust_conventions() {
        let cal = cal_2015();
        let jan_first = date(2015, 1, 1);
        assert_eq!(adjust(jan_first, BusinessDayConvention::None, true, &cal).unwrap(), jan_first);
        assert_eq!(
            adjust(jan_first, BusinessDayConvention::Following, true, &cal).unwrap(),
            date(2015, 1, 2)
        );
        assert_eq!(
            adjust(jan_first, BusinessDayConvention::Preceding, true, &cal).unwrap(),
            date(2014, 12, 31)
        );
        assert_eq!(
            adjust(jan_first, BusinessDayConvention::ModifiedPreceding, true, &cal).unwrap(),
            date(2015, 1, 2)
        );
        assert_eq!(
            adjust(jan_first, BusinessDayConvention::Nearest, true, &cal).unwrap(),
            date(2015, 1, 2)
        );
        assert_eq!(
            adjust(jan_first, BusinessDayConvention::Nearest, false, &cal).unwrap(),
            date(2014, 12, 31)
        );
    }

    #[test]
    fn modified_following_stays_in_month() {
        let cal = cal_2015();
        // 2015-05-30 is a Saturday; Following would be Monday 2015-06-01
        assert_eq!(
            adjust(date(2015, 5, 30), BusinessDayConvention::ModifiedFollowing, true, &cal).unwrap(),
            date(2015, 5, 29)
        );
        assert_eq!(
            adjust(date(2015, 5, 30), BusinessDayConvention::Following, true, &cal).unwrap(),
            date(2015, 6, 1)
        );
    }

    #[test]
    fn advance_zero_offset_adjusts() {
        let cal = cal_2015();
        assert_eq!(
            advance(date(2015, 1, 1), Offset::new(), BusinessDayConvention::Following, false, &cal)
                .unwrap(),
            date(2015, 1, 2)
        );
    }

    #[test]
    fn advance_stages() {
        let cal = cal_2015();
        // 2014-04-03 + 1Y = 2015-04-03 (Good Friday) → following skips Easter Monday too
        assert_eq!(
            advance(
                date(2014, 4, 3),
                Offset::new().years(1),
                BusinessDayConvention::Following,
                false,
                &cal
            )
            .unwrap(),
            date(2015, 4, 7)
        );
        // 2015-03-01 + 2M = 2015-05-01 (holiday) → 2015-05-04
        assert_eq!(
            advance(
                date(2015, 3, 1),
                Offset::new().months(2),
                BusinessDayConvention::Following,
                false,
                &cal
            )
            .unwrap(),
            date(2015, 5, 4)
        );
        // 3 business days from Wednesday 2015-12-23 skip Christmas
        assert_eq!(
            advance(
                date(2015, 12, 23),
                Offset::new().days(3),
                BusinessDayConvention::Following,
                false,
                &cal
            )
            .unwrap(),
            date(2015, 12, 29)
        );
    }

    #[test]
    fn advance_weeks_ignores_holidays() {
        let cal = cal_2015();
        // 2015-04-24 + 1W = 2015-05-01, a holiday on `cal` but a plain
        // Friday on the weekend-only calendar.
        assert_eq!(
            advance(
                date(2015, 4, 24),
                Offset::new().weeks(1),
                BusinessDayConvention::Following,
                false,
                &cal
            )
            .unwrap(),
            date(2015, 5, 1)
        );
    }
}
