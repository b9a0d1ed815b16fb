//! Yearly calendar: holidays fetched one year at a time and cached.
//!
//! The holiday source is injected as a closure taking a year and returning
//! the holidays of that year together with a reason for each.  The first
//! query touching a year calls the closure; the result is kept for the life
//! of the calendar.

use crate::calendar::{Calendar, Weekends};
use crate::date::Date;
use dm_core::Year;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Holidays of one year, keyed by date, with the reason for each.
pub type HolidayMap = HashMap<Date, String>;

type FetchHolidays = dyn Fn(Year) -> HolidayMap + Send + Sync;

/// A calendar that computes its holidays on demand, per year.
///
/// The cache sits behind an `RwLock`.  Two threads racing on the same unseen
/// year may both call the fetch closure; the first result stored wins.
pub struct YearlyCalendar {
    name: String,
    weekends: Weekends,
    fetch_holidays: Box<FetchHolidays>,
    cache: RwLock<HashMap<Year, Arc<HolidayMap>>>,
}

impl std::fmt::Debug for YearlyCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YearlyCalendar")
            .field("name", &self.name)
            .field("weekends", &self.weekends)
            .field("cached_years", &self.cached_years())
            .finish()
    }
}

impl YearlyCalendar {
    /// Create a calendar from a name, weekend set and holiday source.
    ///
    /// `fetch_holidays` must be deterministic: it is called at most once per
    /// year and its answer is never refreshed.
    pub fn new<F>(name: impl Into<String>, weekends: Weekends, fetch_holidays: F) -> Self
    where
        F: Fn(Year) -> HolidayMap + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            weekends,
            fetch_holidays: Box::new(fetch_holidays),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the weekend days.
    pub fn weekends(&self) -> Weekends {
        self.weekends
    }

    /// Return the holidays of `year`, fetching them on first use.
    pub fn holidays_for_year(&self, year: Year) -> Arc<HolidayMap> {
        if let Some(holidays) = self
            .cache
            .read()
            .expect("holiday cache lock poisoned")
            .get(&year)
        {
            trace!(calendar = %self.name, year, "holiday cache hit");
            return Arc::clone(holidays);
        }

        let fetched = Arc::new((self.fetch_holidays)(year));
        debug!(
            calendar = %self.name,
            year,
            holidays = fetched.len(),
            "fetched holidays"
        );
        let mut cache = self.cache.write().expect("holiday cache lock poisoned");
        Arc::clone(cache.entry(year).or_insert(fetched))
    }

    /// Return the reason `date` is a holiday, or `None` if it is not one.
    pub fn holiday_reason(&self, date: Date) -> Option<String> {
        self.holidays_for_year(date.year()).get(&date).cloned()
    }

    /// Return the years whose holidays are currently cached, ascending.
    pub fn cached_years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self
            .cache
            .read()
            .expect("holiday cache lock poisoned")
            .keys()
            .copied()
            .collect();
        years.sort_unstable();
        years
    }
}

impl Calendar for YearlyCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekends.contains(date.weekday())
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays_for_year(date.year()).contains_key(&date)
    }
}
