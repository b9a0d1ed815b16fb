//! Easter Sunday.

use crate::date::Date;
use dm_core::errors::Result;
use dm_core::Year;

/// Return the date of Easter Sunday in `year` (Gregorian computus).
///
/// ```
/// use dm_time::arithmetic::easter;
/// use dm_time::Date;
///
/// assert_eq!(easter(2019).unwrap(), Date::from_ymd(2019, 4, 21).unwrap());
/// ```
pub fn easter(year: Year) -> Result<Date> {
    let y = year;
    let g = y.rem_euclid(19) + 1; // golden number
    let c = y.div_euclid(100) + 1; // century
    let x = (3 * c).div_euclid(4) - 12; // dropped leap years
    let z = (8 * c + 5).div_euclid(25) - 5; // moon orbit correction
    let d = (5 * y).div_euclid(4) - x - 10; // March ((-d) mod 7) is a Sunday
    let e1 = 11 * g + 20 + z - x;

    // epact; e1 goes negative for some far-future years (14250: g = 1,
    // z = 40, x = 95 gives e1 = -24)
    let mut e = e1 % 30;
    while e < 0 {
        e += 30;
    }
    if (e == 25 && g > 11) || e == 24 {
        e += 1;
    }

    // full moon, then the following Sunday
    let mut n = 44 - e;
    if n < 21 {
        n += 30;
    }
    let n = n + 7 - (d + n).rem_euclid(7);

    if n > 31 {
        Date::from_ymd(year, 4, (n - 31) as u8)
    } else {
        Date::from_ymd(year, 3, n as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easters() {
        let expected = [
            (2001, 4, 15),
            (2002, 3, 31),
            (2003, 4, 20),
            (2004, 4, 11),
            (2005, 3, 27),
            (2006, 4, 16),
            (2007, 4, 8),
            (2008, 3, 23),
            (2009, 4, 12),
            (2010, 4, 4),
            (2011, 4, 24),
            (2012, 4, 8),
            (2013, 3, 31),
            (2014, 4, 20),
            (2015, 4, 5),
            (2016, 3, 27),
            (2017, 4, 16),
            (2018, 4, 1),
            (2019, 4, 21),
            (2020, 4, 12),
            (2021, 4, 4),
        ];
        for (y, m, d) in expected {
            assert_eq!(easter(y).unwrap(), Date::from_ymd(y, m, d).unwrap(), "Easter {y}");
        }
    }

    #[test]
    fn always_a_sunday_in_march_or_april() {
        use crate::day_of_week::DayOfWeek;
        for y in [1583, 1700, 1818, 1900, 2285, 3000, 14250, 99_999] {
            let e = easter(y).unwrap();
            assert_eq!(e.weekday(), DayOfWeek::Sunday, "Easter {y} = {e}");
            assert!(matches!(e.month(), 3 | 4), "Easter {y} = {e}");
        }
    }
}
