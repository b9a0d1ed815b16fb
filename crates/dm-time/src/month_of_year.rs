//! `MonthOfYear`: month-of-year enum.

use dm_core::errors::{Error, Result};

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MonthOfYear {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl MonthOfYear {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(MonthOfYear::January),
            2 => Some(MonthOfYear::February),
            3 => Some(MonthOfYear::March),
            4 => Some(MonthOfYear::April),
            5 => Some(MonthOfYear::May),
            6 => Some(MonthOfYear::June),
            7 => Some(MonthOfYear::July),
            8 => Some(MonthOfYear::August),
            9 => Some(MonthOfYear::September),
            10 => Some(MonthOfYear::October),
            11 => Some(MonthOfYear::November),
            12 => Some(MonthOfYear::December),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the quarter (1–4) the month belongs to.
    pub fn quarter(&self) -> u8 {
        use MonthOfYear::*;
        match self {
            January | February | March => 1,
            April | May | June => 2,
            July | August | September => 3,
            October | November | December => 4,
        }
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            MonthOfYear::January => "Jan",
            MonthOfYear::February => "Feb",
            MonthOfYear::March => "Mar",
            MonthOfYear::April => "Apr",
            MonthOfYear::May => "May",
            MonthOfYear::June => "Jun",
            MonthOfYear::July => "Jul",
            MonthOfYear::August => "Aug",
            MonthOfYear::September => "Sep",
            MonthOfYear::October => "Oct",
            MonthOfYear::November => "Nov",
            MonthOfYear::December => "Dec",
        }
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            MonthOfYear::January => "January",
            MonthOfYear::February => "February",
            MonthOfYear::March => "March",
            MonthOfYear::April => "April",
            MonthOfYear::May => "May",
            MonthOfYear::June => "June",
            MonthOfYear::July => "July",
            MonthOfYear::August => "August",
            MonthOfYear::September => "September",
            MonthOfYear::October => "October",
            MonthOfYear::November => "November",
            MonthOfYear::December => "December",
        }
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Self::from_number(n)
            .ok_or_else(|| Error::InvalidArgument(format!("month {n} out of range [1, 12]")))
    }
}

impl std::fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<MonthOfYear> for u8 {
    fn from(m: MonthOfYear) -> u8 {
        m as u8
    }
}
