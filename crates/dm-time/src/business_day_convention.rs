//! Business-day convention.

use dm_core::errors::{Error, Result};

/// How to adjust a date that falls on a non-business day.
///
/// The discriminants are stable (`None` = 0 … `ModifiedFollowing` = 5) so
/// conventions can be stored as integers and converted back with
/// [`TryFrom<u8>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BusinessDayConvention {
    /// Do not adjust (keep the original date, business day or not).
    None = 0,
    /// Choose the nearest business day.  Ties are broken by the
    /// `prefer_forward` flag passed to the adjustment.
    Nearest = 1,
    /// Choose the first business day before the given holiday.
    Preceding = 2,
    /// Choose the first business day after the given holiday.
    #[default]
    Following = 3,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding = 4,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing = 5,
}

impl BusinessDayConvention {
    /// All conventions in ordinal order.
    pub const ALL: [BusinessDayConvention; 6] = [
        BusinessDayConvention::None,
        BusinessDayConvention::Nearest,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::ModifiedFollowing,
    ];
}

impl TryFrom<u8> for BusinessDayConvention {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Self::ALL.get(n as usize).copied().ok_or_else(|| {
            Error::InvalidArgument(format!("unknown business day convention {n}"))
        })
    }
}

impl TryFrom<i32> for BusinessDayConvention {
    type Error = Error;

    fn try_from(n: i32) -> Result<Self> {
        u8::try_from(n)
            .map_err(|_| Error::InvalidArgument(format!("unknown business day convention {n}")))
            .and_then(<Self as TryFrom<u8>>::try_from)
    }
}

impl From<BusinessDayConvention> for u8 {
    fn from(c: BusinessDayConvention) -> u8 {
        c as u8
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = Error;

    /// Parse the usual market spellings, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "none" | "unadjusted" => Ok(BusinessDayConvention::None),
            "nearest" => Ok(BusinessDayConvention::Nearest),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            _ => Err(Error::InvalidArgument(format!(
                "unknown business day convention {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::None => "None",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        for (i, c) in BusinessDayConvention::ALL.iter().enumerate() {
            assert_eq!(u8::from(*c) as usize, i);
            assert_eq!(BusinessDayConvention::try_from(i as u8).unwrap(), *c);
        }
    }

    #[test]
    fn unknown_ordinal_is_invalid_argument() {
        assert!(matches!(
            BusinessDayConvention::try_from(6u8),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            BusinessDayConvention::try_from(-1i32),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn parse_market_spellings() {
        assert_eq!(
            "Modified Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "modified_preceding".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedPreceding
        );
        assert!("sideways".parse::<BusinessDayConvention>().is_err());
    }

    #[test]
    fn default_is_following() {
        assert_eq!(
            BusinessDayConvention::default(),
            BusinessDayConvention::Following
        );
    }
}
