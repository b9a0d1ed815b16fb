//! # datemath
//!
//! Business-day calendars and date arithmetic: adjusting dates by business
//! day conventions, stepping by business days, shifting by months with an
//! end-of-month rule, and computing Easter and quarter/week helpers.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dm-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! datemath = "0.1"
//! ```
//!
//! ```rust
//! use datemath::time::arithmetic::{add_months, adjust};
//! use datemath::time::{BusinessDayConvention, Date, WeekendsOnly};
//!
//! let d = Date::from_ymd(2015, 1, 31)?;
//! let end_feb = add_months(d, 1, true)?;
//! assert_eq!(end_feb.to_string(), "2015-02-28");
//!
//! // 2015-02-28 is a Saturday; modified following stays in February.
//! let paid = adjust(end_feb, BusinessDayConvention::ModifiedFollowing, true, &WeekendsOnly)?;
//! assert_eq!(paid.to_string(), "2015-02-27");
//! # Ok::<(), datemath::core::Error>(())
//! ```
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` for dates, enums, offsets, weekend
//!   sets and fixed calendars.
//! * `chrono`: conversions between `Date` and `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and shared aliases.
pub use dm_core as core;

/// Dates, calendars, conventions, and date arithmetic.
pub use dm_time as time;

pub use dm_core::{Error, Result};
