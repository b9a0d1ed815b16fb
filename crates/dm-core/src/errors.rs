//! Error types for datemath.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report.  The `ensure!` macro gives argument checks a compact early-return
//! form.

use thiserror::Error;

/// The top-level error type used throughout datemath.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or date arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A value could not be interpreted (unknown convention, weekday, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout datemath.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dm_core::{ensure, errors::Error};
/// fn month(m: u8) -> dm_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
