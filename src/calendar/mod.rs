//! Solar-to-lunar calendar conversion.
//!
//! The chart core never computes lunar dates itself; it goes through the
//! [`LunarCalendar`] trait so the converter can be swapped out (or mocked
//! in tests). The default implementation, [`LunisolarCalendar`], is driven
//! by the standard packed month-length table covering lunar years
//! 1900–2100.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ziwei_rust::calendar::{LunarCalendar, LunisolarCalendar};
//!
//! let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
//! let lunar = LunisolarCalendar.to_lunar(date).unwrap();
//! assert_eq!((lunar.year_stem, lunar.month, lunar.day), (6, 5, 23));
//! ```

pub mod lunisolar;
pub mod tables;

#[cfg(test)]
mod lunisolar_tests;

pub use lunisolar::LunisolarCalendar;

use chrono::NaiveDate;

use crate::models::LunarDate;

/// Result type for calendar conversions
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for calendar conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("date {0} is outside the supported lunisolar range (1900-01-31 to 2101-01-28)")]
    OutOfRange(NaiveDate),
}

/// Converts Gregorian dates into traditional lunar dates.
///
/// Implementations must agree with the traditional Chinese lunisolar
/// calendar, including leap-month placement: the star placement downstream
/// depends on the conversion being exact, not approximate.
pub trait LunarCalendar {
    /// Convert a Gregorian date into its lunar equivalent.
    fn to_lunar(&self, date: NaiveDate) -> CalendarResult<LunarDate>;
}
