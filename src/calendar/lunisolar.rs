//! Table-driven lunisolar calendar implementation.

use chrono::NaiveDate;

use super::tables::{
    leap_month, leap_month_days, month_days, year_days, FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR,
};
use super::{CalendarError, CalendarResult, LunarCalendar};
use crate::models::LunarDate;

/// Stem offset of the epoch cycle: year 4 CE was a 甲 year, so the stem of
/// lunar year `y` is `(y - 4) mod 10`.
const STEM_EPOCH_YEAR: i32 = 4;

/// Default solar-to-lunar converter.
///
/// Walks day offsets from the table epoch (1900-01-31, the first day of
/// lunar year 1900) through whole lunar years, then through the months of
/// the final year, inserting the leap month after its regular month. A
/// stateless unit struct; conversions are pure and safe to run from any
/// thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunisolarCalendar;

impl LunisolarCalendar {
    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 31).unwrap_or(NaiveDate::MIN)
    }
}

impl LunarCalendar for LunisolarCalendar {
    fn to_lunar(&self, date: NaiveDate) -> CalendarResult<LunarDate> {
        let mut offset = date.signed_duration_since(Self::epoch()).num_days();
        if offset < 0 {
            return Err(CalendarError::OutOfRange(date));
        }

        let mut year = FIRST_LUNAR_YEAR;
        loop {
            if year > LAST_LUNAR_YEAR {
                return Err(CalendarError::OutOfRange(date));
            }
            let days = i64::from(year_days(year));
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap = leap_month(year);
        let mut month = 1u8;
        let mut in_leap = false;
        loop {
            let days = i64::from(if in_leap {
                leap_month_days(year)
            } else {
                month_days(year, month)
            });
            if offset < days {
                break;
            }
            offset -= days;
            // The leap month repeats its regular month's number and is
            // walked immediately after it.
            if !in_leap && month == leap {
                in_leap = true;
            } else {
                in_leap = false;
                month += 1;
            }
        }

        let year_stem = (year - STEM_EPOCH_YEAR).rem_euclid(10) as u8;
        let month = if in_leap {
            -(month as i8)
        } else {
            month as i8
        };
        let day = (offset + 1) as u8;
        log::debug!("{date} -> lunar year {year} (stem {year_stem}) month {month} day {day}");

        Ok(LunarDate {
            year_stem,
            month,
            day,
        })
    }
}
