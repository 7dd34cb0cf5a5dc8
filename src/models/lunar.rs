//! Lunar date representation with cyclical year stem.

use serde::{Deserialize, Serialize};

/// The ten heavenly stems in cycle order (甲 = 0).
pub const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches in cycle order (子 = 0).
pub const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// A date on the traditional lunisolar calendar.
///
/// Only the fields the chart placement needs are carried: the cyclical stem
/// of the lunar year, the month, and the day of month. A negative `month`
/// magnitude marks a leap month; for placement purposes a leap month is
/// treated as the regular month of the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Stem index of the lunar year, 0..=9 (甲 = 0).
    pub year_stem: u8,
    /// Lunar month; magnitude 1..=12, negative for a leap month.
    pub month: i8,
    /// Day of the lunar month, 1..=30.
    pub day: u8,
}

impl LunarDate {
    /// Month number with the leap-month sign stripped, 1..=12.
    pub fn month_number(&self) -> u8 {
        self.month.unsigned_abs()
    }

    /// True when this date falls in a leap (閏) month.
    pub fn is_leap_month(&self) -> bool {
        self.month < 0
    }

    /// Traditional label of the year stem.
    pub fn year_stem_name(&self) -> &'static str {
        STEM_NAMES[usize::from(self.year_stem) % STEM_NAMES.len()]
    }
}
