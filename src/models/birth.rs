//! Birth input: a solar calendar date plus a two-hour branch slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// The twelve hour branches (時辰), each covering two clock hours.
///
/// 子 spans 23:00–01:00, 丑 spans 01:00–03:00, and so on around the clock
/// to 亥 at 21:00–23:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve hour branches in cycle order (index 0 = 子).
pub const ALL_HOUR_BRANCHES: [HourBranch; 12] = [
    HourBranch::Zi,
    HourBranch::Chou,
    HourBranch::Yin,
    HourBranch::Mao,
    HourBranch::Chen,
    HourBranch::Si,
    HourBranch::Wu,
    HourBranch::Wei,
    HourBranch::Shen,
    HourBranch::You,
    HourBranch::Xu,
    HourBranch::Hai,
];

impl HourBranch {
    /// Cycle index of this branch, 0..=11 (子 = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Branch for a cycle index in 0..=11.
    pub fn from_index(index: u8) -> ChartResult<Self> {
        ALL_HOUR_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or_else(|| {
                ChartError::InvalidInput(format!("hour branch index {index} outside 0..=11"))
            })
    }

    /// Branch containing the given clock hour (0..=23).
    ///
    /// Hour 23 and hour 0 both fall in 子; each later branch starts on an
    /// odd hour.
    pub fn from_clock_hour(hour: u8) -> ChartResult<Self> {
        if hour > 23 {
            return Err(ChartError::InvalidInput(format!(
                "clock hour {hour} outside 0..=23"
            )));
        }
        Self::from_index(((hour + 1) / 2) % 12)
    }

    /// Traditional Chinese label of this branch.
    pub fn name(self) -> &'static str {
        super::lunar::BRANCH_NAMES[self.index() as usize]
    }
}

/// Solar birth data: a Gregorian date plus an hour branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour_branch: HourBranch,
}

impl BirthInput {
    pub fn new(year: i32, month: u32, day: u32, hour_branch: HourBranch) -> Self {
        Self {
            year,
            month,
            day,
            hour_branch,
        }
    }

    /// Build from raw integers, validating the hour-branch index.
    pub fn from_raw(year: i32, month: u32, day: u32, hour_branch: u8) -> ChartResult<Self> {
        Ok(Self::new(
            year,
            month,
            day,
            HourBranch::from_index(hour_branch)?,
        ))
    }

    /// The Gregorian date of this input, rejecting impossible dates
    /// (for example February 30th).
    pub fn solar_date(&self) -> ChartResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            ChartError::InvalidInput(format!(
                "{:04}-{:02}-{:02} is not a valid calendar date",
                self.year, self.month, self.day
            ))
        })
    }
}
