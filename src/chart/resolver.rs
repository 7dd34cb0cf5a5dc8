//! Life-star resolution at the fixed observation palace.
//!
//! The pipeline: convert the birth date to a lunar date, locate the life
//! palace from lunar month and hour branch, derive the ju, place Ziwei and
//! Tianfu, then read off which series stars sit in the 午 palace. When 午
//! is empty, the stars are read from the opposite 子 palace instead.

use serde::{Deserialize, Serialize};

use crate::calendar::LunarCalendar;
use crate::chart::ju::compute_ju;
use crate::chart::placement::{tianfu_position, ziwei_position};
use crate::chart::stars::{tianfu_star_at, ziwei_star_at};
use crate::error::ChartResult;
use crate::models::{BirthInput, HourBranch, LunarDate, Star, BRANCH_NAMES};

/// The fixed observation palace: 午.
pub const WU_PALACE: u8 = 6;

/// The palace diametrically opposite 午: 子.
pub const ZI_PALACE: u8 = 0;

/// A fully resolved chart, with every intermediate value exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeChart {
    /// Converted lunar birth date.
    pub lunar: LunarDate,
    /// Life-palace branch index, 0..=11.
    pub life_palace: u8,
    /// Structural constant, 2..=6.
    pub ju: u8,
    /// Palace occupied by Ziwei, 0..=11.
    pub ziwei: u8,
    /// Palace occupied by Tianfu, 0..=11.
    pub tianfu: u8,
    /// Star(s) governing the observation palace, in display order.
    pub stars: Vec<Star>,
    /// True when 午 was empty and the stars were read from 子 instead.
    pub from_opposite: bool,
}

impl LifeChart {
    /// Display label: star names joined with `+`.
    pub fn star_label(&self) -> String {
        self.stars
            .iter()
            .map(|star| star.name())
            .collect::<Vec<_>>()
            .join("+")
    }

    /// First star of the result. Downstream fortune-text lookups fall back
    /// to this when a pair has no dedicated entry.
    pub fn primary(&self) -> Option<Star> {
        self.stars.first().copied()
    }
}

/// Life-palace branch for a lunar month (1..=12) and hour branch.
///
/// Count forward from 寅 by `month - 1` palaces, then back by the hour
/// index.
pub fn life_palace_branch(lunar_month: u8, hour_branch: HourBranch) -> u8 {
    (2 + i16::from(lunar_month) - 1 - i16::from(hour_branch.index())).rem_euclid(12) as u8
}

/// Series stars found at `palace`, Ziwei-series hit first.
///
/// The Ziwei series is walked backward from its reference palace and the
/// Tianfu series forward, matching the direction conventions of the two
/// offset tables.
pub fn stars_at_palace(palace: u8, ziwei: u8, tianfu: u8) -> Vec<Star> {
    let mut found = Vec::with_capacity(2);
    let ziwei_offset = (i16::from(ziwei) - i16::from(palace)).rem_euclid(12) as u8;
    if let Some(star) = ziwei_star_at(ziwei_offset) {
        found.push(star);
    }
    let tianfu_offset = (i16::from(palace) - i16::from(tianfu)).rem_euclid(12) as u8;
    if let Some(star) = tianfu_star_at(tianfu_offset) {
        found.push(star);
    }
    found
}

/// Canonical display order for a co-located pair: 紫微 leads any pair it
/// appears in, and 廉貞+貪狼 is always rendered in that order.
pub(crate) fn order_pair(stars: &mut Vec<Star>) {
    if stars.len() < 2 {
        return;
    }
    if stars.contains(&Star::Ziwei) {
        stars.sort_by_key(|star| *star != Star::Ziwei);
    } else if stars.contains(&Star::Lianzhen) && stars.contains(&Star::Tanlang) {
        *stars = vec![Star::Lianzhen, Star::Tanlang];
    }
}

/// Resolve a chart from an already-converted lunar date.
///
/// This is the pure tail of the pipeline: everything after calendar
/// conversion depends only on the lunar date and the hour branch.
pub fn resolve_chart_from_lunar(lunar: LunarDate, hour_branch: HourBranch) -> LifeChart {
    let life_palace = life_palace_branch(lunar.month_number(), hour_branch);
    let ju = compute_ju(lunar.year_stem, life_palace);
    let ziwei = ziwei_position(lunar.day, ju);
    let tianfu = tianfu_position(ziwei);

    let mut stars = stars_at_palace(WU_PALACE, ziwei, tianfu);
    let from_opposite = stars.is_empty();
    if from_opposite {
        stars = stars_at_palace(ZI_PALACE, ziwei, tianfu);
    } else {
        order_pair(&mut stars);
    }

    log::debug!(
        "life palace {} ju {} ziwei {} tianfu {} -> {:?} (opposite: {})",
        BRANCH_NAMES[usize::from(life_palace)],
        ju,
        ziwei,
        tianfu,
        stars,
        from_opposite,
    );

    LifeChart {
        lunar,
        life_palace,
        ju,
        ziwei,
        tianfu,
        stars,
        from_opposite,
    }
}

/// Resolve the full chart for a birth input.
pub fn resolve_chart<C: LunarCalendar + ?Sized>(
    calendar: &C,
    birth: &BirthInput,
) -> ChartResult<LifeChart> {
    let date = birth.solar_date()?;
    let lunar = calendar.to_lunar(date)?;
    Ok(resolve_chart_from_lunar(lunar, birth.hour_branch))
}

/// Resolve the star label governing the observation palace for a birth
/// date and hour-branch index.
///
/// The returned string is a single star name, or two names joined with
/// `+` when the palace holds a pair.
pub fn resolve_life_star<C: LunarCalendar + ?Sized>(
    calendar: &C,
    year: i32,
    month: u32,
    day: u32,
    hour_branch: u8,
) -> ChartResult<String> {
    let birth = BirthInput::from_raw(year, month, day, hour_branch)?;
    Ok(resolve_chart(calendar, &birth)?.star_label())
}
