//! Offset tables of the Ziwei and Tianfu star series.
//!
//! Each series is anchored to its reference star: the tables map the
//! circular offset from the reference position to the star occupying that
//! palace. Offsets missing from a table are palaces left empty by that
//! series. The entries reproduce the traditional placement convention and
//! must not be edited.

use crate::models::Star;

/// Ziwei-series stars by offset measured backward from the Ziwei palace.
pub const ZIWEI_SERIES: [(u8, Star); 6] = [
    (0, Star::Ziwei),
    (1, Star::Tianji),
    (3, Star::Taiyang),
    (4, Star::Wuqu),
    (5, Star::Tiantong),
    (8, Star::Lianzhen),
];

/// Tianfu-series stars by offset measured forward from the Tianfu palace.
pub const TIANFU_SERIES: [(u8, Star); 8] = [
    (0, Star::Tianfu),
    (1, Star::Taiyin),
    (2, Star::Tanlang),
    (3, Star::Jumen),
    (4, Star::Tianxiang),
    (5, Star::Tianliang),
    (6, Star::Qisha),
    (10, Star::Pojun),
];

/// Ziwei-series star at the given offset, if that palace is occupied.
pub fn ziwei_star_at(offset: u8) -> Option<Star> {
    ZIWEI_SERIES
        .iter()
        .find(|(o, _)| *o == offset)
        .map(|(_, star)| *star)
}

/// Tianfu-series star at the given offset, if that palace is occupied.
pub fn tianfu_star_at(offset: u8) -> Option<Star> {
    TIANFU_SERIES
        .iter()
        .find(|(o, _)| *o == offset)
        .map(|(_, star)| *star)
}
