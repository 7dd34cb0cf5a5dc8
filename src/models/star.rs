//! The fourteen major stars of the Ziwei and Tianfu series.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fourteen major stars. The first six belong to the Ziwei series,
/// the remaining eight to the Tianfu series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
}

/// All fourteen major stars, Ziwei series first.
pub const ALL_STARS: [Star; 14] = [
    Star::Ziwei,
    Star::Tianji,
    Star::Taiyang,
    Star::Wuqu,
    Star::Tiantong,
    Star::Lianzhen,
    Star::Tianfu,
    Star::Taiyin,
    Star::Tanlang,
    Star::Jumen,
    Star::Tianxiang,
    Star::Tianliang,
    Star::Qisha,
    Star::Pojun,
];

impl Star {
    /// Traditional Chinese name. Downstream fortune-text lookups key on
    /// these exact labels, so they must not be altered.
    pub fn name(self) -> &'static str {
        match self {
            Star::Ziwei => "紫微",
            Star::Tianji => "天機",
            Star::Taiyang => "太陽",
            Star::Wuqu => "武曲",
            Star::Tiantong => "天同",
            Star::Lianzhen => "廉貞",
            Star::Tianfu => "天府",
            Star::Taiyin => "太陰",
            Star::Tanlang => "貪狼",
            Star::Jumen => "巨門",
            Star::Tianxiang => "天相",
            Star::Tianliang => "天梁",
            Star::Qisha => "七殺",
            Star::Pojun => "破軍",
        }
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
