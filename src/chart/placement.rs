//! Circular placement of the two reference stars.
//!
//! Ziwei is placed by the traditional day-count rule anchored at the 寅
//! palace; Tianfu is not placed independently but mirrors Ziwei across the
//! 寅/申 axis.

/// Anchor palace of the placement walk (寅 = index 2).
const YIN_PALACE: u8 = 2;

/// Palace occupied by Ziwei for a lunar day (1..=30) and ju (2..=6).
///
/// With `q = day / ju` and `r = day % ju`: an exact multiple lands `q - 1`
/// palaces past the anchor; otherwise the walk overshoots to `q` palaces
/// past the anchor and steps `ju - r` palaces backward when that distance
/// is odd, forward when it is even.
pub fn ziwei_position(lunar_day: u8, ju: u8) -> u8 {
    let q = lunar_day / ju;
    let r = lunar_day % ju;
    if r == 0 {
        return (YIN_PALACE + q - 1) % 12;
    }
    let base = i16::from((YIN_PALACE + q) % 12);
    let diff = i16::from(ju - r);
    if diff % 2 != 0 {
        (base - diff).rem_euclid(12) as u8
    } else {
        ((base + diff) % 12) as u8
    }
}

/// Palace occupied by Tianfu: the fixed mirror of Ziwei across 寅/申.
pub fn tianfu_position(ziwei: u8) -> u8 {
    (4 - i16::from(ziwei)).rem_euclid(12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_always_in_domain() {
        // 150 cases; check all of them.
        for day in 1..=30u8 {
            for ju in 2..=6u8 {
                let pos = ziwei_position(day, ju);
                assert!(pos < 12, "day {day} ju {ju} gave {pos}");
            }
        }
    }

    #[test]
    fn test_first_day_anchors() {
        // Traditional first-day placements for each ju.
        assert_eq!(ziwei_position(1, 2), 1); // 水二局 -> 丑
        assert_eq!(ziwei_position(1, 3), 4); // 木三局 -> 辰
        assert_eq!(ziwei_position(1, 4), 11); // 金四局 -> 亥
        assert_eq!(ziwei_position(1, 5), 6); // 土五局 -> 午
        assert_eq!(ziwei_position(1, 6), 9); // 火六局 -> 酉
    }

    #[test]
    fn test_exact_multiples_walk_from_yin() {
        // 水二局: days 2, 4, 6 land on 寅, 卯, 辰.
        assert_eq!(ziwei_position(2, 2), 2);
        assert_eq!(ziwei_position(4, 2), 3);
        assert_eq!(ziwei_position(6, 2), 4);
    }

    #[test]
    fn test_fixture_day_23_ju_6() {
        assert_eq!(ziwei_position(23, 6), 4);
    }

    #[test]
    fn test_tianfu_mirror() {
        for ziwei in 0..12u8 {
            let tianfu = tianfu_position(ziwei);
            assert!(tianfu < 12);
            assert_eq!((i16::from(ziwei) + i16::from(tianfu)).rem_euclid(12), 4);
        }
        // The axis palaces mirror onto themselves.
        assert_eq!(tianfu_position(2), 2);
        assert_eq!(tianfu_position(8), 8);
    }
}
