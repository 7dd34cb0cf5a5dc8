use chrono::NaiveDate;

use crate::calendar::{CalendarError, LunarCalendar, LunisolarCalendar};
use crate::models::LunarDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn lunar(year_stem: u8, month: i8, day: u8) -> LunarDate {
    LunarDate {
        year_stem,
        month,
        day,
    }
}

fn convert(d: NaiveDate) -> LunarDate {
    LunisolarCalendar.to_lunar(d).unwrap()
}

#[test]
fn test_epoch_day() {
    // 1900-01-31 is the first day of lunar year 1900 (庚子).
    assert_eq!(convert(date(1900, 1, 31)), lunar(6, 1, 1));
    assert_eq!(convert(date(1900, 2, 1)), lunar(6, 1, 2));
}

#[test]
fn test_chinese_new_year_dates() {
    // (solar new-year day, lunar year stem); 甲 = 0.
    let cases = [
        (date(1950, 2, 17), 6),
        (date(1990, 1, 27), 6),
        (date(2000, 2, 5), 6),
        (date(2008, 2, 7), 4),
        (date(2020, 1, 25), 6),
        (date(2024, 2, 10), 0),
        (date(2025, 1, 29), 1),
        (date(2026, 2, 17), 2),
        (date(2033, 1, 31), 9),
        (date(2044, 1, 30), 0),
        (date(2050, 1, 23), 6),
    ];
    for (solar, stem) in cases {
        assert_eq!(convert(solar), lunar(stem, 1, 1), "new year {solar}");
    }
}

#[test]
fn test_day_before_new_year_is_twelfth_month() {
    // 2024-02-09 is the eve of the 甲辰 new year, still in 癸卯 (stem 9).
    assert_eq!(convert(date(2024, 2, 9)), lunar(9, 12, 30));
}

#[test]
fn test_festival_dates() {
    // Mid-autumn festival: eighth month, fifteenth day.
    assert_eq!(convert(date(2024, 9, 17)), lunar(0, 8, 15));
    assert_eq!(convert(date(2025, 10, 6)), lunar(1, 8, 15));
    // Beijing Olympics opening: 2008-08-08 was 七月初八.
    assert_eq!(convert(date(2008, 8, 8)), lunar(4, 7, 8));
}

#[test]
fn test_leap_month_1990() {
    // 1990 had a leap fifth month starting 1990-06-23.
    assert_eq!(convert(date(1990, 6, 22)), lunar(6, 5, 30));
    assert_eq!(convert(date(1990, 6, 23)), lunar(6, -5, 1));
    assert_eq!(convert(date(1990, 7, 21)), lunar(6, -5, 29));
    assert_eq!(convert(date(1990, 7, 22)), lunar(6, 6, 1));
}

#[test]
fn test_leap_month_2025() {
    // 2025 had a leap sixth month starting 2025-07-25.
    assert_eq!(convert(date(2025, 7, 24)), lunar(1, 6, 30));
    assert_eq!(convert(date(2025, 7, 25)), lunar(1, -6, 1));
    assert_eq!(convert(date(2025, 8, 22)), lunar(1, -6, 29));
    assert_eq!(convert(date(2025, 8, 23)), lunar(1, 7, 1));
}

#[test]
fn test_before_epoch_is_out_of_range() {
    let early = date(1900, 1, 30);
    assert_eq!(
        LunisolarCalendar.to_lunar(early),
        Err(CalendarError::OutOfRange(early))
    );
}

#[test]
fn test_after_table_end_is_out_of_range() {
    // Lunar year 2100 runs through 2101-01-28.
    assert_eq!(convert(date(2100, 12, 31)), lunar(6, 12, 2));
    assert!(LunisolarCalendar.to_lunar(date(2101, 1, 28)).is_ok());
    let late = date(2101, 1, 29);
    assert_eq!(
        LunisolarCalendar.to_lunar(late),
        Err(CalendarError::OutOfRange(late))
    );
}

#[test]
fn test_every_supported_day_converts() {
    // Walk the whole supported range one day at a time; every conversion
    // must succeed with fields in their documented domains, and day must
    // advance by one inside a month.
    let mut d = date(1900, 1, 31);
    let end = date(2101, 1, 28);
    let mut prev: Option<LunarDate> = None;
    while d <= end {
        let lunar = convert(d);
        assert!(lunar.year_stem <= 9, "{d}");
        assert!((1..=12).contains(&lunar.month_number()), "{d}");
        assert!((1..=30).contains(&lunar.day), "{d}");
        if let Some(p) = prev {
            if lunar.month == p.month {
                assert_eq!(lunar.day, p.day + 1, "{d}");
            } else {
                assert_eq!(lunar.day, 1, "{d}");
            }
        }
        prev = Some(lunar);
        d = d.succ_opt().unwrap();
    }
}
