//! Calendar-date sun sign classification.
//!
//! Maps a birth date to its tropical sun sign using the conventional fixed
//! date ranges. No ephemeris is involved, so this is the floor every
//! degraded chart stands on.

use crate::western::types::ZodiacSign;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Inclusive date range claimed by one sign
#[derive(Debug, Clone, Copy)]
pub struct SignRange {
    pub sign: ZodiacSign,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

const fn range(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> SignRange {
    SignRange {
        sign,
        start_month: start.0,
        start_day: start.1,
        end_month: end.0,
        end_day: end.1,
    }
}

pub const SIGN_RANGES: [SignRange; 12] = [
    range(ZodiacSign::Aries, (3, 21), (4, 19)),
    range(ZodiacSign::Taurus, (4, 20), (5, 20)),
    range(ZodiacSign::Gemini, (5, 21), (6, 20)),
    range(ZodiacSign::Cancer, (6, 21), (7, 22)),
    range(ZodiacSign::Leo, (7, 23), (8, 22)),
    range(ZodiacSign::Virgo, (8, 23), (9, 22)),
    range(ZodiacSign::Libra, (9, 23), (10, 22)),
    range(ZodiacSign::Scorpio, (10, 23), (11, 21)),
    range(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    range(ZodiacSign::Capricorn, (12, 22), (1, 19)),
    range(ZodiacSign::Aquarius, (1, 20), (2, 18)),
    range(ZodiacSign::Pisces, (2, 19), (3, 20)),
];

impl SignRange {
    pub fn contains(&self, month: u32, day: u32) -> bool {
        if self.start_month == self.end_month {
            month == self.start_month && (self.start_day..=self.end_day).contains(&day)
        } else {
            // Cross-month and year-wrap ranges (Capricorn) share one form
            (month == self.start_month && day >= self.start_day)
                || (month == self.end_month && day <= self.end_day)
        }
    }
}

/// Sun sign for a calendar (month, day). Total: out-of-table input lands on Aries.
pub fn classify(month: u32, day: u32) -> ZodiacSign {
    SIGN_RANGES
        .iter()
        .find(|r| r.contains(month, day))
        .map(|r| r.sign)
        .unwrap_or(ZodiacSign::Aries)
}

/// Sun sign for a date, read at local noon.
pub fn classify_date(date: NaiveDate) -> ZodiacSign {
    let anchored = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
    classify(anchored.month(), anchored.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cusp_days() {
        assert_eq!(classify(3, 20), ZodiacSign::Pisces);
        assert_eq!(classify(3, 21), ZodiacSign::Aries);
        assert_eq!(classify(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(classify(12, 22), ZodiacSign::Capricorn);
        assert_eq!(classify(1, 19), ZodiacSign::Capricorn);
        assert_eq!(classify(1, 20), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_classify_date_uses_calendar_day() {
        let date = NaiveDate::from_ymd_opt(1995, 6, 15).unwrap();
        assert_eq!(classify_date(date), ZodiacSign::Gemini);
        let leap = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(classify_date(leap), ZodiacSign::Pisces);
    }
}
