//! ISO-week date resolution.

use chrono::{Datelike, Duration, NaiveDate};

use crate::weekday::Weekday;

/// Resolve `(reference_year, week, weekday)` to a calendar date.
///
/// Monday of ISO week 1 is the Monday on or before January 4 (week 1 is
/// the week containing the year's first Thursday). From that anchor it is
/// pure day-count arithmetic, so months and leap years never enter into
/// it. Returns `None` only for week 0 or a date outside chrono's range.
pub fn resolve_date(reference_year: i32, week: u32, weekday: Weekday) -> Option<NaiveDate> {
    if week == 0 {
        return None;
    }
    let jan4 = NaiveDate::from_ymd_opt(reference_year, 1, 4)?;
    let week1_monday = jan4 - Duration::days(i64::from(jan4.weekday().num_days_from_monday()));
    week1_monday.checked_add_signed(Duration::days(
        i64::from(week - 1) * 7 + i64::from(weekday.index()),
    ))
}

/// The ISO year containing `today`.
///
/// Differs from the calendar year around New Year: the last days of
/// December can belong to week 1 of the next ISO year, and the first days
/// of January to week 52/53 of the previous one.
pub fn default_reference_year(today: NaiveDate) -> i32 {
    today.iso_week().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::ALL;

    #[test]
    fn test_known_date() {
        assert_eq!(
            resolve_date(2026, 8, Weekday::Monday),
            NaiveDate::from_ymd_opt(2026, 2, 16)
        );
    }

    #[test]
    fn test_resolved_dates_round_trip_through_iso_weeks() {
        for year in 2015..=2030 {
            for week in 1..=52u32 {
                for day in ALL {
                    let date = resolve_date(year, week, day).unwrap();
                    assert_eq!(date.iso_week().year(), year, "{year}-W{week}");
                    assert_eq!(date.iso_week().week(), week, "{year}-W{week}");
                    assert_eq!(date.weekday().num_days_from_monday(), day.index());
                }
            }
        }
    }

    #[test]
    fn test_week_53_in_a_53_week_year() {
        // 2026 is an ISO year with 53 weeks
        let date = resolve_date(2026, 53, Weekday::Friday).unwrap();
        assert_eq!(date.iso_week().year(), 2026);
        assert_eq!(date.iso_week().week(), 53);
        assert_eq!(date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }

    #[test]
    fn test_week_zero_rejected() {
        assert_eq!(resolve_date(2026, 0, Weekday::Monday), None);
    }

    #[test]
    fn test_reference_year_around_new_year() {
        // 2025-12-29 is a Monday in week 1 of ISO year 2026
        let late_december = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        assert_eq!(default_reference_year(late_december), 2026);

        // 2027-01-01 is a Friday in week 53 of ISO year 2026
        let early_january = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert_eq!(default_reference_year(early_january), 2026);

        let midyear = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(default_reference_year(midyear), 2026);
    }
}
