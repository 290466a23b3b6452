//! Calendar-day keys and week boundaries.
//!
//! All day keys are derived in the server's local zone: two timestamps share
//! a key iff they fall on the same local calendar day. The zone is not
//! threaded through the API on purpose (the frontend assumes the gym's
//! clock); switching to UTC would silently shift every streak and calendar
//! boundary for existing data.

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Spanish weekday names indexed by days-from-Sunday (0=Domingo..6=Sábado),
/// the convention the frontend calendar uses.
pub const DIAS_SEMANA: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Canonical calendar-day key of a stored timestamp.
pub fn day_key(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    DIAS_SEMANA[date.weekday().num_days_from_sunday() as usize]
}

/// Monday of the week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let days_from_monday = (today.weekday().num_days_from_sunday() + 6) % 7;
    today - Duration::days(i64::from(days_from_monday))
}

/// Local midnight of `day` as a UTC instant, for range queries against
/// TIMESTAMPTZ columns.
pub fn local_midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Midnight skipped by a DST jump: fall back to the UTC reading.
        LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}

/// Half-open bounds [midnight, next midnight) of a local calendar day.
pub fn local_day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = day.succ_opt().map_or_else(
        || local_midnight_utc(day) + Duration::days(1),
        local_midnight_utc,
    );
    (local_midnight_utc(day), end)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("2026-08-24", "Lunes")]
    #[case("2026-08-26", "Miércoles")]
    #[case("2026-08-29", "Sábado")]
    #[case("2026-08-30", "Domingo")]
    fn weekday_names_match_the_frontend_convention(#[case] date: &str, #[case] expected: &str) {
        assert_eq!(weekday_name(d(date)), expected);
    }

    #[rstest]
    #[case("2026-08-24", "2026-08-24")] // Monday maps to itself
    #[case("2026-08-26", "2026-08-24")]
    #[case("2026-08-29", "2026-08-24")]
    #[case("2026-08-30", "2026-08-24")] // Sunday still belongs to the past Monday
    #[case("2026-08-31", "2026-08-31")]
    fn week_starts_on_monday(#[case] today: &str, #[case] monday: &str) {
        assert_eq!(week_start(d(today)), d(monday));
    }

    #[test]
    fn day_keys_preserve_timestamp_order() {
        let base = Utc::now();
        let mut prev = day_key(base);
        for hours in 1..72 {
            let key = day_key(base + Duration::hours(hours));
            assert!(key >= prev);
            prev = key;
        }
    }

    #[test]
    fn day_bounds_are_half_open_and_one_day_wide() {
        let (start, end) = local_day_bounds(d("2026-08-26"));
        assert_eq!(end - start, Duration::days(1));
        assert_eq!(day_key(start), d("2026-08-26"));
        assert_eq!(day_key(end), d("2026-08-27"));
    }
}
