//! Streaks, monthly calendar, badges and the adherence/volume summary.
//!
//! Each figure is a pure function of explicitly passed rows plus a `today`
//! day-key; the async wrappers only fetch rows through [`StatsRepository`]
//! and convert timestamps to day keys. The badges wrapper reuses
//! [`compute_streaks`] instead of carrying its own copy of the scan.

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, Local, NaiveDate};
use sqlx::PgPool;

use crate::dto::stats::{
    Badge, BadgesResponse, CalendarDay, CalendarResponse, ResumenResponse, SerieVolumen,
    StreakSummary,
};
use crate::error::Result;
use crate::repository::stats::StatsRepository;
use crate::services::dates::{day_key, local_midnight_utc, week_start, weekday_name};

/// Sessions older than this do not influence streaks.
pub const LOOKBACK_DAYS: i64 = 180;

/// Trailing window of the series/volume summary.
pub const RESUMEN_WINDOW_DAYS: i64 = 7;

/// Streak figures over a deduplicated set of active day-keys.
pub fn streaks_for_days(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in days {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    // The current streak survives until the day is over: when today has no
    // sesión yet, yesterday still counts as the reference day.
    let reference = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut current = 0u32;
    let mut cursor = reference;
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        current += 1;
        cursor = day.pred_opt();
    }

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
        active_days: days.len() as u32,
    }
}

/// One record per day of the full month, ascending. `None` when the month is
/// not 1..=12 or the year is out of range.
pub fn month_days(
    year: i32,
    month: u32,
    rutina_dias: &[Vec<String>],
    session_days: &[NaiveDate],
) -> Option<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = first.checked_add_months(chrono::Months::new(1))?;

    let mut sessions_by_day: HashMap<NaiveDate, u32> = HashMap::new();
    for &day in session_days {
        *sessions_by_day.entry(day).or_insert(0) += 1;
    }

    let mut days = Vec::with_capacity(31);
    let mut date = first;
    while date < next_month {
        let weekday = weekday_name(date);
        let planned_count = rutina_dias
            .iter()
            .filter(|dias| dias.iter().any(|d| d == weekday))
            .count() as u32;
        let sessions_count = sessions_by_day.get(&date).copied().unwrap_or(0);
        days.push(CalendarDay {
            date,
            weekday: weekday.to_owned(),
            planned_count,
            sessions_count,
            scheduled: planned_count > 0,
            done: sessions_count > 0,
        });
        date = date.succ_opt()?;
    }

    Some(days)
}

/// Independent threshold rules; tiers are cumulative, not exclusive.
pub fn badges_for(week_sessions: i64, streaks: &StreakSummary) -> Vec<Badge> {
    let mut badges = Vec::new();
    if week_sessions >= 1 {
        badges.push(Badge::new("start", "Arranque"));
    }
    if week_sessions >= 3 {
        badges.push(Badge::new("consistency3", "Constancia 3/sem"));
    }
    if week_sessions >= 5 {
        badges.push(Badge::new("consistency5", "Constancia 5/sem"));
    }
    if streaks.current_streak >= 7 {
        badges.push(Badge::new("streak7", "Racha 7"));
    }
    if streaks.current_streak >= 14 {
        badges.push(Badge::new("streak14", "Racha 14"));
    }
    if streaks.current_streak >= 30 {
        badges.push(Badge::new("streak30", "Racha 30"));
    }
    badges
}

/// Adherence plus trailing-window set count and volume. Every serie counts
/// toward `series_semana`; only series with both peso and reps present (and
/// well-formed) add peso × reps to the volume.
pub fn resumen_for(
    total_rutinas: i64,
    completadas: i64,
    series: &[SerieVolumen],
) -> ResumenResponse {
    let adherencia = if total_rutinas > 0 {
        ((completadas as f64 / total_rutinas as f64) * 100.0).round() as i64
    } else {
        0
    };

    let mut volumen_semana = 0.0;
    for serie in series {
        if let (Some(peso), Some(reps)) = (serie.peso, serie.reps) {
            // Tolerant inputs: a malformed serie is left out of the volume,
            // never failed on.
            if peso.is_finite() && reps >= 0 {
                volumen_semana += peso * f64::from(reps);
            }
        }
    }

    ResumenResponse {
        total_rutinas,
        completadas,
        adherencia,
        series_semana: series.len() as i64,
        volumen_semana,
    }
}

pub async fn compute_streaks(pool: &PgPool, usuario_id: i32) -> Result<StreakSummary> {
    let repo = StatsRepository::new(pool);
    let now = Local::now();
    let since = (now - Duration::days(LOOKBACK_DAYS)).to_utc();

    let fechas = repo.session_dates_since(usuario_id, since).await?;
    let days: BTreeSet<NaiveDate> = fechas.into_iter().map(day_key).collect();

    Ok(streaks_for_days(&days, now.date_naive()))
}

pub async fn compute_calendar(
    pool: &PgPool,
    usuario_id: i32,
    year: i32,
    month: u32,
) -> Result<Option<CalendarResponse>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Ok(None);
    };
    let Some(next_month) = first.checked_add_months(chrono::Months::new(1)) else {
        return Ok(None);
    };

    let repo = StatsRepository::new(pool);
    let rutina_dias = repo.rutina_dias(usuario_id).await?;
    let fechas = repo
        .session_dates_between(
            usuario_id,
            local_midnight_utc(first),
            local_midnight_utc(next_month),
        )
        .await?;
    let session_days: Vec<NaiveDate> = fechas.into_iter().map(day_key).collect();

    Ok(month_days(year, month, &rutina_dias, &session_days)
        .map(|days| CalendarResponse { year, month, days }))
}

pub async fn compute_badges(pool: &PgPool, usuario_id: i32) -> Result<BadgesResponse> {
    let repo = StatsRepository::new(pool);
    let monday = week_start(Local::now().date_naive());
    let week_sessions = repo
        .count_sessions_since(usuario_id, local_midnight_utc(monday))
        .await?;

    let streaks = compute_streaks(pool, usuario_id).await?;
    let badges = badges_for(week_sessions, &streaks);

    Ok(BadgesResponse {
        week_sessions,
        badges,
        streaks,
    })
}

pub async fn compute_resumen(pool: &PgPool, usuario_id: i32) -> Result<ResumenResponse> {
    let repo = StatsRepository::new(pool);
    let total_rutinas = repo.count_rutinas(usuario_id).await?;
    let completadas = repo.count_progresos_completados(usuario_id).await?;

    let since = (Local::now() - Duration::days(RESUMEN_WINDOW_DAYS)).to_utc();
    let series = repo.series_since(usuario_id, since).await?;

    Ok(resumen_for(total_rutinas, completadas, &series))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn days(dates: &[&str]) -> BTreeSet<NaiveDate> {
        dates.iter().map(|s| d(s)).collect()
    }

    fn codes(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|b| b.code.as_str()).collect()
    }

    #[test]
    fn empty_day_set_yields_all_zeroes() {
        let summary = streaks_for_days(&BTreeSet::new(), d("2026-08-26"));
        assert_eq!(
            summary,
            StreakSummary {
                current_streak: 0,
                longest_streak: 0,
                active_days: 0,
            }
        );
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let summary = streaks_for_days(
            &days(&["2026-08-24", "2026-08-25", "2026-08-26"]),
            d("2026-08-26"),
        );
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.active_days, 3);
    }

    #[test]
    fn streak_survives_until_yesterday_when_today_is_unlogged() {
        let summary = streaks_for_days(&days(&["2026-08-24", "2026-08-25"]), d("2026-08-26"));
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn streak_is_broken_two_days_after_the_last_sesion() {
        let summary = streaks_for_days(&days(&["2026-08-23", "2026-08-24"]), d("2026-08-26"));
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn isolated_old_day_keeps_longest_but_not_current() {
        let summary = streaks_for_days(&days(&["2026-05-01"]), d("2026-08-26"));
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 1);
        assert_eq!(summary.active_days, 1);
    }

    #[test]
    fn gap_resets_the_running_streak() {
        let summary = streaks_for_days(
            &days(&[
                "2026-08-18",
                "2026-08-19",
                "2026-08-21",
                "2026-08-22",
                "2026-08-23",
            ]),
            d("2026-08-26"),
        );
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.active_days, 5);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["2026-08-26"])]
    #[case(&["2026-08-20", "2026-08-25", "2026-08-26"])]
    #[case(&["2026-08-01", "2026-08-02", "2026-08-03", "2026-08-24", "2026-08-25"])]
    fn longest_streak_is_never_below_current(#[case] dates: &[&str]) {
        let summary = streaks_for_days(&days(dates), d("2026-08-26"));
        assert!(summary.longest_streak >= summary.current_streak);
    }

    #[test]
    fn month_has_exactly_its_calendar_days_in_ascending_order() {
        let days = month_days(2026, 8, &[], &[]).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].date, d("2026-08-01"));
        assert_eq!(days[30].date, d("2026-08-31"));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[rstest]
    #[case(2024, 2, 29)] // leap year
    #[case(2026, 2, 28)]
    #[case(2026, 9, 30)]
    #[case(2026, 12, 31)]
    fn month_lengths_are_correct(#[case] year: i32, #[case] month: u32, #[case] len: usize) {
        assert_eq!(month_days(year, month, &[], &[]).unwrap().len(), len);
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn out_of_range_months_are_rejected(#[case] month: u32) {
        assert_eq!(month_days(2026, month, &[], &[]), None);
    }

    #[test]
    fn planned_count_counts_rutinas_scheduled_on_the_weekday() {
        let rutinas = vec![
            vec!["Lunes".to_owned()],
            vec!["Lunes".to_owned(), "Miércoles".to_owned()],
            vec!["Viernes".to_owned()],
        ];
        let days = month_days(2026, 8, &rutinas, &[]).unwrap();

        // 2026-08-03 is a Monday, 2026-08-05 a Wednesday.
        let monday = &days[2];
        assert_eq!(monday.weekday, "Lunes");
        assert_eq!(monday.planned_count, 2);
        assert!(monday.scheduled);

        let wednesday = &days[4];
        assert_eq!(wednesday.weekday, "Miércoles");
        assert_eq!(wednesday.planned_count, 1);

        let saturday = &days[0];
        assert_eq!(saturday.weekday, "Sábado");
        assert_eq!(saturday.planned_count, 0);
        assert!(!saturday.scheduled);
    }

    #[test]
    fn sessions_on_one_day_are_counted_without_deduplication() {
        let sessions = vec![d("2026-08-10"), d("2026-08-10"), d("2026-08-12")];
        let days = month_days(2026, 8, &[], &sessions).unwrap();

        assert_eq!(days[9].sessions_count, 2);
        assert!(days[9].done);
        assert_eq!(days[11].sessions_count, 1);
        assert_eq!(days[8].sessions_count, 0);
        assert!(!days[8].done);
    }

    #[test]
    fn all_consistency_tiers_are_present_at_five_week_sessions() {
        let streaks = streaks_for_days(&BTreeSet::new(), d("2026-08-26"));
        let badges = badges_for(5, &streaks);
        assert_eq!(codes(&badges), vec!["start", "consistency3", "consistency5"]);
    }

    #[test]
    fn streak_badges_stack_with_week_badges() {
        let streaks = StreakSummary {
            current_streak: 14,
            longest_streak: 20,
            active_days: 40,
        };
        let badges = badges_for(1, &streaks);
        assert_eq!(codes(&badges), vec!["start", "streak7", "streak14"]);
    }

    #[test]
    fn no_badges_without_sessions_or_streak() {
        let streaks = streaks_for_days(&BTreeSet::new(), d("2026-08-26"));
        assert!(badges_for(0, &streaks).is_empty());
    }

    #[test]
    fn two_scheduled_days_logged_earn_only_the_start_badge() {
        // Rutinas on Lunes and Miércoles; sesiones logged exactly on this
        // week's Monday and Wednesday, evaluated on the Friday.
        let today = d("2026-08-28");
        let monday = week_start(today);
        assert_eq!(monday, d("2026-08-24"));
        let logged = [d("2026-08-24"), d("2026-08-26")];

        let week_sessions = logged.iter().filter(|&&day| day >= monday).count() as i64;
        assert_eq!(week_sessions, 2);

        let streaks = streaks_for_days(&logged.iter().copied().collect(), today);
        assert_eq!(streaks.current_streak, 0);

        let badges = badges_for(week_sessions, &streaks);
        assert_eq!(codes(&badges), vec!["start"]);
    }

    #[test]
    fn serie_with_missing_reps_counts_but_adds_no_volume() {
        let series = [SerieVolumen {
            reps: None,
            peso: Some(10.0),
        }];
        let resumen = resumen_for(0, 0, &series);
        assert_eq!(resumen.series_semana, 1);
        assert_eq!(resumen.volumen_semana, 0.0);
    }

    #[test]
    fn malformed_series_are_excluded_from_volume_only() {
        let series = [
            SerieVolumen {
                reps: Some(8),
                peso: Some(60.0),
            },
            SerieVolumen {
                reps: Some(-3),
                peso: Some(60.0),
            },
            SerieVolumen {
                reps: Some(8),
                peso: Some(f64::NAN),
            },
            SerieVolumen {
                reps: Some(5),
                peso: None,
            },
        ];
        let resumen = resumen_for(0, 0, &series);
        assert_eq!(resumen.series_semana, 4);
        assert_eq!(resumen.volumen_semana, 480.0);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 0, 0)]
    #[case(3, 1, 33)]
    #[case(3, 2, 67)]
    #[case(4, 4, 100)]
    fn adherencia_is_a_rounded_percentage(
        #[case] total: i64,
        #[case] completadas: i64,
        #[case] expected: i64,
    ) {
        let resumen = resumen_for(total, completadas, &[]);
        assert_eq!(resumen.adherencia, expected);
    }
}
