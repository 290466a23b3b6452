use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Streak figures over the lookback window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Consecutive days ending at today (or yesterday, when today is not
    /// logged yet)
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in the window
    pub longest_streak: u32,
    /// Distinct days with at least one sesión
    pub active_days: u32,
}

/// One day of the monthly calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Spanish weekday name ("Lunes".."Domingo")
    pub weekday: String,
    /// Rutinas scheduled on this weekday
    pub planned_count: u32,
    /// Sesiones logged on this date, not deduplicated
    pub sessions_count: u32,
    pub scheduled: bool,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Query parameters for the calendar endpoint; defaults to the current local
/// year and month
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// An earned badge. Labels are fixed presentation data paired 1:1 with codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Badge {
    pub code: String,
    pub label: String,
}

impl Badge {
    pub(crate) fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_owned(),
            label: label.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadgesResponse {
    pub week_sessions: i64,
    pub badges: Vec<Badge>,
    pub streaks: StreakSummary,
}

/// Adherence and trailing-7-day volume figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenResponse {
    pub total_rutinas: i64,
    pub completadas: i64,
    /// Percentage of rutinas marked completed, rounded; 0 without rutinas
    pub adherencia: i64,
    pub series_semana: i64,
    pub volumen_semana: f64,
}

/// Per-serie figures consumed by the volume summarizer
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SerieVolumen {
    pub reps: Option<i32>,
    pub peso: Option<f64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn streak_summary_uses_camel_case_wire_names() {
        let json = serde_json::to_value(StreakSummary {
            current_streak: 2,
            longest_streak: 5,
            active_days: 9,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"currentStreak": 2, "longestStreak": 5, "activeDays": 9})
        );
    }

    #[test]
    fn calendar_day_uses_camel_case_wire_names() {
        let json = serde_json::to_value(CalendarDay {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            weekday: "Sábado".to_owned(),
            planned_count: 1,
            sessions_count: 0,
            scheduled: true,
            done: false,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "date": "2026-08-01",
                "weekday": "Sábado",
                "plannedCount": 1,
                "sessionsCount": 0,
                "scheduled": true,
                "done": false,
            })
        );
    }

    #[test]
    fn resumen_uses_spanish_wire_names() {
        let json = serde_json::to_value(ResumenResponse {
            total_rutinas: 3,
            completadas: 1,
            adherencia: 33,
            series_semana: 12,
            volumen_semana: 840.0,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "totalRutinas": 3,
                "completadas": 1,
                "adherencia": 33,
                "seriesSemana": 12,
                "volumenSemana": 840.0,
            })
        );
    }
}
