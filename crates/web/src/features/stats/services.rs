use sqlx::PgPool;
use storage::{
    dto::stats::{BadgesResponse, CalendarResponse, ResumenResponse, StreakSummary},
    error::Result,
    services::training_stats,
};

/// Current/longest streak and active days over the lookback window
pub async fn streaks(pool: &PgPool, usuario_id: i32) -> Result<StreakSummary> {
    training_stats::compute_streaks(pool, usuario_id).await
}

/// Full-month calendar of planned vs. done days; `None` for an invalid month
pub async fn calendar(
    pool: &PgPool,
    usuario_id: i32,
    year: i32,
    month: u32,
) -> Result<Option<CalendarResponse>> {
    training_stats::compute_calendar(pool, usuario_id, year, month).await
}

/// Badges earned from this week's sesiones and the current streak
pub async fn badges(pool: &PgPool, usuario_id: i32) -> Result<BadgesResponse> {
    training_stats::compute_badges(pool, usuario_id).await
}

/// Adherence plus trailing-week series count and volume
pub async fn resumen(pool: &PgPool, usuario_id: i32) -> Result<ResumenResponse> {
    training_stats::compute_resumen(pool, usuario_id).await
}
