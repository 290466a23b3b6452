use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Local};
use storage::{
    Database,
    dto::stats::{BadgesResponse, CalendarQuery, CalendarResponse, ResumenResponse, StreakSummary},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/streaks/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id")
    ),
    responses(
        (status = 200, description = "Streak figures over the lookback window", body = StreakSummary)
    ),
    tag = "stats"
)]
pub async fn get_streaks(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
) -> Result<Response, WebError> {
    let streaks = services::streaks(db.pool(), usuario_id).await?;

    Ok(Json(streaks).into_response())
}

#[utoipa::path(
    get,
    path = "/calendar/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id"),
        CalendarQuery
    ),
    responses(
        (status = 200, description = "Planned vs. done for every day of the month", body = CalendarResponse),
        (status = 400, description = "Invalid year or month")
    ),
    tag = "stats"
)]
pub async fn get_calendar(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, WebError> {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let calendar = services::calendar(db.pool(), usuario_id, year, month)
        .await?
        .ok_or_else(|| WebError::BadRequest("invalid year or month".to_owned()))?;

    Ok(Json(calendar).into_response())
}

#[utoipa::path(
    get,
    path = "/badges/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id")
    ),
    responses(
        (status = 200, description = "Earned badges with this week's sesión count and streaks", body = BadgesResponse)
    ),
    tag = "stats"
)]
pub async fn get_badges(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
) -> Result<Response, WebError> {
    let badges = services::badges(db.pool(), usuario_id).await?;

    Ok(Json(badges).into_response())
}

#[utoipa::path(
    get,
    path = "/resumen/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id")
    ),
    responses(
        (status = 200, description = "Adherence and trailing-week volume figures", body = ResumenResponse)
    ),
    tag = "stats"
)]
pub async fn get_resumen(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
) -> Result<Response, WebError> {
    let resumen = services::resumen(db.pool(), usuario_id).await?;

    Ok(Json(resumen).into_response())
}
