use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::sesion::{
        SerieQuery, SesionConSeries, StartSesionRequest, UpdateSesionRequest, UpsertSerieRequest,
    },
    models::{Serie, Sesion},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/sesiones",
    request_body = StartSesionRequest,
    responses(
        (status = 200, description = "Today's sesión, created or re-opened", body = Sesion),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Usuario or rutina does not exist")
    ),
    tag = "sesiones"
)]
pub async fn start_sesion(
    State(db): State<Database>,
    Json(req): Json<StartSesionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sesion = services::start_or_resume_today(db.pool(), &req).await?;

    Ok(Json(sesion).into_response())
}

#[utoipa::path(
    get,
    path = "/sesiones/{id}",
    params(
        ("id" = i32, Path, description = "Sesión id")
    ),
    responses(
        (status = 200, description = "Sesión with its series", body = SesionConSeries),
        (status = 404, description = "Sesión not found")
    ),
    tag = "sesiones"
)]
pub async fn get_sesion(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let sesion = services::get_with_series(db.pool(), id).await?;

    Ok(Json(sesion).into_response())
}

#[utoipa::path(
    patch,
    path = "/sesiones/{id}",
    params(
        ("id" = i32, Path, description = "Sesión id")
    ),
    request_body = UpdateSesionRequest,
    responses(
        (status = 200, description = "Sesión updated", body = Sesion),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Sesión not found")
    ),
    tag = "sesiones"
)]
pub async fn patch_sesion(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateSesionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sesion = services::patch_sesion(db.pool(), id, &req).await?;

    Ok(Json(sesion).into_response())
}

#[utoipa::path(
    get,
    path = "/series",
    params(SerieQuery),
    responses(
        (status = 200, description = "Series of one exercise within a sesión, by set number", body = Vec<Serie>)
    ),
    tag = "sesiones"
)]
pub async fn list_series(
    State(db): State<Database>,
    Query(query): Query<SerieQuery>,
) -> Result<Response, WebError> {
    let series = services::list_series(db.pool(), query.sesion_id, &query.ejercicio).await?;

    Ok(Json(series).into_response())
}

#[utoipa::path(
    post,
    path = "/series",
    request_body = UpsertSerieRequest,
    responses(
        (status = 200, description = "Serie stored", body = Serie),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Sesión does not exist")
    ),
    tag = "sesiones"
)]
pub async fn upsert_serie(
    State(db): State<Database>,
    Json(req): Json<UpsertSerieRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let serie = services::upsert_serie(db.pool(), &req).await?;

    Ok(Json(serie).into_response())
}

#[utoipa::path(
    get,
    path = "/historial/{usuarioId}/{ejercicio}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id"),
        ("ejercicio" = String, Path, description = "Exercise name")
    ),
    responses(
        (status = 200, description = "Latest sesiones with that exercise's series, newest first", body = Vec<SesionConSeries>)
    ),
    tag = "sesiones"
)]
pub async fn historial_ejercicio(
    State(db): State<Database>,
    Path((usuario_id, ejercicio)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    let historial = services::historial(db.pool(), usuario_id, &ejercicio).await?;

    Ok(Json(historial).into_response())
}
