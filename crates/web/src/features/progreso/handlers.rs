use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::progreso::{DeleteProgresoRequest, ProgresoEntry, UpsertProgresoRequest},
    models::Progreso,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/progreso",
    request_body = UpsertProgresoRequest,
    responses(
        (status = 200, description = "Completion mark stored", body = Progreso),
        (status = 409, description = "Usuario or rutina does not exist")
    ),
    tag = "progreso"
)]
pub async fn upsert_progreso(
    State(db): State<Database>,
    Json(req): Json<UpsertProgresoRequest>,
) -> Result<Response, WebError> {
    let progreso = services::upsert_progreso(db.pool(), &req).await?;

    Ok(Json(progreso).into_response())
}

#[utoipa::path(
    get,
    path = "/progreso",
    responses(
        (status = 200, description = "All completion marks", body = Vec<Progreso>)
    ),
    tag = "progreso"
)]
pub async fn list_progreso_global(State(db): State<Database>) -> Result<Response, WebError> {
    let progresos = services::list_progreso_global(db.pool()).await?;

    Ok(Json(progresos).into_response())
}

#[utoipa::path(
    get,
    path = "/progreso/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id")
    ),
    responses(
        (status = 200, description = "Completion marks of the usuario, newest first", body = Vec<ProgresoEntry>)
    ),
    tag = "progreso"
)]
pub async fn list_progreso(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
) -> Result<Response, WebError> {
    let progresos = services::list_progreso(db.pool(), usuario_id).await?;

    Ok(Json(progresos).into_response())
}

#[utoipa::path(
    delete,
    path = "/progreso",
    request_body = DeleteProgresoRequest,
    responses(
        (status = 204, description = "Completion mark removed (idempotent)")
    ),
    tag = "progreso"
)]
pub async fn delete_progreso(
    State(db): State<Database>,
    Json(req): Json<DeleteProgresoRequest>,
) -> Result<Response, WebError> {
    services::delete_progreso(db.pool(), req.usuario_id, req.rutina_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/progreso/{usuarioId}/{rutinaId}",
    params(
        ("usuarioId" = i32, Path, description = "Usuario id"),
        ("rutinaId" = i32, Path, description = "Rutina id")
    ),
    responses(
        (status = 204, description = "Completion mark removed (idempotent)")
    ),
    tag = "progreso"
)]
pub async fn delete_progreso_por_ids(
    State(db): State<Database>,
    Path((usuario_id, rutina_id)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    services::delete_progreso(db.pool(), usuario_id, rutina_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
