use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::rutina::{CreateRutinaRequest, UpdateRutinaRequest},
    models::Rutina,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/rutinas",
    request_body = CreateRutinaRequest,
    responses(
        (status = 201, description = "Rutina created successfully", body = Rutina),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Usuario does not exist")
    ),
    tag = "rutinas"
)]
pub async fn create_rutina(
    State(db): State<Database>,
    Json(req): Json<CreateRutinaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let rutina = services::create_rutina(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(rutina)).into_response())
}

#[utoipa::path(
    get,
    path = "/rutinas",
    responses(
        (status = 200, description = "All rutinas", body = Vec<Rutina>)
    ),
    tag = "rutinas"
)]
pub async fn list_rutinas(State(db): State<Database>) -> Result<Response, WebError> {
    let rutinas = services::list_rutinas(db.pool()).await?;

    Ok(Json(rutinas).into_response())
}

#[utoipa::path(
    get,
    path = "/rutinas/{usuarioId}",
    params(
        ("usuarioId" = i32, Path, description = "Owner usuario id")
    ),
    responses(
        (status = 200, description = "Rutinas of the usuario, ordered by id", body = Vec<Rutina>)
    ),
    tag = "rutinas"
)]
pub async fn list_rutinas_por_usuario(
    State(db): State<Database>,
    Path(usuario_id): Path<i32>,
) -> Result<Response, WebError> {
    let rutinas = services::list_rutinas_por_usuario(db.pool(), usuario_id).await?;

    Ok(Json(rutinas).into_response())
}

#[utoipa::path(
    put,
    path = "/rutinas/{id}",
    params(
        ("id" = i32, Path, description = "Rutina id")
    ),
    request_body = UpdateRutinaRequest,
    responses(
        (status = 200, description = "Rutina updated successfully", body = Rutina),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Rutina not found")
    ),
    tag = "rutinas"
)]
pub async fn update_rutina(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateRutinaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let rutina = services::update_rutina(db.pool(), id, &req).await?;

    Ok(Json(rutina).into_response())
}

#[utoipa::path(
    delete,
    path = "/rutinas/{id}",
    params(
        ("id" = i32, Path, description = "Rutina id")
    ),
    responses(
        (status = 204, description = "Rutina deleted successfully"),
        (status = 404, description = "Rutina not found")
    ),
    tag = "rutinas"
)]
pub async fn delete_rutina(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_rutina(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
