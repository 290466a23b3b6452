use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::usuario::{LoginRequest, RegisterRequest},
    error::StorageError,
    models::Usuario,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Usuario registered successfully", body = Usuario),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let usuario = services::register(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(usuario)).into_response())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Usuario found", body = Usuario),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unknown email or rol")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let usuario = match services::login(db.pool(), &req).await {
        Err(StorageError::NotFound) => {
            return Err(WebError::Unauthorized("Unknown email or rol".to_owned()));
        }
        other => other?,
    };

    Ok(Json(usuario).into_response())
}
