use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::usuario::UsuarioFilter, models::Usuario};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/usuarios",
    params(UsuarioFilter),
    responses(
        (status = 200, description = "Usuarios ordered by nombre", body = Vec<Usuario>)
    ),
    tag = "usuarios"
)]
pub async fn list_usuarios(
    State(db): State<Database>,
    Query(filter): Query<UsuarioFilter>,
) -> Result<Response, WebError> {
    let usuarios = services::list_usuarios(db.pool(), filter.rol.as_deref()).await?;

    Ok(Json(usuarios).into_response())
}

#[utoipa::path(
    put,
    path = "/suscripcion/{id}",
    params(
        ("id" = i32, Path, description = "Usuario id")
    ),
    responses(
        (status = 200, description = "Suscripción activated", body = Usuario),
        (status = 404, description = "Usuario not found")
    ),
    tag = "usuarios"
)]
pub async fn activate_suscripcion(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let usuario = services::activate_suscripcion(db.pool(), id).await?;

    Ok(Json(usuario).into_response())
}
