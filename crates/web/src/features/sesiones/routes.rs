use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_sesion, historial_ejercicio, list_series, patch_sesion, start_sesion, upsert_serie,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/sesiones", post(start_sesion))
        .route("/sesiones/:id", get(get_sesion).patch(patch_sesion))
        .route("/series", get(list_series).post(upsert_serie))
        .route("/historial/:usuario_id/:ejercicio", get(historial_ejercicio))
}
