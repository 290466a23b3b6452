use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    delete_progreso, delete_progreso_por_ids, list_progreso, list_progreso_global,
    upsert_progreso,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/progreso",
            post(upsert_progreso)
                .get(list_progreso_global)
                .delete(delete_progreso),
        )
        .route("/progreso/:usuario_id", get(list_progreso))
        .route(
            "/progreso/:usuario_id/:rutina_id",
            delete(delete_progreso_por_ids),
        )
}
