use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_rutina, delete_rutina, list_rutinas, list_rutinas_por_usuario, update_rutina,
};

pub fn routes() -> Router<Database> {
    // GET takes a usuario id while PUT/DELETE take a rutina id, mirroring the
    // frontend contract; the parameter name is shared so the paths can too.
    Router::new()
        .route("/rutinas", post(create_rutina).get(list_rutinas))
        .route(
            "/rutinas/:id",
            get(list_rutinas_por_usuario)
                .put(update_rutina)
                .delete(delete_rutina),
        )
}
