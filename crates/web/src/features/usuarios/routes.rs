use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{activate_suscripcion, list_usuarios};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/usuarios", get(list_usuarios))
        .route("/suscripcion/:id", put(activate_suscripcion))
}
