use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_badges, get_calendar, get_resumen, get_streaks};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/streaks/:usuario_id", get(get_streaks))
        .route("/calendar/:usuario_id", get(get_calendar))
        .route("/badges/:usuario_id", get(get_badges))
        .route("/resumen/:usuario_id", get(get_resumen))
}
