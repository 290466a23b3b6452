use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Completion mark for a (usuario, rutina) pair. `fecha` is the last time the
/// mark was touched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Progreso {
    pub usuario_id: i32,
    pub rutina_id: i32,
    pub completado: bool,
    pub fecha: DateTime<Utc>,
}
