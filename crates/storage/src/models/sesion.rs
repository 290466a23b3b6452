use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One calendar-day instance of performing a rutina. At most one per
/// (usuario, rutina, local day); the sesiones service enforces this by
/// find-or-create over the day's local bounds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sesion {
    pub id: i32,
    pub usuario_id: i32,
    pub rutina_id: i32,
    pub fecha: DateTime<Utc>,
    pub notas: Option<String>,
    pub fatiga: Option<i32>,
    pub dolor: Option<i32>,
}
