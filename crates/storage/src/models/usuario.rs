use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A coach ("instructor") or student ("alumno"). Field names follow the wire
/// contract consumed by the existing frontend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub nivel: String,
    pub rol: String,
    pub suscripcion: bool,
    pub created_at: DateTime<Utc>,
}
