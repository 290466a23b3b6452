use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Request payload for marking a rutina (un)completed. Upsert semantics: the
/// mark is created on first write and its `fecha` refreshed on every write.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgresoRequest {
    pub usuario_id: i32,
    pub rutina_id: i32,
    #[serde(default)]
    pub completado: bool,
}

/// Request payload for removing a completion mark
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProgresoRequest {
    pub usuario_id: i32,
    pub rutina_id: i32,
}

/// Per-usuario progreso listing entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgresoEntry {
    pub rutina_id: i32,
    pub completado: bool,
    pub fecha: DateTime<Utc>,
}
