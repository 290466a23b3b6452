use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One logged set within a sesión for one exercise. `set_number` is 1-based
/// and unique within (sesion, ejercicio).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Serie {
    pub id: i32,
    pub sesion_id: i32,
    pub ejercicio: String,
    pub set_number: i32,
    pub reps: Option<i32>,
    pub peso: Option<f64>,
    pub rpe: Option<f64>,
    pub completado: bool,
    pub completed_at: Option<DateTime<Utc>>,
}
