use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A workout template assigned to one usuario. `dias` holds Spanish weekday
/// names ("Lunes".."Domingo"); `ejercicios` is ordered and display-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rutina {
    pub id: i32,
    pub nombre: String,
    pub tipo: String,
    pub ejercicios: Vec<String>,
    pub dias: Vec<String>,
    pub usuario_id: i32,
}
