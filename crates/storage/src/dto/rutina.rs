use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::services::dates::DIAS_SEMANA;

/// Request payload for creating a rutina
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRutinaRequest {
    #[validate(length(min = 1, max = 255, message = "nombre is required"))]
    pub nombre: String,

    #[validate(length(min = 1, max = 100, message = "tipo is required"))]
    pub tipo: String,

    /// Ordered exercise names, display-only
    #[serde(default)]
    pub ejercicios: Vec<String>,

    /// Scheduled weekdays, Spanish names ("Lunes".."Domingo")
    #[serde(default)]
    #[validate(custom(function = "validate_dias"))]
    pub dias: Vec<String>,

    pub usuario_id: i32,
}

/// Request payload for partially updating a rutina
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRutinaRequest {
    #[validate(length(min = 1, max = 255))]
    pub nombre: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub tipo: Option<String>,

    pub ejercicios: Option<Vec<String>>,

    #[validate(custom(function = "validate_dias"))]
    pub dias: Option<Vec<String>>,
}

fn validate_dias(dias: &[String]) -> Result<(), validator::ValidationError> {
    if dias.iter().all(|d| DIAS_SEMANA.contains(&d.as_str())) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_dia"))
    }
}
