use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request payload for registering a new usuario
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "nombre is required"))]
    pub nombre: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(custom(function = "validate_nivel"))]
    pub nivel: String,

    /// Defaults to "alumno" when omitted
    #[validate(custom(function = "validate_rol"))]
    pub rol: Option<String>,
}

/// Request payload for the email+rol lookup that stands in for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(custom(function = "validate_rol"))]
    pub rol: String,
}

/// Query filter for listing usuarios
#[derive(Debug, Deserialize, IntoParams)]
pub struct UsuarioFilter {
    pub rol: Option<String>,
}

fn validate_rol(rol: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["alumno", "instructor"];

    if VALID_ROLES.contains(&rol) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_rol"))
    }
}

fn validate_nivel(nivel: &str) -> Result<(), validator::ValidationError> {
    const VALID_NIVELES: &[&str] = &["principiante", "intermedio", "avanzado"];

    if VALID_NIVELES.contains(&nivel) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_nivel"))
    }
}
