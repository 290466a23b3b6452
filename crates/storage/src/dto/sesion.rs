use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Serie, Sesion};

/// Request payload for starting (or re-opening) today's sesión for a rutina.
/// Subjective fields are merged into an existing sesión instead of creating a
/// second one on the same local day.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartSesionRequest {
    pub usuario_id: i32,
    pub rutina_id: i32,

    #[validate(length(max = 2000))]
    pub notas: Option<String>,

    #[validate(range(min = 0, max = 10))]
    pub fatiga: Option<i32>,

    #[validate(range(min = 0, max = 10))]
    pub dolor: Option<i32>,
}

/// Request payload for patching a sesión's subjective fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSesionRequest {
    #[validate(length(max = 2000))]
    pub notas: Option<String>,

    #[validate(range(min = 0, max = 10))]
    pub fatiga: Option<i32>,

    #[validate(range(min = 0, max = 10))]
    pub dolor: Option<i32>,
}

/// Query parameters for listing the series of one exercise within a sesión
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SerieQuery {
    pub sesion_id: i32,
    pub ejercicio: String,
}

/// Request payload for upserting one serie, keyed by
/// (sesión, ejercicio, set_number)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSerieRequest {
    pub sesion_id: i32,

    #[validate(length(min = 1, max = 255, message = "ejercicio is required"))]
    pub ejercicio: String,

    #[validate(range(min = 1))]
    pub set_number: i32,

    #[validate(range(min = 0))]
    pub reps: Option<i32>,

    pub peso: Option<f64>,

    #[validate(range(min = 0.0, max = 10.0))]
    pub rpe: Option<f64>,

    #[serde(default)]
    pub completado: bool,
}

/// A sesión together with its logged series, used by the detail and
/// historial endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SesionConSeries {
    pub id: i32,
    pub usuario_id: i32,
    pub rutina_id: i32,
    pub fecha: DateTime<Utc>,
    pub notas: Option<String>,
    pub fatiga: Option<i32>,
    pub dolor: Option<i32>,
    pub series: Vec<Serie>,
}

impl SesionConSeries {
    pub fn from_parts(sesion: Sesion, series: Vec<Serie>) -> Self {
        Self {
            id: sesion.id,
            usuario_id: sesion.usuario_id,
            rutina_id: sesion.rutina_id,
            fecha: sesion.fecha,
            notas: sesion.notas,
            fatiga: sesion.fatiga,
            dolor: sesion.dolor,
            series,
        }
    }
}
