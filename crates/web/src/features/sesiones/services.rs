use chrono::Local;
use sqlx::PgPool;
use storage::{
    dto::sesion::{SesionConSeries, StartSesionRequest, UpdateSesionRequest, UpsertSerieRequest},
    error::Result,
    models::{Serie, Sesion},
    repository::sesion::SesionRepository,
    services::dates::local_day_bounds,
};

/// Sessions shown per exercise in the historial view
const HISTORIAL_SESIONES: i64 = 5;

/// Find or create today's sesión for (usuario, rutina). A second start on the
/// same local day re-opens the existing sesión, merging any subjective fields
/// provided.
pub async fn start_or_resume_today(pool: &PgPool, req: &StartSesionRequest) -> Result<Sesion> {
    let repo = SesionRepository::new(pool);
    let (start, end) = local_day_bounds(Local::now().date_naive());

    match repo
        .find_in_range(req.usuario_id, req.rutina_id, start, end)
        .await?
    {
        Some(existing) => {
            if req.notas.is_none() && req.fatiga.is_none() && req.dolor.is_none() {
                return Ok(existing);
            }
            let update = UpdateSesionRequest {
                notas: req.notas.clone(),
                fatiga: req.fatiga,
                dolor: req.dolor,
            };
            repo.merge_subjective(existing.id, &update).await
        }
        None => repo.create(req).await,
    }
}

/// A sesión with all its series, grouped by exercise
pub async fn get_with_series(pool: &PgPool, id: i32) -> Result<SesionConSeries> {
    let repo = SesionRepository::new(pool);

    let sesion = repo.find_by_id(id).await?;
    let series = repo.list_series(sesion.id).await?;

    Ok(SesionConSeries::from_parts(sesion, series))
}

/// Merge subjective fields into a sesión
pub async fn patch_sesion(pool: &PgPool, id: i32, req: &UpdateSesionRequest) -> Result<Sesion> {
    let repo = SesionRepository::new(pool);
    repo.merge_subjective(id, req).await
}

/// Series of one exercise within a sesión
pub async fn list_series(pool: &PgPool, sesion_id: i32, ejercicio: &str) -> Result<Vec<Serie>> {
    let repo = SesionRepository::new(pool);
    repo.list_series_for_exercise(sesion_id, ejercicio).await
}

/// Store one serie, keyed by (sesión, ejercicio, set number)
pub async fn upsert_serie(pool: &PgPool, req: &UpsertSerieRequest) -> Result<Serie> {
    let repo = SesionRepository::new(pool);
    repo.upsert_serie(req).await
}

/// Latest sesiones of a usuario, each carrying only the series of the given
/// exercise
pub async fn historial(
    pool: &PgPool,
    usuario_id: i32,
    ejercicio: &str,
) -> Result<Vec<SesionConSeries>> {
    let repo = SesionRepository::new(pool);

    let sesiones = repo.recent(usuario_id, HISTORIAL_SESIONES).await?;

    let mut historial = Vec::with_capacity(sesiones.len());
    for sesion in sesiones {
        let series = repo.list_series_for_exercise(sesion.id, ejercicio).await?;
        historial.push(SesionConSeries::from_parts(sesion, series));
    }

    Ok(historial)
}
