use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::dto::sesion::{StartSesionRequest, UpdateSesionRequest, UpsertSerieRequest};
use crate::error::{Result, StorageError};
use crate::models::{Serie, Sesion};

pub struct SesionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SesionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Today's sesión for (usuario, rutina), if one exists within the given
    /// local-day bounds.
    pub async fn find_in_range(
        &self,
        usuario_id: i32,
        rutina_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Sesion>> {
        let sesion = sqlx::query_as::<_, Sesion>(
            r#"
            SELECT id, usuario_id, rutina_id, fecha, notas, fatiga, dolor
            FROM sesiones
            WHERE usuario_id = $1 AND rutina_id = $2 AND fecha >= $3 AND fecha < $4
            LIMIT 1
            "#,
        )
        .bind(usuario_id)
        .bind(rutina_id)
        .bind(start)
        .bind(end)
        .fetch_optional(self.pool)
        .await?;

        Ok(sesion)
    }

    pub async fn create(&self, req: &StartSesionRequest) -> Result<Sesion> {
        let created = sqlx::query_as::<_, Sesion>(
            r#"
            INSERT INTO sesiones (usuario_id, rutina_id, notas, fatiga, dolor)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, usuario_id, rutina_id, fecha, notas, fatiga, dolor
            "#,
        )
        .bind(req.usuario_id)
        .bind(req.rutina_id)
        .bind(&req.notas)
        .bind(req.fatiga)
        .bind(req.dolor)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match created {
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::ConstraintViolation(
                "usuario or rutina does not exist".to_owned(),
            )),
            other => other,
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Sesion> {
        sqlx::query_as::<_, Sesion>(
            "SELECT id, usuario_id, rutina_id, fecha, notas, fatiga, dolor FROM sesiones WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Merge the provided subjective fields into the sesión; absent fields
    /// keep their stored values.
    pub async fn merge_subjective(&self, id: i32, req: &UpdateSesionRequest) -> Result<Sesion> {
        sqlx::query_as::<_, Sesion>(
            r#"
            UPDATE sesiones
            SET notas = COALESCE($2, notas),
                fatiga = COALESCE($3, fatiga),
                dolor = COALESCE($4, dolor)
            WHERE id = $1
            RETURNING id, usuario_id, rutina_id, fecha, notas, fatiga, dolor
            "#,
        )
        .bind(id)
        .bind(&req.notas)
        .bind(req.fatiga)
        .bind(req.dolor)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// All series of a sesión, grouped for display
    pub async fn list_series(&self, sesion_id: i32) -> Result<Vec<Serie>> {
        let series = sqlx::query_as::<_, Serie>(
            r#"
            SELECT id, sesion_id, ejercicio, set_number, reps, peso, rpe, completado, completed_at
            FROM series
            WHERE sesion_id = $1
            ORDER BY ejercicio, set_number
            "#,
        )
        .bind(sesion_id)
        .fetch_all(self.pool)
        .await?;

        Ok(series)
    }

    pub async fn list_series_for_exercise(
        &self,
        sesion_id: i32,
        ejercicio: &str,
    ) -> Result<Vec<Serie>> {
        let series = sqlx::query_as::<_, Serie>(
            r#"
            SELECT id, sesion_id, ejercicio, set_number, reps, peso, rpe, completado, completed_at
            FROM series
            WHERE sesion_id = $1 AND ejercicio = $2
            ORDER BY set_number
            "#,
        )
        .bind(sesion_id)
        .bind(ejercicio)
        .fetch_all(self.pool)
        .await?;

        Ok(series)
    }

    /// Upsert one serie keyed by (sesión, ejercicio, set_number).
    /// `completed_at` is stamped when the serie is marked completed and
    /// cleared otherwise.
    pub async fn upsert_serie(&self, req: &UpsertSerieRequest) -> Result<Serie> {
        let upserted = sqlx::query_as::<_, Serie>(
            r#"
            INSERT INTO series (sesion_id, ejercicio, set_number, reps, peso, rpe, completado, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $7 THEN now() END)
            ON CONFLICT (sesion_id, ejercicio, set_number)
            DO UPDATE SET
                reps = EXCLUDED.reps,
                peso = EXCLUDED.peso,
                rpe = EXCLUDED.rpe,
                completado = EXCLUDED.completado,
                completed_at = CASE WHEN EXCLUDED.completado THEN now() END
            RETURNING id, sesion_id, ejercicio, set_number, reps, peso, rpe, completado, completed_at
            "#,
        )
        .bind(req.sesion_id)
        .bind(&req.ejercicio)
        .bind(req.set_number)
        .bind(req.reps)
        .bind(req.peso)
        .bind(req.rpe)
        .bind(req.completado)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match upserted {
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::ConstraintViolation(
                format!("sesión {} does not exist", req.sesion_id),
            )),
            other => other,
        }
    }

    /// Latest sesiones of a usuario, newest first
    pub async fn recent(&self, usuario_id: i32, limit: i64) -> Result<Vec<Sesion>> {
        let sesiones = sqlx::query_as::<_, Sesion>(
            r#"
            SELECT id, usuario_id, rutina_id, fecha, notas, fatiga, dolor
            FROM sesiones
            WHERE usuario_id = $1
            ORDER BY fecha DESC
            LIMIT $2
            "#,
        )
        .bind(usuario_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(sesiones)
    }
}
