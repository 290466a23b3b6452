use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::dto::stats::SerieVolumen;
use crate::error::Result;

/// Read-only row fetches feeding the training-stats computations.
pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn session_dates_since(
        &self,
        usuario_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        let fechas = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT fecha FROM sesiones WHERE usuario_id = $1 AND fecha >= $2 ORDER BY fecha",
        )
        .bind(usuario_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(fechas)
    }

    pub async fn session_dates_between(
        &self,
        usuario_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        let fechas = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            SELECT fecha
            FROM sesiones
            WHERE usuario_id = $1 AND fecha >= $2 AND fecha < $3
            ORDER BY fecha
            "#,
        )
        .bind(usuario_id)
        .bind(start)
        .bind(end)
        .fetch_all(self.pool)
        .await?;

        Ok(fechas)
    }

    pub async fn count_sessions_since(
        &self,
        usuario_id: i32,
        since: DateTime<Utc>,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sesiones WHERE usuario_id = $1 AND fecha >= $2",
        )
        .bind(usuario_id)
        .bind(since)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Weekday lists of every rutina owned by the usuario
    pub async fn rutina_dias(&self, usuario_id: i32) -> Result<Vec<Vec<String>>> {
        let dias = sqlx::query_scalar::<_, Vec<String>>(
            "SELECT dias FROM rutinas WHERE usuario_id = $1",
        )
        .bind(usuario_id)
        .fetch_all(self.pool)
        .await?;

        Ok(dias)
    }

    pub async fn count_rutinas(&self, usuario_id: i32) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rutinas WHERE usuario_id = $1")
                .bind(usuario_id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    pub async fn count_progresos_completados(&self, usuario_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM progresos WHERE usuario_id = $1 AND completado",
        )
        .bind(usuario_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Reps/peso of every serie whose sesión falls after `since`
    pub async fn series_since(
        &self,
        usuario_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<SerieVolumen>> {
        let series = sqlx::query_as::<_, SerieVolumen>(
            r#"
            SELECT se.reps, se.peso
            FROM series se
            INNER JOIN sesiones s ON se.sesion_id = s.id
            WHERE s.usuario_id = $1 AND s.fecha >= $2
            "#,
        )
        .bind(usuario_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(series)
    }
}
