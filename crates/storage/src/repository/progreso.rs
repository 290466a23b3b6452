use sqlx::PgPool;

use crate::dto::progreso::ProgresoEntry;
use crate::error::{Result, StorageError};
use crate::models::Progreso;

pub struct ProgresoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProgresoRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create or refresh the completion mark for (usuario, rutina); `fecha`
    /// is bumped on every write.
    pub async fn upsert(
        &self,
        usuario_id: i32,
        rutina_id: i32,
        completado: bool,
    ) -> Result<Progreso> {
        let upserted = sqlx::query_as::<_, Progreso>(
            r#"
            INSERT INTO progresos (usuario_id, rutina_id, completado, fecha)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (usuario_id, rutina_id)
            DO UPDATE SET completado = EXCLUDED.completado, fecha = now()
            RETURNING usuario_id, rutina_id, completado, fecha
            "#,
        )
        .bind(usuario_id)
        .bind(rutina_id)
        .bind(completado)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match upserted {
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::ConstraintViolation(
                "usuario or rutina does not exist".to_owned(),
            )),
            other => other,
        }
    }

    pub async fn list_by_usuario(&self, usuario_id: i32) -> Result<Vec<ProgresoEntry>> {
        let entries = sqlx::query_as::<_, ProgresoEntry>(
            r#"
            SELECT rutina_id, completado, fecha
            FROM progresos
            WHERE usuario_id = $1
            ORDER BY fecha DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn list(&self) -> Result<Vec<Progreso>> {
        let progresos = sqlx::query_as::<_, Progreso>(
            "SELECT usuario_id, rutina_id, completado, fecha FROM progresos",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(progresos)
    }

    /// Idempotent: deleting an absent mark is not an error.
    pub async fn delete(&self, usuario_id: i32, rutina_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM progresos WHERE usuario_id = $1 AND rutina_id = $2")
            .bind(usuario_id)
            .bind(rutina_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
