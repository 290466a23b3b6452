use sqlx::PgPool;

use crate::dto::rutina::{CreateRutinaRequest, UpdateRutinaRequest};
use crate::error::{Result, StorageError};
use crate::models::Rutina;

pub struct RutinaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RutinaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateRutinaRequest) -> Result<Rutina> {
        let created = sqlx::query_as::<_, Rutina>(
            r#"
            INSERT INTO rutinas (nombre, tipo, ejercicios, dias, usuario_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nombre, tipo, ejercicios, dias, usuario_id
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.tipo)
        .bind(&req.ejercicios)
        .bind(&req.dias)
        .bind(req.usuario_id)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match created {
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::ConstraintViolation(
                format!("usuario {} does not exist", req.usuario_id),
            )),
            other => other,
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Rutina> {
        sqlx::query_as::<_, Rutina>(
            "SELECT id, nombre, tipo, ejercicios, dias, usuario_id FROM rutinas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Apply a partial update on top of the stored row
    pub async fn update(
        &self,
        id: i32,
        existing: &Rutina,
        req: &UpdateRutinaRequest,
    ) -> Result<Rutina> {
        let nombre = req.nombre.as_ref().unwrap_or(&existing.nombre);
        let tipo = req.tipo.as_ref().unwrap_or(&existing.tipo);
        let ejercicios = req.ejercicios.as_ref().unwrap_or(&existing.ejercicios);
        let dias = req.dias.as_ref().unwrap_or(&existing.dias);

        sqlx::query_as::<_, Rutina>(
            r#"
            UPDATE rutinas
            SET nombre = $2, tipo = $3, ejercicios = $4, dias = $5
            WHERE id = $1
            RETURNING id, nombre, tipo, ejercicios, dias, usuario_id
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(tipo)
        .bind(ejercicios)
        .bind(dias)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn list_by_usuario(&self, usuario_id: i32) -> Result<Vec<Rutina>> {
        let rutinas = sqlx::query_as::<_, Rutina>(
            r#"
            SELECT id, nombre, tipo, ejercicios, dias, usuario_id
            FROM rutinas
            WHERE usuario_id = $1
            ORDER BY id
            "#,
        )
        .bind(usuario_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rutinas)
    }

    pub async fn list(&self) -> Result<Vec<Rutina>> {
        let rutinas = sqlx::query_as::<_, Rutina>(
            "SELECT id, nombre, tipo, ejercicios, dias, usuario_id FROM rutinas ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rutinas)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM rutinas WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
