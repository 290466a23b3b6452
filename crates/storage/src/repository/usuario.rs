use sqlx::PgPool;

use crate::dto::usuario::RegisterRequest;
use crate::error::{Result, StorageError};
use crate::models::Usuario;

pub struct UsuarioRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UsuarioRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &RegisterRequest) -> Result<Usuario> {
        let rol = req.rol.as_deref().unwrap_or("alumno");

        let created = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nombre, email, nivel, rol, suscripcion)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING id, nombre, email, nivel, rol, suscripcion, created_at
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.email)
        .bind(&req.nivel)
        .bind(rol)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match created {
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(
                format!("email '{}' is already registered", req.email),
            )),
            other => other,
        }
    }

    pub async fn find_by_email_and_rol(&self, email: &str, rol: &str) -> Result<Usuario> {
        sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, nombre, email, nivel, rol, suscripcion, created_at
            FROM usuarios
            WHERE email = $1 AND rol = $2
            "#,
        )
        .bind(email)
        .bind(rol)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// List usuarios ordered by nombre, optionally restricted to one rol
    pub async fn list(&self, rol: Option<&str>) -> Result<Vec<Usuario>> {
        let mut query = sqlx::QueryBuilder::new(
            "SELECT id, nombre, email, nivel, rol, suscripcion, created_at FROM usuarios",
        );

        if let Some(rol) = rol {
            query.push(" WHERE rol = ");
            query.push_bind(rol);
        }
        query.push(" ORDER BY nombre");

        let usuarios = query.build_query_as().fetch_all(self.pool).await?;

        Ok(usuarios)
    }

    pub async fn activate_suscripcion(&self, id: i32) -> Result<Usuario> {
        sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios
            SET suscripcion = TRUE
            WHERE id = $1
            RETURNING id, nombre, email, nivel, rol, suscripcion, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }
}
