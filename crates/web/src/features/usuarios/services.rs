use sqlx::PgPool;
use storage::{error::Result, models::Usuario, repository::usuario::UsuarioRepository};

/// List usuarios, optionally restricted to one rol
pub async fn list_usuarios(pool: &PgPool, rol: Option<&str>) -> Result<Vec<Usuario>> {
    let repo = UsuarioRepository::new(pool);
    repo.list(rol).await
}

/// Activate the suscripción flag of a usuario
pub async fn activate_suscripcion(pool: &PgPool, id: i32) -> Result<Usuario> {
    let repo = UsuarioRepository::new(pool);
    repo.activate_suscripcion(id).await
}
