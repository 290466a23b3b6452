use sqlx::PgPool;
use storage::{
    dto::usuario::{LoginRequest, RegisterRequest},
    error::Result,
    models::Usuario,
    repository::usuario::UsuarioRepository,
};

/// Register a new usuario; rol defaults to "alumno"
pub async fn register(pool: &PgPool, req: &RegisterRequest) -> Result<Usuario> {
    let repo = UsuarioRepository::new(pool);
    repo.create(req).await
}

/// Email+rol lookup; this system has no credentials beyond that
pub async fn login(pool: &PgPool, req: &LoginRequest) -> Result<Usuario> {
    let repo = UsuarioRepository::new(pool);
    repo.find_by_email_and_rol(&req.email, &req.rol).await
}
