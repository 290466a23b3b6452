use sqlx::PgPool;
use storage::{
    dto::progreso::{ProgresoEntry, UpsertProgresoRequest},
    error::Result,
    models::Progreso,
    repository::progreso::ProgresoRepository,
};

/// Create or refresh a completion mark
pub async fn upsert_progreso(pool: &PgPool, req: &UpsertProgresoRequest) -> Result<Progreso> {
    let repo = ProgresoRepository::new(pool);
    repo.upsert(req.usuario_id, req.rutina_id, req.completado).await
}

/// All completion marks across usuarios (instructor overview)
pub async fn list_progreso_global(pool: &PgPool) -> Result<Vec<Progreso>> {
    let repo = ProgresoRepository::new(pool);
    repo.list().await
}

/// Completion marks of one usuario, newest first
pub async fn list_progreso(pool: &PgPool, usuario_id: i32) -> Result<Vec<ProgresoEntry>> {
    let repo = ProgresoRepository::new(pool);
    repo.list_by_usuario(usuario_id).await
}

/// Remove a completion mark; removing an absent one is fine
pub async fn delete_progreso(pool: &PgPool, usuario_id: i32, rutina_id: i32) -> Result<()> {
    let repo = ProgresoRepository::new(pool);
    repo.delete(usuario_id, rutina_id).await
}
