use sqlx::PgPool;
use storage::{
    dto::rutina::{CreateRutinaRequest, UpdateRutinaRequest},
    error::Result,
    models::Rutina,
    repository::rutina::RutinaRepository,
};

/// Create a rutina for a usuario
pub async fn create_rutina(pool: &PgPool, req: &CreateRutinaRequest) -> Result<Rutina> {
    let repo = RutinaRepository::new(pool);
    repo.create(req).await
}

/// List every rutina in the system (instructor overview)
pub async fn list_rutinas(pool: &PgPool) -> Result<Vec<Rutina>> {
    let repo = RutinaRepository::new(pool);
    repo.list().await
}

/// List the rutinas owned by one usuario
pub async fn list_rutinas_por_usuario(pool: &PgPool, usuario_id: i32) -> Result<Vec<Rutina>> {
    let repo = RutinaRepository::new(pool);
    repo.list_by_usuario(usuario_id).await
}

/// Partially update a rutina
pub async fn update_rutina(pool: &PgPool, id: i32, req: &UpdateRutinaRequest) -> Result<Rutina> {
    let repo = RutinaRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, req).await
}

/// Delete a rutina
pub async fn delete_rutina(pool: &PgPool, id: i32) -> Result<()> {
    let repo = RutinaRepository::new(pool);
    repo.delete(id).await
}
