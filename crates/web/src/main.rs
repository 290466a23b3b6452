use anyhow::Context;
use axum::{Json, Router, response::IntoResponse, routing::get};
use chrono::Utc;
use serde_json::json;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::usuarios::handlers::list_usuarios,
        features::usuarios::handlers::activate_suscripcion,
        features::rutinas::handlers::create_rutina,
        features::rutinas::handlers::list_rutinas,
        features::rutinas::handlers::list_rutinas_por_usuario,
        features::rutinas::handlers::update_rutina,
        features::rutinas::handlers::delete_rutina,
        features::progreso::handlers::upsert_progreso,
        features::progreso::handlers::list_progreso_global,
        features::progreso::handlers::list_progreso,
        features::progreso::handlers::delete_progreso,
        features::progreso::handlers::delete_progreso_por_ids,
        features::sesiones::handlers::start_sesion,
        features::sesiones::handlers::get_sesion,
        features::sesiones::handlers::patch_sesion,
        features::sesiones::handlers::list_series,
        features::sesiones::handlers::upsert_serie,
        features::sesiones::handlers::historial_ejercicio,
        features::stats::handlers::get_streaks,
        features::stats::handlers::get_calendar,
        features::stats::handlers::get_badges,
        features::stats::handlers::get_resumen,
    ),
    components(
        schemas(
            storage::models::Usuario,
            storage::models::Rutina,
            storage::models::Progreso,
            storage::models::Sesion,
            storage::models::Serie,
            storage::dto::usuario::RegisterRequest,
            storage::dto::usuario::LoginRequest,
            storage::dto::rutina::CreateRutinaRequest,
            storage::dto::rutina::UpdateRutinaRequest,
            storage::dto::progreso::UpsertProgresoRequest,
            storage::dto::progreso::DeleteProgresoRequest,
            storage::dto::progreso::ProgresoEntry,
            storage::dto::sesion::StartSesionRequest,
            storage::dto::sesion::UpdateSesionRequest,
            storage::dto::sesion::UpsertSerieRequest,
            storage::dto::sesion::SesionConSeries,
            storage::dto::stats::StreakSummary,
            storage::dto::stats::CalendarDay,
            storage::dto::stats::CalendarResponse,
            storage::dto::stats::Badge,
            storage::dto::stats::BadgesResponse,
            storage::dto::stats::ResumenResponse,
        )
    ),
    tags(
        (name = "auth", description = "Registration and email+rol lookup"),
        (name = "usuarios", description = "Usuario listing and suscripción"),
        (name = "rutinas", description = "Workout routine management"),
        (name = "progreso", description = "Per-rutina completion marks"),
        (name = "sesiones", description = "Workout sessions and logged series"),
        (name = "stats", description = "Streaks, calendar, badges and resumen"),
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up")
    )
)]
async fn healthz() -> impl IntoResponse {
    Json(json!({ "ok": true, "ts": Utc::now().timestamp_millis() }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting coaching API");

    let config = Config::from_env().context("Failed to load API configuration")?;

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(features::auth::routes())
        .merge(features::usuarios::routes())
        .merge(features::rutinas::routes())
        .merge(features::progreso::routes())
        .merge(features::sesiones::routes())
        .merge(features::stats::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // The frontend may be served from anywhere; there is nothing beyond
        // the email+rol lookup to protect.
        .layer(CorsLayer::very_permissive())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
