// src/bin/api_server.rs

use people_registry::infra::{telemetry, Config, HttpEnricher};
use people_registry::transport;
use people_registry::{PersonService, PgPersonRepository};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;

    tracing::info!("connecting to database");
    let repo = PgPersonRepository::connect(&config.database_url, config.db_max_connections).await?;
    let enricher = HttpEnricher::new(config.enrich.clone())?;

    let app_state = transport::http::AppState {
        people: PersonService::new(Arc::new(repo), Arc::new(enricher)),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server is starting");
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server is successfully closed");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
    }
}
