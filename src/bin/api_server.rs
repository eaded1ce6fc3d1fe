// src/bin/api_server.rs

use axum::Router;
use travel_wish::infra::config::ServerConfig;
use travel_wish::infra::logging::{self, info};
use travel_wish::infra::shutdown;
use travel_wish::transport;
use travel_wish::{AccommodationStore, DestinationCatalog};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads `.env` before building the log filter, so RUST_LOG from the file applies.
    logging::init_tracing()?;
    let config = ServerConfig::from_env()?;

    // --- Store Initialization ---
    let store = if config.seed_sample_data {
        AccommodationStore::with_sample_data()
    } else {
        AccommodationStore::new()
    };
    info!(records = store.len(), seeded = config.seed_sample_data, "accommodation store initialized");

    let app_state = transport::http::AppState::new(store, DestinationCatalog::featured());

    // --- API Server Initialization ---
    let docs: Router = Router::from(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
    )
    .layer(transport::http::cors_layer());
    let app = transport::http::create_router(app_state.clone()).merge(docs);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server is running on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;

    let remaining = app_state.store.read().await.len();
    info!(records = remaining, "accommodation store discarded, shutdown complete");
    Ok(())
}
