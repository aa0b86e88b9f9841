use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use kiruna_api::{create_router, ApiConfig, AppState};
use kiruna_store::cdn::StaticCdn;
use kiruna_store::memory::{
    MemoryCoordinateStore, MemoryDocumentStore, MemoryMediaStore, MemoryUserStore,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiruna_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ApiConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.uses_default_secret() {
        tracing::warn!(
            "Using the development signing secret; set KIRUNA_AUTH_SECRET in production"
        );
    }

    tracing::info!(
        port = config.port,
        cors_origin = %config.cors_origin,
        cdn_base_url = %config.cdn_base_url,
        "Starting Kiruna Explorer API server"
    );

    let cors_origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => {
            tracing::error!("Invalid KIRUNA_CORS_ORIGIN value: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        Arc::new(MemoryCoordinateStore::new()),
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(MemoryMediaStore::new()),
        Arc::new(MemoryUserStore::new()),
        Arc::new(StaticCdn::new(config.cdn_base_url.clone())),
        config.auth.clone(),
    ));

    // The frontend sends the auth cookie cross-origin, so credentials must
    // be allowed and the origin pinned rather than wildcarded.
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
