//! Continuum backend entrypoint.
//!
//! Wires configuration, the Postgres decision store, JWT session
//! validation, and the HTTP router together, then serves until a
//! shutdown signal arrives.

use std::sync::Arc;

use axum::middleware;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use continuum::adapters::auth::{JwtConfig, JwtSessionValidator};
use continuum::adapters::http::{auth_middleware, decision_router, AuthState, DecisionAppState};
use continuum::adapters::postgres::PostgresDecisionRepository;
use continuum::config::AppConfig;

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!("Starting Continuum backend");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = DecisionAppState::new(
        Arc::new(PostgresDecisionRepository::new(pool)),
        config.validation.policy(),
    );
    let validator: AuthState = Arc::new(JwtSessionValidator::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
    )));

    let cors = {
        let origins = config.server.cors_origins_list();
        if origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let parsed = origins
                .iter()
                .map(|o| o.parse())
                .collect::<Result<Vec<http::HeaderValue>, _>>()?;
            CorsLayer::new()
                .allow_origin(parsed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = decision_router()
        .with_state(state)
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
