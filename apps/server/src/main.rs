// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wallcover Server - coverage plans for the wall-finishing robot.
//!
//! Generates boustrophedon coverage paths for rectangular walls with
//! obstacles, stores them in SQLite and serves them back together with a
//! small browser frontend.
//!
//! # Endpoints
//!
//! - `GET /` - Plan viewer frontend
//! - `GET /static/*` - Frontend assets
//! - `GET /api/v1` - API information
//! - `GET /api/v1/health` - Health check
//! - `POST /plan` - Generate and store a plan, returns `{ "id": … }`
//! - `GET /plan/:id` - Retrieve a stored plan with its ordered points

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod config;
mod error;
mod extract;
mod middleware;
mod routes;
mod services;
mod types;

use config::Config;
use services::PlanStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: PlanStore,
    pub config: Arc<Config>,
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let static_dir = Path::new(&config.static_dir);

    Router::new()
        // Frontend
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        // API information and health
        .route("/api/v1", get(routes::health::info))
        .route("/api/v1/health", get(routes::health::check))
        // Plans
        .route("/plan", post(routes::plan::create_plan))
        .route("/plan/:id", get(routes::plan::get_plan))
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_kb * 1024))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer(&config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=debug,wallcover_server=debug".into());
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    tracing::info!(
        port = config.port,
        database_url = %config.database_url,
        static_dir = %config.static_dir,
        max_plan_points = config.max_plan_points,
        "Starting Wallcover Server"
    );

    let store = PlanStore::connect(&config.database_url, config.db_max_connections).await?;
    store.migrate().await?;
    tracing::info!("Database ready");

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
