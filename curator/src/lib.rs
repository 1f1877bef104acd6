//! # Curator
//!
//! Annotation tool over a follower export.
//!
//! Followers enter the store through an export upload (or the offline
//! `curator-import` binary), get annotated one by one with a location, tags
//! and notes, and come back out as aggregated views: a map payload of the
//! located followers, per-city groupings and per-city listings.
//!
//! The store is a single pretty-printed JSON file, read fully and rewritten
//! fully on every mutation. Mutating handlers serialize their
//! load-mutate-save cycle behind one in-process lock; the file itself is
//! still unguarded against other processes, which is acceptable for a
//! single-operator tool.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

use routes::{
    city_handler, followers_handler, import_handler, map_handler, stats_handler, update_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/", get(followers_handler).post(import_handler))
        .route("/update/{username}", post(update_handler))
        .route("/map", get(map_handler))
        .route("/stats", get(stats_handler))
        .route("/city/{city}", get(city_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
