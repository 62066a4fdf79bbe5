pub mod config;
pub mod error;
pub mod handlers;
pub mod lead;
pub mod phone;
pub mod portfolio;
pub mod relay;
pub mod types;
pub mod whatsapp;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use handlers::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let images = ServeDir::new(state.config.public_dir.join("images_in"));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/api/whatsapp/send", post(handlers::send_consultation))
        .route("/api/portfolio", get(handlers::get_portfolio))
        .route("/api/health", get(handlers::health))
        .nest_service("/images_in", images)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
