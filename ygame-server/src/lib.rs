//! YGAME Server - HTTP API for the board frontend
//!
//! This crate provides the web backend:
//! - REST API for board topology, geometry, and game operations
//! - Static file serving for the SVG frontend

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};

pub use state::{ServerState, Session};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub board_size: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8003,
            static_dir: "webapp/dist".to_string(),
            board_size: 9,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board topology and geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game/view", get(routes::game::get_view))
        .route("/api/game/new", post(routes::game::new_game))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/hover", post(routes::game::set_hover))
        .route("/api/game/reset", post(routes::game::reset_game))
        // Shared state
        .with_state(state)
        // Dev frontend runs on another port
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.board_size)?);
    let router = create_router(&config, state);

    tracing::info!("YGAME server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
