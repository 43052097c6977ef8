//! Game API endpoints - view, moves, hover, reset, new game
//!
//! The wire is untrusted, so cell provenance is checked here before the
//! core is called: out-of-board cells come back as 422, never a panic.
//! Moving onto an occupied cell is the core's documented silent no-op.

use crate::state::{ServerState, Session};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use ygame_core::{project, Cell};

#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i8,
    pub r: i8,
}

/// Both coordinates set the hover; an empty body clears it
#[derive(Deserialize, Default)]
pub struct HoverRequest {
    pub q: Option<i8>,
    pub r: Option<i8>,
}

#[derive(Deserialize)]
pub struct NewGameRequest {
    pub size: u8,
}

fn unknown_cell(cell: Cell, size: u8) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": format!("cell ({}, {}) is not on a size-{} board", cell.q, cell.r, size)
        })),
    )
        .into_response()
}

/// Current board view projection
pub async fn get_view(State(state): State<Arc<ServerState>>) -> Response {
    let session = state.session.read().unwrap();
    Json(project(&session.game, &session.geometry)).into_response()
}

/// Apply a placement move and return the updated view
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Response {
    let mut session = state.session.write().unwrap();
    let cell = Cell::new(req.q, req.r);

    if !session.game.topology().contains(cell) {
        return unknown_cell(cell, session.game.topology().size());
    }

    session.game = session.game.place_move(cell);
    tracing::debug!("move ({}, {}), {} cells occupied", cell.q, cell.r, session.game.move_count());
    Json(project(&session.game, &session.geometry)).into_response()
}

/// Set or clear the hovered cell
pub async fn set_hover(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<HoverRequest>,
) -> Response {
    let mut session = state.session.write().unwrap();

    let cell = match (req.q, req.r) {
        (Some(q), Some(r)) => Some(Cell::new(q, r)),
        _ => None,
    };
    if let Some(c) = cell {
        if !session.game.topology().contains(c) {
            return unknown_cell(c, session.game.topology().size());
        }
    }

    session.game = session.game.set_hover(cell);
    Json(json!({ "ok": true })).into_response()
}

/// Reset the current game and return the fresh view
pub async fn reset_game(State(state): State<Arc<ServerState>>) -> Response {
    let mut session = state.session.write().unwrap();
    session.game = session.game.reset();
    Json(project(&session.game, &session.geometry)).into_response()
}

/// Replace the session with a fresh game of the given size
pub async fn new_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<NewGameRequest>,
) -> Response {
    match Session::new(req.size) {
        Ok(new_session) => {
            let mut session = state.session.write().unwrap();
            *session = new_session;
            tracing::info!("new game, board size {}", req.size);
            Json(project(&session.game, &session.geometry)).into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
