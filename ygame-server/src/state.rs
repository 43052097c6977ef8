//! Server state management
//!
//! One active game session behind a lock. Geometry depends only on the
//! board size, so it is computed once per session and cached next to the
//! game state.

use std::sync::RwLock;
use ygame_core::{board_geometry, viewport, CellGeometry, GameState, InvalidBoardSize, Viewport};

/// A game plus its cached per-size geometry
#[derive(Clone, Debug)]
pub struct Session {
    pub game: GameState,
    pub geometry: Vec<CellGeometry>,
    pub viewport: Viewport,
}

impl Session {
    pub fn new(size: u8) -> Result<Self, InvalidBoardSize> {
        let game = GameState::new(size)?;
        let geometry = board_geometry(game.topology());
        let viewport = viewport(game.topology());
        Ok(Self {
            game,
            geometry,
            viewport,
        })
    }
}

/// Server-wide shared state
#[derive(Debug)]
pub struct ServerState {
    pub session: RwLock<Session>,
}

impl ServerState {
    pub fn new(board_size: u8) -> Result<Self, InvalidBoardSize> {
        Ok(Self {
            session: RwLock::new(Session::new(board_size)?),
        })
    }
}
