//! Board topology and geometry endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use ygame_core::{side_legend, CellGeometry, Side, SideInfo, Viewport};

#[derive(Serialize)]
pub struct CellInfo {
    pub q: i8,
    pub r: i8,
    pub sides: Vec<Side>,
    pub corner: bool,
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub size: u8,
    pub cells: Vec<CellInfo>,
    pub geometry: Vec<CellGeometry>,
    pub viewport: Viewport,
    pub legend: [SideInfo; 3],
}

/// Get board topology, per-cell geometry, and the display viewport
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<BoardInfo> {
    let session = state.session.read().unwrap();
    let topology = session.game.topology();

    let cells = topology
        .cells()
        .iter()
        .map(|&cell| {
            let sides = topology.sides(cell);
            CellInfo {
                q: cell.q,
                r: cell.r,
                sides: sides.iter().collect(),
                corner: sides.is_corner(),
            }
        })
        .collect();

    Json(BoardInfo {
        size: topology.size(),
        cells,
        geometry: session.geometry.clone(),
        viewport: session.viewport,
        legend: side_legend(),
    })
}
