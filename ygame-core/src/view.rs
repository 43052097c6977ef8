//! View projection - per-cell presentation for the rendering frontend
//!
//! Pull-based: the frontend asks for the view after every state change.
//! Fill/stroke values are SVG color strings from the original dark theme.

use crate::board::{Cell, Side, SideSet};
use crate::game::{GameState, Player};
use crate::geometry::{viewport, CellGeometry, Point, Viewport};
use serde::Serialize;

// Dark cell palette
const CELL_BASE: &str = "#1a1a24";
const CELL_CORNER: &str = "#1e1e2a";
const CELL_STROKE: &str = "#2a2a3a";
const CELL_STROKE_CORNER: &str = "#333348";

/// Hex alpha suffix tinting single-side edge cells
const EDGE_TINT_ALPHA: &str = "28";

fn side_color(side: Side) -> &'static str {
    match side {
        Side::Left => "#f0a040",
        Side::Top => "#4fb3ff",
        Side::Bottom => "#f05070",
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "Left side",
        Side::Top => "Top side",
        Side::Bottom => "Bottom side",
    }
}

fn player_fill(player: Player) -> &'static str {
    match player {
        Player::One => "#c8c0f0",
        Player::Two => "#f0b84a",
    }
}

fn player_stroke(player: Player) -> &'static str {
    match player {
        Player::One => "#9080d0",
        Player::Two => "#c08828",
    }
}

/// Translucent preview fill while hovering an empty cell
fn hover_tint(player: Player) -> &'static str {
    match player {
        Player::One => "#c8c0f022",
        Player::Two => "#f0b84a22",
    }
}

/// Legend entry for one triangle side
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SideInfo {
    pub side: Side,
    pub name: &'static str,
    pub color: &'static str,
}

/// Display metadata for the three sides, in Left, Top, Bottom order
pub fn side_legend() -> [SideInfo; 3] {
    Side::ALL.map(|side| SideInfo {
        side,
        name: side_name(side),
        color: side_color(side),
    })
}

/// Everything the renderer needs for one cell
#[derive(Clone, Debug, Serialize)]
pub struct CellView {
    pub cell: Cell,
    pub center: Point,
    pub corners: [Point; 6],
    pub sides: Vec<Side>,
    pub owner: Option<Player>,
    pub hovered: bool,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

/// Complete board projection
#[derive(Clone, Debug, Serialize)]
pub struct BoardView {
    pub size: u8,
    pub current_player: Player,
    pub viewport: Viewport,
    pub cells: Vec<CellView>,
}

/// Project the current state onto cached geometry
pub fn project(state: &GameState, geometry: &[CellGeometry]) -> BoardView {
    debug_assert_eq!(geometry.len(), state.topology().cell_count());

    BoardView {
        size: state.topology().size(),
        current_player: state.current_player(),
        viewport: viewport(state.topology()),
        cells: geometry.iter().map(|geo| cell_view(state, geo)).collect(),
    }
}

fn cell_view(state: &GameState, geo: &CellGeometry) -> CellView {
    let sides = state.topology().sides(geo.cell);
    let owner = state.owner(geo.cell);
    // Hover never shows on an occupied cell
    let hovered = state.hovered() == Some(geo.cell) && owner.is_none();
    let (fill, stroke, stroke_width) = cell_style(sides, owner, hovered, state.current_player());

    CellView {
        cell: geo.cell,
        center: geo.center,
        corners: geo.corners,
        sides: sides.iter().collect(),
        owner,
        hovered,
        fill,
        stroke,
        stroke_width,
    }
}

/// Fill precedence: owner > hover tint > corner base > side tint > plain base
fn cell_style(
    sides: SideSet,
    owner: Option<Player>,
    hovered: bool,
    current: Player,
) -> (String, String, f32) {
    let base = if sides.is_corner() {
        CELL_CORNER.to_string()
    } else if let Some(side) = sides.iter().next() {
        format!("{}{}", side_color(side), EDGE_TINT_ALPHA)
    } else {
        CELL_BASE.to_string()
    };

    let fill = match owner {
        Some(player) => player_fill(player).to_string(),
        None if hovered => hover_tint(current).to_string(),
        None => base,
    };

    let stroke = match owner {
        Some(player) => player_stroke(player),
        None if sides.is_corner() => CELL_STROKE_CORNER,
        None => CELL_STROKE,
    }
    .to_string();

    let stroke_width = if sides.is_corner() { 1.5 } else { 1.0 };

    (fill, stroke, stroke_width)
}
