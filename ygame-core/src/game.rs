//! Placement state machine - alternating turns, hover, reset

use crate::board::{Cell, InvalidBoardSize, Topology};
use rustc_hash::FxHashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Wire/display number
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

// Players travel as 1 / 2 on the wire, matching the frontend
impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        Player::from_number(n).ok_or_else(|| D::Error::custom(format!("invalid player {}", n)))
    }
}

/// A state machine input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Place(Cell),
    Hover(Option<Cell>),
    Reset,
}

/// Game state (operations return the successor state)
///
/// Owns the placement board, the current-turn indicator, and the transient
/// hover. No terminal state exists: placement alternates indefinitely.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    topology: Topology,

    /// Occupancy: cell -> owner, present only for occupied cells.
    /// A present key never changes owner (no captures, no overwrite).
    board: FxHashMap<Cell, Player>,

    current_player: Player,

    /// Transient, presentation-only
    hovered: Option<Cell>,
}

impl GameState {
    /// Empty board, Player One to move, no hover
    pub fn new(size: u8) -> Result<Self, InvalidBoardSize> {
        Ok(Self {
            topology: Topology::new(size)?,
            board: FxHashMap::default(),
            current_player: Player::One,
            hovered: None,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.board.get(&cell).copied()
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.board.contains_key(&cell)
    }

    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    /// Number of occupied cells
    pub fn move_count(&self) -> usize {
        self.board.len()
    }

    /// Iterate occupied cells
    pub fn moves(&self) -> impl Iterator<Item = (Cell, Player)> + '_ {
        self.board.iter().map(|(&cell, &player)| (cell, player))
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Apply an event to produce the successor state
    pub fn transition(&self, event: Event) -> GameState {
        match event {
            Event::Place(cell) => self.place_move(cell),
            Event::Hover(cell) => self.set_hover(cell),
            Event::Reset => self.reset(),
        }
    }

    /// Claim a cell for the current player and pass the turn
    ///
    /// Moving onto an occupied cell is a silent no-op (a double click is a
    /// harmless input race, not a caller bug): the board and the turn are
    /// left untouched. A cell outside the topology violates the caller's
    /// provenance contract and panics.
    pub fn place_move(&self, cell: Cell) -> GameState {
        assert!(
            self.topology.contains(cell),
            "cell ({}, {}) is not on a size-{} board",
            cell.q,
            cell.r,
            self.topology.size()
        );

        let mut next = self.clone();
        if next.board.contains_key(&cell) {
            return next;
        }
        next.board.insert(cell, next.current_player);
        next.current_player = next.current_player.opponent();
        next
    }

    /// Set or clear the hovered cell; never touches board or turn
    pub fn set_hover(&self, cell: Option<Cell>) -> GameState {
        if let Some(c) = cell {
            assert!(
                self.topology.contains(c),
                "cell ({}, {}) is not on a size-{} board",
                c.q,
                c.r,
                self.topology.size()
            );
        }

        let mut next = self.clone();
        next.hovered = cell;
        next
    }

    /// Back to the initial state: empty board, Player One, no hover
    pub fn reset(&self) -> GameState {
        GameState {
            topology: self.topology.clone(),
            board: FxHashMap::default(),
            current_player: Player::One,
            hovered: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> GameState {
        GameState::new(9).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = new_game();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.hovered(), None);
    }

    #[test]
    fn test_invalid_size_rejected() {
        assert!(GameState::new(0).is_err());
    }

    #[test]
    fn test_place_move() {
        let game = new_game().place_move(Cell::new(0, 0));
        assert_eq!(game.owner(Cell::new(0, 0)), Some(Player::One));
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_is_silent_noop() {
        let once = new_game().place_move(Cell::new(0, 0));
        let twice = once.place_move(Cell::new(0, 0));
        // Board unchanged, turn advanced exactly once
        assert_eq!(twice, once);
        assert_eq!(twice.owner(Cell::new(0, 0)), Some(Player::One));
        assert_eq!(twice.current_player(), Player::Two);
    }

    #[test]
    fn test_turns_alternate_strictly() {
        let mut game = new_game();
        for k in 0..10u8 {
            let expected = if k % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(game.current_player(), expected);
            game = game.place_move(Cell::new(k as i8 % 3, k as i8 / 3));
        }
        assert_eq!(game.move_count(), 10);
    }

    #[test]
    fn test_owners_never_change() {
        let mut game = new_game();
        game = game.place_move(Cell::new(1, 1)); // One
        game = game.place_move(Cell::new(2, 2)); // Two
        game = game.place_move(Cell::new(1, 1)); // rejected
        assert_eq!(game.owner(Cell::new(1, 1)), Some(Player::One));
        assert_eq!(game.owner(Cell::new(2, 2)), Some(Player::Two));
    }

    #[test]
    #[should_panic(expected = "not on a size-9 board")]
    fn test_place_outside_board_panics() {
        new_game().place_move(Cell::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "not on a size-9 board")]
    fn test_hover_outside_board_panics() {
        new_game().set_hover(Some(Cell::new(-1, 0)));
    }

    #[test]
    fn test_hover_does_not_touch_game() {
        let game = new_game().place_move(Cell::new(0, 0));
        let hovered = game.set_hover(Some(Cell::new(4, 2)));
        assert_eq!(hovered.hovered(), Some(Cell::new(4, 2)));
        assert_eq!(hovered.current_player(), game.current_player());
        assert_eq!(hovered.move_count(), game.move_count());

        let cleared = hovered.set_hover(None);
        assert_eq!(cleared.hovered(), None);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let initial = new_game();
        let played = initial
            .place_move(Cell::new(0, 0))
            .place_move(Cell::new(1, 0))
            .set_hover(Some(Cell::new(2, 0)));
        assert_eq!(played.current_player(), Player::One);

        let reset = played.reset();
        assert_eq!(reset, initial);

        // Idempotent
        assert_eq!(reset.reset(), initial);
    }

    #[test]
    fn test_transition_dispatch() {
        let game = new_game();
        let placed = game.transition(Event::Place(Cell::new(0, 0)));
        assert_eq!(placed.move_count(), 1);

        let hovered = placed.transition(Event::Hover(Some(Cell::new(1, 0))));
        assert_eq!(hovered.hovered(), Some(Cell::new(1, 0)));

        let reset = hovered.transition(Event::Reset);
        assert_eq!(reset, game);
    }

    #[test]
    fn test_spec_move_reset_scenario() {
        let game = new_game();
        let after_first = game.place_move(Cell::new(0, 0));
        assert_eq!(after_first.owner(Cell::new(0, 0)), Some(Player::One));
        assert_eq!(after_first.current_player(), Player::Two);

        let after_second = after_first.place_move(Cell::new(0, 0));
        assert_eq!(after_second, after_first);

        let reset = after_second.reset();
        assert_eq!(reset.move_count(), 0);
        assert_eq!(reset.current_player(), Player::One);
    }

    #[test]
    fn test_player_wire_format() {
        assert_eq!(serde_json::to_string(&Player::One).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Player>("2").unwrap(), Player::Two);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }
}
