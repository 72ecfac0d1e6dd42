use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Mutable per-square state stored in the board grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub is_mine: bool,
    /// Number of mine-holding cells in the 8-neighborhood, `0..=8`.
    pub adjacent_mines: u8,
}

impl CellState {
    pub const fn is_empty(self) -> bool {
        !self.is_mine && self.adjacent_mines == 0
    }
}

/// A cell state together with its grid position. Positions are derived from
/// the enumeration order and never stored in the grid itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub state: CellState,
}
