#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod types;

/// Board shape and mine budget.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    /// The fixed 10×10 board with 10 mines.
    pub const STANDARD: Self = Self {
        size: (10, 10),
        mines: 10,
    };

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Rejects budgets that could never be placed; a board with more mines
    /// than cells would otherwise send placement hunting for distinct
    /// indices forever.
    pub fn validated(self) -> Result<Self> {
        if self.mines > self.total_cells() {
            Err(BoardError::TooManyMines {
                mines: self.mines,
                cells: self.total_cells(),
            })
        } else {
            Ok(self)
        }
    }
}
