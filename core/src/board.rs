use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// The full grid: per-cell state plus the configured shape and mine budget.
///
/// The grid is only ever rewritten wholesale: [`Board::place_mines`] starts
/// from a cleared grid and re-derives every adjacency count from scratch,
/// never incrementally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<CellState>,
}

impl Board {
    /// Creates an all-clear board, rejecting configs whose mine budget
    /// exceeds the cell count.
    pub fn new(config: BoardConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            config,
            grid: Array2::default(config.size.to_nd_index()),
        })
    }

    /// The fixed 10×10 board with 10 mines, all cells clear.
    pub fn standard() -> Self {
        Self::new(BoardConfig::STANDARD).expect("standard config fits its own board")
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.grid[coords.to_nd_index()]
    }

    /// Stable row-major enumeration of every cell with its position.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.indexed_iter().map(|((x, y), &state)| Cell {
            coords: (
                x.try_into().expect("grid axis fits Coord"),
                y.try_into().expect("grid axis fits Coord"),
            ),
            state,
        })
    }

    /// Coordinates of every cell currently holding a mine.
    pub fn mine_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells()
            .filter(|cell| cell.state.is_mine)
            .map(|cell| cell.coords)
    }

    /// Clears every mine flag and adjacency count.
    pub fn reset(&mut self) {
        self.grid.fill(CellState::default());
    }

    /// Places the configured number of mines uniformly at random and derives
    /// every cell's adjacency count.
    ///
    /// Always starts from a cleared grid, so repeated calls leave exactly
    /// `mine_count` mines regardless of prior state. Distinct cells are drawn
    /// without replacement, then each mine bumps the count of its clipped
    /// 8-neighborhood.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        let total = usize::from(self.config.total_cells());
        let mines = usize::from(self.config.mines);

        for flat in rand::seq::index::sample(rng, total, mines) {
            let coords = self.flat_to_coords(flat);
            self.grid[coords.to_nd_index()].is_mine = true;
            for neighbor in neighbors(coords, self.config.size) {
                self.grid[neighbor.to_nd_index()].adjacent_mines += 1;
            }
        }

        // double check mine count
        let placed = self.mine_cells().count();
        if placed != mines {
            log::warn!("placed {} mines, expected {}", placed, mines);
        }
        log::debug!(
            "placed {} mines on a {}x{} board",
            mines,
            self.config.size.0,
            self.config.size.1
        );
    }

    fn flat_to_coords(&self, flat: usize) -> Coord2 {
        let columns = usize::from(self.config.size.1);
        let x = (flat / columns).try_into().expect("grid axis fits Coord");
        let y = (flat % columns).try_into().expect("grid axis fits Coord");
        (x, y)
    }
}
