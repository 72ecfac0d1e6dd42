use minegrid_core::{Cell, Coord2};
use serde::{Deserialize, Serialize};

/// Background style bucket for a painted cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellColor {
    Mine,
    Empty,
    Numbered,
}

impl CellColor {
    /// Styling hook for shells that map colors through css classes.
    pub const fn css_class(self) -> &'static str {
        use CellColor::*;
        match self {
            Mine => "mine",
            Empty => "empty",
            Numbered => "numbered",
        }
    }
}

/// One render instruction: what to draw on the widget at `coords`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPaint {
    pub coords: Coord2,
    pub label: String,
    pub color: CellColor,
}

impl CellPaint {
    /// Total mapping from cell state to display instruction. Mines take the
    /// mine color regardless of their own adjacency count; the label is
    /// always the count as text.
    pub fn for_cell(cell: &Cell) -> Self {
        let color = if cell.state.is_mine {
            CellColor::Mine
        } else if cell.state.is_empty() {
            CellColor::Empty
        } else {
            CellColor::Numbered
        };

        Self {
            coords: cell.coords,
            label: cell.state.adjacent_mines.to_string(),
            color,
        }
    }
}
