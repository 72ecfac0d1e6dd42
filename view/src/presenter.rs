use minegrid_core::{Board, Coord, Coord2, ToNdIndex};
use ndarray::Array2;

use crate::CellPaint;

/// Widget factory and sink implemented by the GUI shell. The presenter asks
/// for one handle per cell at startup and pushes paints through them
/// afterwards; the shell decides what a handle actually is.
pub trait DisplaySurface {
    type Handle;

    fn create_cell(&mut self, coords: Coord2) -> Self::Handle;
    fn apply(&mut self, handle: &mut Self::Handle, paint: &CellPaint);
}

/// Binds a [`Board`] to a [`DisplaySurface`].
///
/// The handle grid is a parallel map from position to widget, populated once
/// at construction; the board itself never learns about widgets. Every
/// mutating board call is followed by a full render pass, and `&mut self`
/// keeps regenerate and render from overlapping.
pub struct Presenter<S: DisplaySurface> {
    board: Board,
    surface: S,
    handles: Array2<S::Handle>,
}

impl<S: DisplaySurface> Presenter<S> {
    /// Builds the handle grid and paints the board's current state.
    pub fn new(board: Board, mut surface: S) -> Self {
        let handles = Array2::from_shape_fn(board.size().to_nd_index(), |(x, y)| {
            surface.create_cell((x as Coord, y as Coord))
        });

        let mut presenter = Self {
            board,
            surface,
            handles,
        };
        presenter.render_all();
        presenter
    }

    /// Standard 10×10 session: fresh board with its first layout placed and
    /// painted.
    pub fn start(surface: S) -> Self {
        let mut presenter = Self::new(Board::standard(), surface);
        presenter.regenerate();
        presenter
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Clears the board, places a fresh mine layout, and repaints every
    /// cell. Layouts are drawn from the thread rng, so two calls are free to
    /// produce the same or different boards.
    pub fn regenerate(&mut self) {
        log::debug!("regenerating mine layout");
        self.board.place_mines(&mut rand::rng());
        self.render_all();
    }

    /// Pushes one paint per cell to the surface.
    pub fn render_all(&mut self) {
        for cell in self.board.cells() {
            let paint = CellPaint::for_cell(&cell);
            let handle = &mut self.handles[cell.coords.to_nd_index()];
            self.surface.apply(handle, &paint);
        }
    }

    /// Pull-style render list for consumers that don't hold a surface.
    pub fn paints(&self) -> Vec<CellPaint> {
        self.board
            .cells()
            .map(|cell| CellPaint::for_cell(&cell))
            .collect()
    }
}
