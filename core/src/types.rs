/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds 8-neighborhood of `coords` (Chebyshev distance 1, self
/// excluded). Clips at the grid border, so corners yield 3 cells and
/// non-corner edge cells yield 5.
pub fn neighbors((x, y): Coord2, (size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let next_x = x.checked_add_signed(dx)?;
        let next_y = y.checked_add_signed(dy)?;
        (next_x < size_x && next_y < size_y).then_some((next_x, next_y))
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const SIZE: Coord2 = (10, 10);

    #[test]
    fn corner_neighborhood_clips_to_three_cells() {
        let found: Vec<_> = neighbors((0, 0), SIZE).collect();
        assert_eq!(found, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_neighborhood_clips_to_five_cells() {
        let found: Vec<_> = neighbors((0, 4), SIZE).collect();
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|&(x, _)| x <= 1));
    }

    #[test]
    fn interior_neighborhood_has_eight_cells_and_excludes_self() {
        let found: Vec<_> = neighbors((5, 5), SIZE).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(5, 5)));
    }

    #[test]
    fn far_corner_neighborhood_stays_in_bounds() {
        let found: Vec<_> = neighbors((9, 9), SIZE).collect();
        assert_eq!(found, [(8, 8), (9, 8), (8, 9)]);
    }
}
