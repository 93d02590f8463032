use pegsol_core as game;

/// Pixel layout of the board, a fixed linear mapping between grid cells and SVG space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoardGeometry {
    pub cell_size: f64,
    /// Space between the SVG edge and the first cell.
    pub margin: f64,
    pub peg_radius: f64,
    pub hole_radius: f64,
}

impl BoardGeometry {
    pub(crate) const fn new(cell_size: f64) -> Self {
        let peg_radius = cell_size * 0.4;
        Self {
            cell_size,
            margin: cell_size / 2.,
            peg_radius,
            hole_radius: peg_radius * 0.75,
        }
    }

    /// `(width, height)` of the drawing for a board of `size`.
    pub(crate) fn extent(&self, (rows, cols): game::Coord2) -> (f64, f64) {
        (
            2. * self.margin + f64::from(cols) * self.cell_size,
            2. * self.margin + f64::from(rows) * self.cell_size,
        )
    }

    pub(crate) fn cell_at(&self, (rows, cols): game::Coord2, x: f64, y: f64) -> Option<game::Coord2> {
        let col = ((x - self.margin) / self.cell_size).floor();
        let row = ((y - self.margin) / self.cell_size).floor();

        if !(0.0..f64::from(cols)).contains(&col) || !(0.0..f64::from(rows)).contains(&row) {
            return None;
        }
        Some((row as game::Coord, col as game::Coord))
    }

    /// `(x, y)` of the middle of a cell.
    pub(crate) fn cell_center(&self, (row, col): game::Coord2) -> (f64, f64) {
        (
            self.margin + (f64::from(col) + 0.5) * self.cell_size,
            self.margin + (f64::from(row) + 0.5) * self.cell_size,
        )
    }

    /// Whether `(x, y)` falls on the circular peg drawn in `coords`.
    pub(crate) fn peg_contains(&self, coords: game::Coord2, x: f64, y: f64) -> bool {
        let (cx, cy) = self.cell_center(coords);
        (x - cx).hypot(y - cy) <= self.peg_radius
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(50.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: game::Coord2 = (7, 7);

    #[test]
    fn default_geometry_matches_cell_size() {
        let geometry = BoardGeometry::default();

        assert_eq!(geometry.margin, 25.);
        assert_eq!(geometry.peg_radius, 20.);
        assert_eq!(geometry.hole_radius, 15.);
        assert_eq!(geometry.extent(SIZE), (400., 400.));
    }

    #[test]
    fn pixels_map_to_cells_row_first() {
        let geometry = BoardGeometry::default();

        assert_eq!(geometry.cell_at(SIZE, 25., 25.), Some((0, 0)));
        assert_eq!(geometry.cell_at(SIZE, 74.9, 25.), Some((0, 0)));
        assert_eq!(geometry.cell_at(SIZE, 75., 25.), Some((0, 1)));
        assert_eq!(geometry.cell_at(SIZE, 190., 140.), Some((2, 3)));
        assert_eq!(geometry.cell_at(SIZE, 374.9, 374.9), Some((6, 6)));
    }

    #[test]
    fn margin_and_beyond_map_to_nothing() {
        let geometry = BoardGeometry::default();

        assert_eq!(geometry.cell_at(SIZE, 10., 100.), None);
        assert_eq!(geometry.cell_at(SIZE, 100., 24.9), None);
        assert_eq!(geometry.cell_at(SIZE, 375., 100.), None);
        assert_eq!(geometry.cell_at(SIZE, -50., -50.), None);
    }

    #[test]
    fn peg_hit_area_is_a_circle() {
        let geometry = BoardGeometry::default();
        let (cx, cy) = geometry.cell_center((3, 3));

        assert_eq!((cx, cy), (200., 200.));
        assert!(geometry.peg_contains((3, 3), cx, cy));
        assert!(geometry.peg_contains((3, 3), cx + 20., cy));
        assert!(geometry.peg_contains((3, 3), cx + 12., cy + 12.));
        // inside the cell square, outside the circle
        assert!(!geometry.peg_contains((3, 3), cx + 15., cy + 15.));
        assert!(!geometry.peg_contains((3, 3), cx + 24., cy));
    }
}
