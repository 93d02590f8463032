use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for peg counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
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

/// Manhattan distance between two cells.
pub const fn manhattan(a: Coord2, b: Coord2) -> CellCount {
    (a.0.abs_diff(b.0) as CellCount) + (a.1.abs_diff(b.1) as CellCount)
}

/// Axis a jump can travel along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Canonical scan order, hint tie-breaking depends on it staying fixed.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit step as `(d_row, d_col)`.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Right => (0, 1),
            Left => (0, -1),
            Down => (1, 0),
            Up => (-1, 0),
        }
    }
}

/// Applies `steps` units of `dir` to `coords`, returning a value only when it remains in bounds.
pub fn step(coords: Coord2, dir: Direction, steps: i8, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = dir.delta();
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.checked_mul(steps)?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.checked_mul(steps)?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_inside_bounds() {
        assert_eq!(step((3, 3), Direction::Right, 2, (7, 7)), Some((3, 5)));
        assert_eq!(step((3, 3), Direction::Up, 1, (7, 7)), Some((2, 3)));
        assert_eq!(step((0, 3), Direction::Up, 1, (7, 7)), None);
        assert_eq!(step((3, 6), Direction::Right, 2, (7, 7)), None);
        assert_eq!(step((5, 0), Direction::Down, 2, (7, 7)), None);
    }

    #[test]
    fn manhattan_is_symmetric() {
        assert_eq!(manhattan((1, 3), (3, 3)), 2);
        assert_eq!(manhattan((3, 3), (1, 3)), 2);
        assert_eq!(manhattan((0, 2), (3, 3)), 4);
    }
}
