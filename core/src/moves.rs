use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One jump: the piece at `source` leaps over `middle` and lands on `target`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Coord2,
    pub middle: Coord2,
    pub target: Coord2,
}

impl Move {
    /// Geometry of a jump from `source` along `dir`, `None` when it would leave `bounds`.
    pub fn jump(source: Coord2, dir: Direction, bounds: Coord2) -> Option<Self> {
        Some(Self {
            source,
            middle: step(source, dir, 1, bounds)?,
            target: step(source, dir, 2, bounds)?,
        })
    }
}

/// A piece never has more than one move per direction.
pub type MoveList = SmallVec<[Move; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_places_middle_between_source_and_target() {
        let mv = Move::jump((1, 3), Direction::Down, (7, 7)).unwrap();

        assert_eq!(mv.middle, (2, 3));
        assert_eq!(mv.target, (3, 3));
    }

    #[test]
    fn jump_off_the_grid_is_none() {
        assert_eq!(Move::jump((1, 3), Direction::Up, (7, 7)), None);
        assert_eq!(Move::jump((3, 5), Direction::Right, (7, 7)), None);
    }
}
