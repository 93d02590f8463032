#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use hint::*;
pub use moves::*;
pub use piece::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod hint;
mod moves;
mod piece;
mod types;

/// Which cells belong to the board and which one starts without a peg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct BoardLayout {
    mask: Array2<bool>,
    start_empty: Coord2,
}

/// Unchecked wire form, only turned into a `BoardLayout` through `BoardLayout::new`.
#[derive(Deserialize)]
struct RawLayout {
    mask: Array2<bool>,
    start_empty: Coord2,
}

impl TryFrom<RawLayout> for BoardLayout {
    type Error = GameError;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Self::new(raw.mask, raw.start_empty)
    }
}

impl BoardLayout {
    const PEG: char = '#';
    const START: char = 'o';
    const OFF_BOARD: char = '.';

    /// The 33-hole cross with the centre hole open.
    pub fn english() -> Self {
        let mask = Array2::from_shape_fn((7, 7), |(row, col)| {
            (2..5).contains(&row) || (2..5).contains(&col)
        });
        Self {
            mask,
            start_empty: (3, 3),
        }
    }

    pub fn new(mask: Array2<bool>, start_empty: Coord2) -> Result<Self> {
        let (rows, cols) = mask.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::BoardTooLarge);
        }

        let layout = Self { mask, start_empty };
        layout.validate_coords(start_empty)?;
        if !layout[start_empty] {
            return Err(GameError::UnplayableStart);
        }
        Ok(layout)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mask.dim();
        // bounded by `new`
        (rows as Coord, cols as Coord)
    }

    pub fn start_empty(&self) -> Coord2 {
        self.start_empty
    }

    /// Cell hints are scored against.
    pub fn center(&self) -> Coord2 {
        let (rows, cols) = self.size();
        (rows / 2, cols / 2)
    }

    /// Total function: anything outside the grid is simply not playable.
    pub fn is_playable(&self, coords: Coord2) -> bool {
        self.validate_coords(coords).is_ok_and(|coords| self[coords])
    }

    /// Playable cells in row-major order.
    pub fn playable_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mask
            .indexed_iter()
            .filter(|&(_, &playable)| playable)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn playable_count(&self) -> CellCount {
        self.playable_cells().count() as CellCount
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::english()
    }
}

impl Index<Coord2> for BoardLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mask[coords.to_nd_index()]
    }
}

/// Parses rows of `#` (peg), `o` (starting hole) and `.` (off-board).
impl FromStr for BoardLayout {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut start_empty = None;
        let mut rows = 0usize;
        let mut cols = None;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let mut width = 0usize;
            for ch in line.chars() {
                let coords = (rows as Coord, width as Coord);
                match ch {
                    Self::PEG => cells.push(true),
                    Self::OFF_BOARD => cells.push(false),
                    Self::START => {
                        if start_empty.replace(coords).is_some() {
                            return Err(GameError::DuplicateStartHole);
                        }
                        cells.push(true);
                    }
                    other => return Err(GameError::InvalidLayoutChar(other)),
                }
                width += 1;
            }

            if *cols.get_or_insert(width) != width {
                return Err(GameError::InvalidBoardShape);
            }
            rows += 1;
            if rows > Coord::MAX.into() || width > Coord::MAX.into() {
                return Err(GameError::BoardTooLarge);
            }
        }

        let cols = cols.ok_or(GameError::InvalidBoardShape)?;
        let start_empty = start_empty.ok_or(GameError::MissingStartHole)?;
        let mask = Array2::from_shape_vec((rows, cols), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::new(mask, start_empty)
    }
}

impl fmt::Display for BoardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();
        for row in 0..rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..cols {
                let ch = match (self[(row, col)], (row, col) == self.start_empty) {
                    (true, true) => Self::START,
                    (true, false) => Self::PEG,
                    (false, _) => Self::OFF_BOARD,
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
