use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Stable index of a piece in the engine's piece table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub(crate) CellCount);

impl PieceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Normal,
    Selected,
}

/// A single peg. Captured pegs stay in the table, hidden, so undo can bring them back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    coords: Coord2,
    selection: SelectionState,
    visible: bool,
}

impl Piece {
    pub const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            selection: SelectionState::Normal,
            visible: true,
        }
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    pub const fn is_selected(&self) -> bool {
        matches!(self.selection, SelectionState::Selected)
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selection = if selected {
            SelectionState::Selected
        } else {
            SelectionState::Normal
        };
    }

    /// Grid and piece coordinates must change together, only the engine calls this.
    pub(crate) fn move_to(&mut self, coords: Coord2) {
        self.coords = coords;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_is_visible_and_unselected() {
        let piece = Piece::new((2, 4));

        assert_eq!((piece.row(), piece.col()), (2, 4));
        assert!(piece.is_visible());
        assert_eq!(piece.selection(), SelectionState::Normal);
    }

    #[test]
    fn hide_show_and_select_toggle_state() {
        let mut piece = Piece::new((0, 2));

        piece.hide();
        assert!(!piece.is_visible());
        piece.show();
        assert!(piece.is_visible());

        piece.set_selected(true);
        assert!(piece.is_selected());
        piece.set_selected(false);
        assert_eq!(piece.selection(), SelectionState::Normal);
    }
}
