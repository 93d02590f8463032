use pegsol_core as game;

use crate::geometry::BoardGeometry;

/// `MouseEvent::button` value of the main (usually left) button.
pub(crate) const PRIMARY_BUTTON: i16 = 0;

/// Everything the player can ask the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    SelectOrMoveAt(game::Coord2),
    Undo,
    Restart,
    Hint,
}

impl Command {
    /// Keyboard shortcuts: `R` restarts, `Ctrl+Z` undoes, `H` asks for a hint.
    pub(crate) fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        use Command::*;
        match (key, ctrl) {
            ("r" | "R", false) => Some(Restart),
            ("z" | "Z", true) => Some(Undo),
            ("h" | "H", false) => Some(Hint),
            _ => None,
        }
    }

    /// Board click at `(x, y)` in board pixels. Off-board cells still map, the engine ignores them.
    pub(crate) fn from_board_point(
        geometry: &BoardGeometry,
        size: game::Coord2,
        x: f64,
        y: f64,
    ) -> Option<Self> {
        geometry.cell_at(size, x, y).map(Command::SelectOrMoveAt)
    }
}
