use chrono::prelude::*;
use chrono::TimeDelta;
use pegsol_core as game;

use crate::geometry::BoardGeometry;
use crate::input::Command;

pub(crate) const DEFAULT_HINT_DELAY_SECS: u32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Playing,
    Won,
    Stalled { pegs_left: game::CellCount },
}

impl GameStatus {
    pub(crate) const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Verdict shown on the game-over screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rating {
    Perfect,
    Great,
    TryAgain,
}

impl Rating {
    pub(crate) const fn from_pegs_left(pegs_left: game::CellCount) -> Self {
        match pegs_left {
            0 | 1 => Self::Perfect,
            2 | 3 => Self::Great,
            _ => Self::TryAgain,
        }
    }

    pub(crate) const fn message(self) -> &'static str {
        use Rating::*;
        match self {
            Perfect => "Perfect!",
            Great => "Very good!",
            TryAgain => "Try again",
        }
    }
}

/// One game in the browser: the engine plus the timing and game-over policy around it.
#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    pub engine: game::BoardEngine,
    last_action_at: DateTime<Utc>,
    hint_delay: TimeDelta,
}

impl GameSession {
    pub(crate) fn new(engine: game::BoardEngine, hint_delay: TimeDelta, now: DateTime<Utc>) -> Self {
        Self {
            engine,
            last_action_at: now,
            hint_delay,
        }
    }

    /// Derived from the board every time, so undo and restart leave game-over on their own.
    pub(crate) fn status(&self) -> GameStatus {
        if self.engine.has_any_legal_move() {
            return GameStatus::Playing;
        }
        match self.engine.piece_count() {
            0 | 1 => GameStatus::Won,
            pegs_left => GameStatus::Stalled { pegs_left },
        }
    }

    pub(crate) fn rating(&self) -> Rating {
        Rating::from_pegs_left(self.engine.piece_count())
    }

    /// Applies a player command, returns whether anything visible changed.
    pub(crate) fn dispatch(&mut self, command: Command, now: DateTime<Utc>) -> bool {
        use Command::*;

        match command {
            SelectOrMoveAt(coords) => {
                if self.status().is_over() || !self.engine.is_playable(coords) {
                    return false;
                }
                self.last_action_at = now;
                let before = (self.engine.selected_piece(), self.engine.hint());
                if self.engine.select_or_move_at(coords) {
                    let status = self.status();
                    if status.is_over() {
                        log::info!(
                            "game over after {} moves: {:?}",
                            self.engine.move_count(),
                            status
                        );
                    }
                    return true;
                }
                before != (self.engine.selected_piece(), self.engine.hint())
            }
            Undo => {
                let undone = self.engine.undo();
                if undone {
                    self.last_action_at = now;
                }
                undone
            }
            Restart => {
                self.engine.restart();
                self.last_action_at = now;
                true
            }
            Hint => {
                let before = self.engine.hint();
                let after = self.engine.compute_hint();
                before != after || after.is_some()
            }
        }
    }

    /// Shows a hint once the player has been idle for the hint delay.
    pub(crate) fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.engine.selected_piece().is_some() || self.engine.hint().is_some() {
            return false;
        }
        if now - self.last_action_at < self.hint_delay || self.status().is_over() {
            return false;
        }

        log::debug!("idle since {:?}, showing a hint", self.last_action_at);
        self.engine.compute_hint().is_some()
    }

    /// Cell whose peg is under `(x, y)`, used for hover feedback.
    pub(crate) fn peg_under(&self, geometry: &BoardGeometry, x: f64, y: f64) -> Option<game::Coord2> {
        let coords = geometry.cell_at(self.engine.size(), x, y)?;
        self.engine.piece_at(coords)?;
        geometry.peg_contains(coords, x, y).then_some(coords)
    }
}
