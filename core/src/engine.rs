use alloc::vec::Vec;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One executed jump together with the pieces it touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    mv: Move,
    moved: PieceId,
    captured: PieceId,
}

/// Observable board state, everything a renderer reads besides hints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cells: Array2<Cell>,
    pub pieces: Vec<Piece>,
    pub selected: Option<PieceId>,
    pub move_count: usize,
}

#[derive(Clone, Debug)]
pub struct BoardEngine {
    layout: BoardLayout,
    cells: Array2<Cell>,
    pieces: Vec<Piece>,
    selected: Option<PieceId>,
    legal_moves: MoveList,
    history: Vec<HistoryEntry>,
    hint: Option<Hint>,
    rng: SmallRng,
}

impl BoardEngine {
    pub fn new(layout: BoardLayout, seed: u64) -> Self {
        let (cells, pieces) = Self::populate(&layout);
        log::debug!("new board with {} pegs, seed {}", pieces.len(), seed);
        Self {
            layout,
            cells,
            pieces,
            selected: None,
            legal_moves: MoveList::new(),
            history: Vec::new(),
            hint: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn english(seed: u64) -> Self {
        Self::new(BoardLayout::english(), seed)
    }

    /// Every playable cell gets a peg except the starting hole, ids follow row-major order.
    fn populate(layout: &BoardLayout) -> (Array2<Cell>, Vec<Piece>) {
        let mut cells = Array2::from_elem(layout.size().to_nd_index(), Cell::Invalid);
        let mut pieces = Vec::with_capacity(layout.playable_count().into());

        for coords in layout.playable_cells() {
            cells[coords.to_nd_index()] = if coords == layout.start_empty() {
                Cell::Empty
            } else {
                let id = PieceId(pieces.len() as CellCount);
                pieces.push(Piece::new(coords));
                Cell::Occupied(id)
            };
        }

        (cells, pieces)
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn is_playable(&self, coords: Coord2) -> bool {
        self.layout.is_playable(coords)
    }

    /// `Cell::Invalid` for anything off the board, including out-of-range coordinates.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        if self.is_playable(coords) {
            self.cells[coords.to_nd_index()]
        } else {
            Cell::Invalid
        }
    }

    pub fn piece_at(&self, coords: Coord2) -> Option<PieceId> {
        self.cell_at(coords).piece()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// All pieces ever placed, captured ones included (hidden).
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (PieceId(index as CellCount), piece))
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected
    }

    /// Legal moves of the selected piece, empty when nothing is selected.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_legal_target(&self, coords: Coord2) -> bool {
        self.legal_moves.iter().any(|mv| mv.target == coords)
    }

    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    pub fn hint_source(&self) -> Option<PieceId> {
        self.hint.map(|hint| hint.source)
    }

    pub fn hint_move(&self) -> Option<Move> {
        self.hint.map(|hint| hint.mv)
    }

    pub fn piece_count(&self) -> CellCount {
        self.pieces.iter().filter(|piece| piece.is_visible()).count() as CellCount
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> impl Iterator<Item = Move> {
        self.history.iter().map(|entry| entry.mv)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Recomputed from scratch on every call.
    pub fn has_any_legal_move(&self) -> bool {
        self.all_legal_moves().next().is_some()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.cells.clone(),
            pieces: self.pieces.clone(),
            selected: self.selected,
            move_count: self.history.len(),
        }
    }

    /// Single entry point for a board click, returns whether a jump was executed.
    pub fn select_or_move_at(&mut self, coords: Coord2) -> bool {
        if !self.is_playable(coords) {
            return false;
        }

        self.hint = None;

        match self.piece_at(coords) {
            Some(id) if self.selected == Some(id) => {
                log::trace!("deselect {} at {:?}", id, coords);
                self.clear_selection();
                false
            }
            Some(id) => {
                self.clear_selection();
                self.select(id);
                false
            }
            None => {
                if self.selected.is_none() {
                    return false;
                }

                let chosen = self
                    .legal_moves
                    .iter()
                    .find(|mv| mv.target == coords)
                    .copied();
                match chosen {
                    Some(mv) => self.execute(mv),
                    None => {
                        log::trace!("no move onto {:?}, dropping selection", coords);
                        self.clear_selection();
                        false
                    }
                }
            }
        }
    }

    /// Reverts the latest jump, `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        let HistoryEntry {
            mv,
            moved,
            captured,
        } = entry;

        self.cells[mv.target.to_nd_index()] = Cell::Empty;
        self.cells[mv.source.to_nd_index()] = Cell::Occupied(moved);
        self.cells[mv.middle.to_nd_index()] = Cell::Occupied(captured);
        self.pieces[moved.index()].move_to(mv.source);
        self.pieces[captured.index()].show();

        self.clear_selection();
        self.hint = None;
        log::debug!("undo {:?}, {} moves left in history", mv, self.history.len());
        true
    }

    /// Rebuilds the starting position. The hint RNG keeps its state.
    pub fn restart(&mut self) {
        let (cells, pieces) = Self::populate(&self.layout);
        self.cells = cells;
        self.pieces = pieces;
        self.selected = None;
        self.legal_moves.clear();
        self.history.clear();
        self.hint = None;
        log::debug!("restart with {} pegs", self.pieces.len());
    }

    /// Suggests the jump landing closest to the board centre, breaking ties at random.
    ///
    /// Does nothing while a piece is selected. Clears any previous hint otherwise, and
    /// leaves it cleared when no jump exists.
    pub fn compute_hint(&mut self) -> Option<Hint> {
        if self.selected.is_some() {
            return None;
        }

        let candidates: Vec<Hint> = self
            .all_legal_moves()
            .map(|(source, mv)| Hint { source, mv })
            .collect();
        self.hint = pick_closest(candidates, self.layout.center(), &mut self.rng);

        if let Some(hint) = self.hint {
            log::debug!("hint: {} {:?}", hint.source, hint.mv);
        }
        self.hint
    }

    fn select(&mut self, id: PieceId) {
        let coords = self.pieces[id.index()].coords();
        self.pieces[id.index()].set_selected(true);
        self.selected = Some(id);
        self.legal_moves = self.moves_from(coords);
        log::trace!(
            "select {} at {:?}, {} legal moves",
            id,
            coords,
            self.legal_moves.len()
        );
    }

    fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            self.pieces[id.index()].set_selected(false);
        }
        self.legal_moves.clear();
    }

    /// The only path that advances the game, `mv` must come from `moves_from`.
    fn execute(&mut self, mv: Move) -> bool {
        let (Some(moved), Some(captured)) = (self.piece_at(mv.source), self.piece_at(mv.middle))
        else {
            log::warn!("stale move {:?} ignored", mv);
            self.clear_selection();
            return false;
        };

        self.clear_selection();
        self.pieces[moved.index()].move_to(mv.target);
        self.pieces[captured.index()].hide();
        self.cells[mv.source.to_nd_index()] = Cell::Empty;
        self.cells[mv.middle.to_nd_index()] = Cell::Empty;
        self.cells[mv.target.to_nd_index()] = Cell::Occupied(moved);
        self.history.push(HistoryEntry {
            mv,
            moved,
            captured,
        });

        log::debug!(
            "move {:?}, {} pegs left after {} moves",
            mv,
            self.piece_count(),
            self.history.len()
        );
        true
    }

    /// Jumps available to whatever stands on `source`, in canonical direction order.
    fn moves_from(&self, source: Coord2) -> MoveList {
        if self.piece_at(source).is_none() {
            return MoveList::new();
        }

        Direction::ALL
            .iter()
            .filter_map(|&dir| Move::jump(source, dir, self.size()))
            .filter(|mv| self.piece_at(mv.middle).is_some())
            .filter(|mv| matches!(self.cell_at(mv.target), Cell::Empty))
            .collect()
    }

    /// Every legal jump on the board, pieces scanned in row-major order.
    fn all_legal_moves(&self) -> impl Iterator<Item = (PieceId, Move)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| Some((cell.piece()?, (row as Coord, col as Coord))))
            .flat_map(|(id, coords)| self.moves_from(coords).into_iter().map(move |mv| (id, mv)))
    }
}
