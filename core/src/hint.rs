use core::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// A suggested jump and the piece that should make it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub source: PieceId,
    pub mv: Move,
}

/// Keeps every candidate whose target is closest to `center` and picks one of them uniformly.
pub(crate) fn pick_closest<R: Rng + ?Sized>(
    candidates: impl IntoIterator<Item = Hint>,
    center: Coord2,
    rng: &mut R,
) -> Option<Hint> {
    let mut best: SmallVec<[Hint; 8]> = SmallVec::new();
    let mut best_score = CellCount::MAX;

    for hint in candidates {
        let score = manhattan(hint.mv.target, center);
        match score.cmp(&best_score) {
            Ordering::Less => {
                best.clear();
                best.push(hint);
                best_score = score;
            }
            Ordering::Equal => best.push(hint),
            Ordering::Greater => {}
        }
    }

    if best.is_empty() {
        return None;
    }

    log::trace!("{} hint candidates at distance {}", best.len(), best_score);
    let pick = rng.random_range(0..best.len());
    Some(best[pick])
}
