use pegsol_core::*;

/// Every legal jump on the board, gathered through the public click API.
fn board_moves(engine: &BoardEngine) -> Vec<Move> {
    let mut probe = engine.clone();
    let occupied: Vec<Coord2> = probe
        .pieces()
        .filter(|(_, piece)| piece.is_visible())
        .map(|(_, piece)| piece.coords())
        .collect();

    let mut moves = Vec::new();
    for coords in occupied {
        probe.select_or_move_at(coords);
        moves.extend_from_slice(probe.legal_moves());
        probe.select_or_move_at(coords);
    }
    moves
}

fn play(engine: &mut BoardEngine, mv: Move) -> bool {
    engine.select_or_move_at(mv.source);
    engine.select_or_move_at(mv.target)
}

/// Always takes the first jump found, which reaches a terminal position quickly.
fn greedy_playout(engine: &mut BoardEngine) -> Vec<Move> {
    let mut played = Vec::new();
    while let Some(&mv) = board_moves(engine).first() {
        assert!(play(engine, mv));
        played.push(mv);
    }
    played
}

#[test]
fn every_opening_move_is_exactly_undone() {
    let mut engine = BoardEngine::english(1);
    let opening = engine.snapshot();
    let moves = board_moves(&engine);

    assert_eq!(moves.len(), 4);
    for mv in moves {
        assert!(play(&mut engine, mv), "{:?} should be playable", mv);
        assert_eq!(engine.piece_count(), 31);
        assert_eq!(engine.move_count(), 1);

        assert!(engine.undo());
        assert_eq!(engine.snapshot(), opening, "undo of {:?} diverged", mv);
    }
}

#[test]
fn moves_deeper_in_the_game_are_exactly_undone() {
    let mut engine = BoardEngine::english(1);
    play(
        &mut engine,
        Move::jump((1, 3), Direction::Down, (7, 7)).unwrap(),
    );
    play(
        &mut engine,
        Move::jump((2, 1), Direction::Right, (7, 7)).unwrap(),
    );
    let position = engine.snapshot();

    for mv in board_moves(&engine) {
        play(&mut engine, mv);
        engine.undo();
        assert_eq!(engine.snapshot(), position, "undo of {:?} diverged", mv);
    }
}

#[test]
fn piece_count_tracks_moves_and_undos() {
    let mut engine = BoardEngine::english(3);

    let played = greedy_playout(&mut engine);
    assert!(!played.is_empty());
    assert_eq!(usize::from(engine.piece_count()), 32 - played.len());
    assert_eq!(engine.move_count(), played.len());
    assert!(!engine.has_any_legal_move());

    let mut count = engine.piece_count();
    while engine.undo() {
        assert_eq!(engine.piece_count(), count + 1);
        count += 1;
    }
    assert_eq!(count, 32);
    assert_eq!(engine.snapshot(), BoardEngine::english(3).snapshot());
}

#[test]
fn history_replays_in_order() {
    let mut engine = BoardEngine::english(5);
    let played = greedy_playout(&mut engine);

    assert_eq!(engine.history().collect::<Vec<_>>(), played);
}

#[test]
fn jumps_follow_the_board_after_a_capture() {
    let mut engine = BoardEngine::english(0);
    // (1, 3) jumps into the centre, capturing (2, 3)
    play(
        &mut engine,
        Move::jump((1, 3), Direction::Down, (7, 7)).unwrap(),
    );

    // (0, 3) would need a peg on (1, 3)
    engine.select_or_move_at((0, 3));
    assert!(engine.legal_moves().is_empty());

    // (2, 5) can now land on the cell freed by the capture
    engine.select_or_move_at((2, 5));
    assert_eq!(
        engine.legal_moves(),
        &[Move::jump((2, 5), Direction::Left, (7, 7)).unwrap()]
    );

    // (4, 3) jumps back up over the peg that landed on (3, 3)
    engine.select_or_move_at((4, 3));
    assert_eq!(
        engine.legal_moves(),
        &[Move::jump((4, 3), Direction::Up, (7, 7)).unwrap()]
    );
}

#[test]
fn hint_always_lands_closest_to_the_centre() {
    for seed in 0..32 {
        let mut engine = BoardEngine::english(seed);
        for _ in 0..6 {
            let moves = board_moves(&engine);
            let Some(best) = moves.iter().map(|mv| manhattan(mv.target, (3, 3))).min() else {
                break;
            };

            let hint = engine.compute_hint().unwrap();
            assert!(moves.contains(&hint.mv));
            assert_eq!(manhattan(hint.mv.target, (3, 3)), best);
            assert_eq!(engine.piece_at(hint.mv.source), Some(hint.source));

            play(&mut engine, hint.mv);
        }
    }
}

#[test]
fn clicks_outside_the_mask_never_change_state() {
    let mut engine = BoardEngine::english(9);
    engine.select_or_move_at((3, 1));
    let before = engine.snapshot();

    for row in 0..=8 {
        for col in 0..=8 {
            if engine.is_playable((row, col)) {
                continue;
            }
            assert!(!engine.select_or_move_at((row, col)));
        }
    }
    assert_eq!(engine.snapshot(), before);
}
