use criterion::{Criterion, criterion_group, criterion_main};
use pegsol_core::*;
use std::hint::black_box;

/// A mid-game position reached by always following the hint.
fn midgame(seed: u64, moves: usize) -> BoardEngine {
    let mut engine = BoardEngine::english(seed);
    for _ in 0..moves {
        let Some(hint) = engine.compute_hint() else {
            break;
        };
        engine.select_or_move_at(hint.mv.source);
        engine.select_or_move_at(hint.mv.target);
    }
    engine
}

fn bench_hint(c: &mut Criterion) {
    let mut group = c.benchmark_group("hint");

    for moves in [0, 8, 16] {
        let engine = midgame(11, moves);
        group.bench_function(format!("compute_hint/{moves}"), |b| {
            b.iter_batched_ref(
                || engine.clone(),
                |engine| black_box(engine.compute_hint()),
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("has_any_legal_move/{moves}"), |b| {
            b.iter(|| black_box(engine.has_any_legal_move()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hint);
criterion_main!(benches);
