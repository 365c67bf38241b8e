use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_merge::core::{can_move, slide, GridState, PlaySession, SessionConfig, SimpleRng};
use tui_merge::types::Direction;

fn busy_grid() -> GridState {
    GridState::from_rows(
        &[
            vec![2, 2, 4, 8],
            vec![0, 4, 4, 16],
            vec![32, 0, 32, 2],
            vec![2, 4, 8, 16],
        ],
        0,
    )
    .unwrap()
}

fn stuck_grid() -> GridState {
    GridState::from_rows(
        &[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ],
        0,
    )
    .unwrap()
}

fn bench_slide(c: &mut Criterion) {
    let grid = busy_grid();

    c.bench_function("slide_4x4_all_directions", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(slide(black_box(&grid), direction));
            }
        })
    });
}

fn bench_can_move_stuck(c: &mut Criterion) {
    let grid = stuck_grid();

    c.bench_function("can_move_stuck_4x4", |b| {
        b.iter(|| can_move(black_box(&grid)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut session = PlaySession::new(SessionConfig::default(), SimpleRng::new(12345)).unwrap();
    let mut step = 0usize;

    c.bench_function("apply_move_or_restart", |b| {
        b.iter(|| {
            step += 1;
            if session.apply_move(Direction::ALL[step % 4]).is_err() && session.is_game_over() {
                session.restart();
            }
            black_box(session.drain_events().count());
        })
    });
}

fn bench_large_grid(c: &mut Criterion) {
    let config = SessionConfig::builder().size(16, 16).build().unwrap();
    let session = PlaySession::new(config, SimpleRng::new(7)).unwrap();
    let grid = session.current().clone();

    c.bench_function("slide_16x16_left", |b| {
        b.iter(|| slide(black_box(&grid), Direction::Left))
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_can_move_stuck,
    bench_apply_move,
    bench_large_grid
);
criterion_main!(benches);
