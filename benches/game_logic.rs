use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cloud_jump::core::{find_landing, GameSnapshot, GameState};
use cloud_jump::term::{FrameBuffer, GameView, Viewport};
use cloud_jump::types::InputIntent;

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let intent = InputIntent::new(false, true);

    c.bench_function("game_step_16ms", |b| {
        b.iter(|| {
            if state.game_over {
                state.reset();
            }
            state.step(black_box(16), intent);
        })
    });
}

fn bench_landing_scan(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut player = state.player;
    player.vy = 5.0;
    let prev_y = player.y - player.vy;

    c.bench_function("find_landing", |b| {
        b.iter(|| find_landing(black_box(&state.platforms), black_box(&player), prev_y))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::new(12345).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_into_120x40", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(120, 40), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_landing_scan,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
