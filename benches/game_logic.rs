use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flappy_tui::core::{GameState, Moment, Phase, Rankings, ScoreRecord};
use flappy_tui::term::{FrameBuffer, GameView, Viewport};
use flappy_tui::types::GameAction;
use std::time::Duration;

/// A game that flaps on a fixed rhythm and restarts whenever it crashes.
fn step(state: &mut GameState, now: Moment, i: &mut u32) {
    if state.phase() != Phase::Playing {
        state.handle(GameAction::Flap, now);
    }
    if *i % 15 == 0 {
        state.handle(GameAction::Flap, now);
    }
    *i = i.wrapping_add(1);
    black_box(state.tick(now));
}

fn bench_tick(c: &mut Criterion) {
    let now = Moment::now();
    let mut state = GameState::new(12345);
    let mut i = 0;

    c.bench_function("game_tick", |b| {
        b.iter(|| step(&mut state, now, &mut i))
    });
}

fn bench_rankings_insert(c: &mut Criterion) {
    let record = |score: u32| ScoreRecord {
        score,
        duration: Duration::from_millis(1000 + score as u64),
        ..ScoreRecord::default()
    };

    c.bench_function("rankings_insert_full", |b| {
        b.iter(|| {
            let mut rankings = Rankings::new();
            for score in 0..20 {
                rankings.insert(record(black_box(score)));
            }
            rankings
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let now = Moment::now();
    let mut state = GameState::new(12345);
    let mut i = 0;
    for _ in 0..40 {
        step(&mut state, now, &mut i);
    }

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_playing_120x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), now.instant, viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_rankings_insert, bench_render);
criterion_main!(benches);
