use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use engine::game::{GameSettings, GameState, Point, Screen, SessionRng};

fn bench_tick_long_snake() {
    let settings = GameSettings {
        field_width: 100,
        field_height: 100,
        max_fences: 0,
        ..GameSettings::default()
    };
    let mut state = GameState::new(settings);
    state.screen = Screen::Gameplay;
    state.move_delay = 1.0;
    state.snake.grow(300);

    let mut rng = SessionRng::new(42);
    for _ in 0..60 {
        state.tick(&mut rng);
    }
}

fn bench_spawn_on_crowded_field() {
    let mut state = GameState::new(GameSettings::default());
    state.screen = Screen::Gameplay;
    // Park movement far in the future so every tick is pure placement work.
    state.move_delay = 1_000_000.0;

    let snake_row = state.snake.head().y;
    'fill: for y in 1..16 {
        if y == snake_row {
            continue;
        }
        for x in 0..15 {
            if !state.fences.try_append(Point::new(x, y)) {
                break 'fill;
            }
        }
    }

    let mut rng = SessionRng::new(42);
    for _ in 0..100 {
        state.fruit = None;
        state.tick(&mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("long_snake_60_ticks", |b| b.iter(bench_tick_long_snake));

    group.bench_function("spawn_on_crowded_field", |b| {
        b.iter(bench_spawn_on_crowded_field)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
