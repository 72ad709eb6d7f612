//! Full-frame pipeline cost with a crowded arena.
//!
//! Each benchmark builds a game with N monsters scattered around the player and
//! measures one `Game::step` (all seven systems). Monsters are given more
//! health than the weapon can remove during the run so the population stays
//! constant.
//!
//! Run with: `cargo bench --bench pipeline_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use horde_game::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A game with `monster_count` monsters within 1500 units of the player.
fn setup_game(monster_count: usize) -> Game {
    let mut game = Game::new(GameConfig {
        seed: Some(0xBEEF),
        ..Default::default()
    })
    .expect("default config is valid");

    let center = *game
        .world()
        .get::<Position>(game.player())
        .expect("player has a position");
    let mut rng = Pcg64::seed_from_u64(7);
    let world = game.world_mut();
    for _ in 0..monster_count {
        let e = world.create_entity();
        world.set(
            e,
            Position {
                x: center.x + rng.gen_range(-1500.0..1500.0),
                y: center.y + rng.gen_range(-1500.0..1500.0),
            },
        );
        world.set(e, Velocity::ZERO);
        world.set(
            e,
            Renderable {
                color: Color::RED,
                radius: 15.0,
            },
        );
        world.set(e, Health::full(u32::MAX));
        world.set(
            e,
            Monster {
                speed: 100.0,
                xp_reward: 10,
            },
        );
    }
    game
}

// ---------------------------------------------------------------------------
// Benchmark 1: one full frame
// ---------------------------------------------------------------------------

fn bench_pipeline_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_frame");
    for monster_count in [100usize, 1_000, 10_000] {
        let mut game = setup_game(monster_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(monster_count),
            &monster_count,
            |b, _| {
                b.iter(|| black_box(game.step(black_box(1.0 / 60.0))));
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark 2: presentation read path
// ---------------------------------------------------------------------------

fn bench_draw_list(c: &mut Criterion) {
    let game = setup_game(1_000);
    let camera = game.camera();

    c.bench_function("draw_list_1k_monsters", |b| {
        b.iter(|| black_box(draw_list(game.world(), &camera)));
    });
}

criterion_group!(benches, bench_pipeline_frame, bench_draw_list);
criterion_main!(benches);
