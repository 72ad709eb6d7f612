//! Headless host for the survival simulation.
//!
//! Runs the game at a fixed 60 Hz with a scripted walk pattern and logs the
//! HUD once per simulated second.
//!
//! ```text
//! horde-headless [CONFIG.json] [SECONDS]
//! RUST_LOG=horde_game=debug horde-headless config.json 300
//! ```

use anyhow::Context;
use horde_game::prelude::*;
use tracing::info;

const FRAME_DT: f64 = 1.0 / 60.0;
const FRAMES_PER_SECOND: u64 = 60;
const DEFAULT_SECONDS: u64 = 120;
/// Seconds spent walking in one direction before turning.
const LEG_SECONDS: u64 = 4;

/// Walk a square: up, right, down, left, repeat.
const WALK: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => GameConfig::default(),
    };
    let seconds = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid duration in seconds: {s:?}"))?,
        None => DEFAULT_SECONDS,
    };

    let mut game = Game::new(config).context("building game")?;
    info!(seconds, "starting headless run");

    let mut heading = None;
    for second in 0..seconds {
        let next = WALK[((second / LEG_SECONDS) % WALK.len() as u64) as usize];
        if heading != Some(next) {
            if let Some(previous) = heading {
                game.input().release(previous);
            }
            game.input().press(next);
            heading = Some(next);
        }

        for _ in 0..FRAMES_PER_SECOND {
            game.step(FRAME_DT);
        }

        if let Some(hud) = game.hud() {
            info!(
                t = second + 1,
                level = hud.level,
                xp = hud.xp_current,
                xp_to_next = hud.xp_to_next,
                damage = ?hud.damage,
                monsters = hud.monsters,
                "tick"
            );
        }
    }

    let hud = game
        .hud()
        .context("player lost its stats during the run")?;
    let diagnostics = game.pipeline().last_diagnostics();
    info!(
        frames = game.frame_count(),
        level = hud.level,
        monsters_alive = hud.monsters,
        last_frame_us = diagnostics.total_time.as_micros() as u64,
        "run complete"
    );
    println!("{}", serde_json::to_string_pretty(&hud)?);
    Ok(())
}
