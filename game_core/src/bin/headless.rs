//! Headless runner: drives the fixed 30 Hz tick loop without a window.
//!
//! Usage: `headless [ticks] [seed] [config.toml]`
//! Logging follows `RUST_LOG` (default `info`).

use std::time::{Duration, Instant};

use game_core::{Config, Frame, GameMap, GameWorld, Presenter, TickClock};
use tracing::info;

/// Logs a one-line summary every second of game time
struct LogPresenter {
    every: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        if frame.tick % self.every != 0 {
            return;
        }
        let (x, y) = frame.ship.map(|s| (s.pos.x, s.pos.y)).unwrap_or_default();
        info!(
            tick = frame.tick,
            ship_x = x,
            ship_y = y,
            photons = frame.photons.len(),
            asteroids = frame.asteroids.len(),
            score = frame.score,
            hits = frame.ship_hits,
            "frame"
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(300);
    let seed: u64 = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(12345);
    let config = match args.next() {
        Some(path) => Config::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => Config::new(),
    };

    let period = Duration::from_secs_f32(config.tick_dt);
    let mut clock = TickClock::new(config.tick_dt, game_core::Params::MAX_FRAME_DT);
    let mut game = GameWorld::with_config(config, GameMap::for_viewport(500, 500), seed)?;
    let mut presenter = LogPresenter { every: 30 };
    info!(ticks, seed, "headless run starting");

    // Scripted pilot: hold thrust, weave left and right, tap fire
    game.thrust_forward(true);
    let started = Instant::now();
    let mut last = started;
    while game.ticks < ticks {
        std::thread::sleep(period);
        let now = Instant::now();
        let due = clock.advance(now.duration_since(last).as_secs_f32());
        last = now;

        for _ in 0..due {
            match game.ticks % 60 {
                0 => game.turn_left(true),
                20 => game.turn_left(false),
                30 => game.turn_right(true),
                50 => game.turn_right(false),
                _ => {}
            }
            if game.ticks % 8 == 0 {
                game.fire();
            } else if game.ticks % 8 == 4 {
                game.release_fire();
            }
            game.tick(&mut presenter);
        }
    }

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        score = game.score.points,
        destroyed = game.score.asteroids_destroyed,
        hits = game.score.ship_hits,
        "headless run finished"
    );
    Ok(())
}
