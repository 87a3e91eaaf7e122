//! Tilebound headless demo runner
//!
//! Loads a level (and optionally a JSON config), then drives the fixed-step
//! loop in real time with a scripted input pattern: hold right, tap jump once
//! a second. Player and camera state is logged once a second; rendering is
//! someone else's job.
//!
//! Usage: `tilebound [level.csv] [config.json]`

use std::time::{Duration, Instant};

use tilebound::sim::{tick, Button, GameState, InputState, TileGrid};
use tilebound::{Config, FixedTimestep};

/// How long the scripted session runs
const SESSION: Duration = Duration::from_secs(10);

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let level_path = args.next().unwrap_or_else(|| "assets/level1.csv".into());
    let config = match args.next() {
        Some(path) => Config::from_json(&std::fs::read_to_string(&path)?)?,
        None => Config::default(),
    };

    let grid = TileGrid::parse(&std::fs::read_to_string(&level_path)?)?;
    log::info!(
        "loaded {} ({}x{} tiles, {}x{} world units)",
        level_path,
        grid.width(),
        grid.height(),
        grid.world_width(config.tile_size),
        grid.world_height(config.tile_size),
    );

    let mut state = GameState::new(grid, &config);
    let mut input = InputState::new();
    let mut timestep = FixedTimestep::new(config.fixed_dt, config.max_frame_time);

    input.press(Button::Right, false);

    let start = Instant::now();
    let mut prev = start;
    let mut last_logged_sec = u64::MAX;
    let mut last_jump_sec = u64::MAX;

    while start.elapsed() < SESSION {
        let now = Instant::now();
        let frame_time = now.duration_since(prev).as_secs_f32();
        prev = now;

        // Poll batch: tap jump once a second, then derive edges
        let sec = start.elapsed().as_secs();
        if sec != last_jump_sec {
            last_jump_sec = sec;
            input.press(Button::Jump, false);
            input.release(Button::Jump);
        }
        input.update();

        for _ in 0..timestep.advance(frame_time) {
            tick(&mut state, &input, &config, config.fixed_dt);
            // one-shot edge is spent by the first step of the frame
            input.jump_pressed = false;
        }

        // a renderer would consume state here, once per frame
        if sec != last_logged_sec {
            last_logged_sec = sec;
            log::info!(
                "t={}s tick={} player={:.1},{:.1} grounded={} camera={:.1},{:.1}",
                sec,
                state.time_ticks,
                state.player.pos.x,
                state.player.pos.y,
                state.player.grounded,
                state.camera.origin.x,
                state.camera.origin.y,
            );
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    log::info!("session done after {} ticks", state.time_ticks);
    Ok(())
}
