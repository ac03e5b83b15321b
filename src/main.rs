//! Falldown entry point
//!
//! Headless demo loop: the autopilot steers the ball, the simulation runs
//! at the fixed tick rate, and each frame is rasterized by the selected
//! renderer backend. Pass `-software` to skip the accelerated backend,
//! `--seed <n>` to replay a specific run.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use falldown::Settings;
use falldown::input::{AutoPilot, InputEvent};
use falldown::render::{self, Backend};
use falldown::sim::{GamePhase, GameState, RowConfig, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Falldown starting...");

    let settings = Settings::load();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let backend = if settings.software_renderer || args.iter().any(|a| a == "-software") {
        Backend::Software
    } else {
        Backend::Accelerated
    };
    let seed = seed_arg(&args).or(settings.seed).unwrap_or_else(now_seed);

    let mut renderer = render::create(backend);
    let mut state = match GameState::new(seed, RowConfig::default()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid row configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("run initialized with seed {seed}");

    let log_every = settings.log_interval_ticks.max(1);
    let mut pilot = AutoPilot::new();
    let mut running = true;

    while running && state.phase == GamePhase::Playing {
        let events = pilot.drive(&state);
        if events.contains(&InputEvent::Quit) {
            // The in-flight tick still completes
            running = false;
        }
        tick(&mut state, &TickInput::from_events(events));
        renderer.render(&render::build_scene(&state));

        if state.time_ticks % log_every == 0 {
            log::info!(
                "tick {} score {} platforms {}",
                state.time_ticks,
                state.player.score,
                state.platforms.len()
            );
        }
        if state.time_ticks >= settings.max_run_ticks {
            log::info!("demo stop after {} ticks", state.time_ticks);
            break;
        }
        std::thread::sleep(Duration::from_millis(settings.tick_ms));
    }

    match state.phase {
        GamePhase::Won => println!("Graduated! Final score: {}", state.player.score),
        GamePhase::Lost => println!("Down and out. Final score: {}", state.player.score),
        GamePhase::Playing => println!("Run stopped. Score so far: {}", state.player.score),
    }
}

fn seed_arg(args: &[String]) -> Option<u64> {
    let position = args.iter().position(|a| a == "--seed")?;
    args.get(position + 1)?.parse().ok()
}

fn now_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
