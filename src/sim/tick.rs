//! Fixed timestep simulation tick
//!
//! One call advances the game by a single step: apply drained input, spawn
//! and retire rows, run the movement system, then check the terminal
//! conditions. Win and loss are terminal - ticking a finished state is a
//! no-op.

use super::rows;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::input::{InputEvent, Key};

/// Input drained from the event source for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn from_events(events: Vec<InputEvent>) -> Self {
        Self { events }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Steering: key-down holds a direction, key-up on either side releases.
    // Quit is the loop driver's concern, not the simulation's.
    for event in &input.events {
        match event {
            InputEvent::KeyDown(Key::Left) => state.player.movable.vel.vx = -STEER_SPEED,
            InputEvent::KeyDown(Key::Right) => state.player.movable.vel.vx = STEER_SPEED,
            InputEvent::KeyUp(Key::Left) | InputEvent::KeyUp(Key::Right) => {
                state.player.movable.vel.vx = 0
            }
            InputEvent::Quit => {}
        }
    }

    state.time_ticks += 1;
    state.player.score = state.time_ticks;

    // Extend the scroll with a fresh row at the incoming edge
    if state.time_ticks % ROW_INTERVAL_TICKS == 0 {
        for platform in rows::generate_row(&state.row_config, ROW_SPAWN_Y, &mut state.rng) {
            state.platforms.push(platform);
        }
    }

    // Scroll rate is reasserted every tick; rows fully above the playfield
    // are retired before anything moves
    for platform in state.platforms.iter_mut() {
        if !platform.is_static {
            platform.movable.vel.vy = RISE_RATE;
        }
    }
    let retired = state.platforms.retire_scrolled_out(RECYCLE_Y);
    if retired > 0 {
        log::debug!("retired {retired} platform(s), {} live", state.platforms.len());
    }

    state.movement.update(&mut state.player, &mut state.platforms);

    let rect = &state.player.movable.rect;
    if rect.top() <= RECYCLE_Y {
        state.phase = GamePhase::Won;
        log::info!(
            "graduated out the top after {} ticks, score {}",
            state.time_ticks,
            state.player.score
        );
    } else if rect.bottom() >= state.movement.bounds.max.y - PLATFORM_HEIGHT {
        state.phase = GamePhase::Lost;
        log::info!(
            "hit the floor after {} ticks, score {}",
            state.time_ticks,
            state.player.score
        );
    }
}
