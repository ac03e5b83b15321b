//! Per-tick movement and collision resolution
//!
//! Platforms move unconditionally. The player's move is resolved against
//! the collision index with a three-attempt fallback:
//!
//! 1. Full motion `(vx, FALL_RATE)` if nothing is in the way.
//! 2. Stepped vertical search: probe `(vx, vy)` for vy in
//!    `[RISE_RATE, FALL_RATE - 1]`, most upward candidate first, and take
//!    the first clear step. A ball resting on a scrolling platform keeps
//!    pace with it this way instead of sinking in or snapping away.
//! 3. Horizontal cancellation: if even the upward probe collides, drop vx
//!    and take the vertical-only step if it is clear.
//!
//! A tick with no clear move is a no-op, not an error - that is the
//! resting/wedged steady state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{CollisionIndex, Player};
use crate::consts::*;

/// World boundary, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bounds {
    /// The default playfield.
    pub fn world() -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        }
    }
}

/// Advances entities and resolves the player's motion each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementSystem {
    pub bounds: Bounds,
}

impl MovementSystem {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// One movement step: platforms first, then the player against the
    /// updated index.
    pub fn update(&self, player: &mut Player, platforms: &mut CollisionIndex) {
        self.advance_platforms(platforms);
        self.resolve_player(player, platforms);
    }

    fn advance_platforms(&self, platforms: &mut CollisionIndex) {
        for platform in platforms.iter_mut() {
            if platform.is_static {
                continue;
            }
            let movable = &mut platform.movable;
            movable.rect = movable.rect.translated(movable.vel.delta());
            self.clamp(&mut movable.rect, self.bounds.max.y);
        }
    }

    fn resolve_player(&self, player: &mut Player, platforms: &CollisionIndex) {
        player.movable.vel.vy = FALL_RATE;
        let start = player.movable.rect;
        let vx = player.movable.vel.vx;

        let full = start.translated(player.movable.vel.delta());
        if !platforms.hits(&full) {
            player.movable.rect = full;
        } else {
            player.movable.vel.vy = RISE_RATE;
            if !platforms.hits(&start.translated(IVec2::new(vx, RISE_RATE))) {
                // Stepped search over the legal vertical range, most upward
                // candidate first; the first clear step wins
                for vy in RISE_RATE..FALL_RATE {
                    let probe = start.translated(IVec2::new(vx, vy));
                    if !platforms.hits(&probe) {
                        player.movable.vel.vy = vy;
                        player.movable.rect = probe;
                        break;
                    }
                }
            } else {
                // Wedged diagonally: drop the horizontal component
                player.movable.vel.vx = 0;
                let vertical = start.translated(IVec2::new(0, RISE_RATE));
                if !platforms.hits(&vertical) {
                    player.movable.rect = vertical;
                }
            }
        }

        // The player's bottom stop sits one platform height above the raw
        // boundary so the ball rests on the frame instead of inside it
        self.clamp(&mut player.movable.rect, self.bounds.max.y - PLATFORM_HEIGHT);
    }

    fn clamp(&self, rect: &mut Rect, bottom_limit: i32) {
        rect.x = rect.x.max(self.bounds.min.x);
        if rect.right() > self.bounds.max.x {
            rect.x = self.bounds.max.x - rect.width;
        }
        rect.y = rect.y.max(self.bounds.min.y);
        if rect.bottom() > bottom_limit {
            rect.y = bottom_limit - rect.height;
        }
    }
}
