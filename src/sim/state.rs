//! Game state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::movement::{Bounds, MovementSystem};
use super::rect::Rect;
use super::rows::{self, RowConfig, RowError};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The ball rode the scroll out the top of the shaft ("graduated")
    Won,
    /// The ball reached the bottom of the shaft
    Lost,
}

/// Per-tick integer displacement, owned by exactly one entity.
///
/// `vx` is written by input handling, `vy` by the tick (fall rate for the
/// player, scroll rate for platforms); the collision resolver overrides
/// both while resolving the player's move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    #[inline]
    pub fn delta(&self) -> IVec2 {
        IVec2::new(self.vx, self.vy)
    }
}

/// The box-plus-velocity aggregate every moving entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movable {
    pub rect: Rect,
    pub vel: Velocity,
}

impl Movable {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Velocity::default(),
        }
    }
}

/// The player's ball. One instance per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub movable: Movable,
    /// Monotone, derived from elapsed ticks
    pub score: u64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            movable: Movable::new(Rect::new(
                PLAYER_SPAWN_X,
                PLAYER_SPAWN_Y,
                PLAYER_SIZE,
                PLAYER_SIZE,
            )),
            score: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A platform bar.
///
/// Static platforms are the level frame: they never move and skip boundary
/// clamping. Dynamic platforms scroll upward and are retired once fully
/// above the playfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub movable: Movable,
    pub is_static: bool,
}

impl Platform {
    /// A scrolling row segment.
    pub fn scrolling(rect: Rect) -> Self {
        Self {
            movable: Movable {
                rect,
                vel: Velocity {
                    vx: 0,
                    vy: RISE_RATE,
                },
            },
            is_static: false,
        }
    }

    /// A fixed piece of level frame.
    pub fn fixed(rect: Rect) -> Self {
        Self {
            movable: Movable::new(rect),
            is_static: true,
        }
    }
}

/// The single owning collection of live platforms.
///
/// The player's box is never inserted, so overlap queries need no identity
/// checks to exclude it. The render list is derived from this collection
/// each frame rather than kept as a second list, so removal can't leave a
/// dangling draw or collision reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionIndex {
    platforms: Vec<Platform>,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// True if `rect` overlaps any live platform.
    pub fn hits(&self, rect: &Rect) -> bool {
        self.platforms.iter().any(|p| p.movable.rect.overlaps(rect))
    }

    /// Remove dynamic platforms whose top edge has reached `threshold`.
    ///
    /// `Vec::retain` compacts in place, so no removal happens while a caller
    /// is iterating. Returns the number retired.
    pub fn retire_scrolled_out(&mut self, threshold: i32) -> usize {
        let before = self.platforms.len();
        self.platforms
            .retain(|p| p.is_static || p.movable.rect.y > threshold);
        before - self.platforms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Platform> {
        self.platforms.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Complete game state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The player's ball
    pub player: Player,
    /// Live platforms (level frame + scrolling rows)
    pub platforms: CollisionIndex,
    /// Row generation parameters, validated at construction
    pub row_config: RowConfig,
    /// Movement + collision resolution over the world bounds
    pub movement: MovementSystem,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a run: validate the layout parameters, place the level frame,
    /// and pre-fill the visible shaft with rows.
    pub fn new(seed: u64, row_config: RowConfig) -> Result<Self, RowError> {
        row_config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = CollisionIndex::new();

        // Level frame: the floor bar the ball must not reach
        platforms.push(Platform::fixed(Rect::new(
            0,
            WORLD_HEIGHT - PLATFORM_HEIGHT,
            WORLD_WIDTH,
            PLATFORM_HEIGHT,
        )));

        let mut y = FIRST_ROW_Y;
        while y <= ROW_SPAWN_Y {
            for platform in rows::generate_row(&row_config, y, &mut rng) {
                platforms.push(platform);
            }
            y += ROW_SPACING;
        }

        Ok(Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(),
            platforms,
            row_config,
            movement: MovementSystem::new(Bounds {
                min: IVec2::ZERO,
                max: IVec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            }),
            rng,
        })
    }
}
