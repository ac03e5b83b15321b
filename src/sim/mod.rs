//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod movement;
pub mod rect;
pub mod rows;
pub mod state;
pub mod tick;

pub use movement::{Bounds, MovementSystem};
pub use rect::Rect;
pub use rows::{RowConfig, RowError, gap_spans, generate_row, generate_row_with_gaps};
pub use state::{CollisionIndex, GamePhase, GameState, Movable, Platform, Player, Velocity};
pub use tick::{TickInput, tick};
