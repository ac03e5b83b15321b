//! Falldown - a vertically-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision resolution, row generation)
//! - `render`: Renderer abstraction + CPU framebuffer backend
//! - `input`: Input event abstraction and the demo autopilot
//! - `settings`: Runtime settings loaded from a JSON file

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval (milliseconds between simulation steps)
    pub const TICK_MS: u64 = 10;

    /// Playfield dimensions
    pub const WORLD_WIDTH: i32 = 800;
    pub const WORLD_HEIGHT: i32 = 600;
    /// Top band reserved for the score readout; the playfield starts below it
    pub const HUD_HEIGHT: i32 = 20;

    /// Player defaults - a square ball steered left/right
    pub const PLAYER_SIZE: i32 = 20;
    pub const PLAYER_SPAWN_X: i32 = 390;
    pub const PLAYER_SPAWN_Y: i32 = 250;

    /// Platform bar height
    pub const PLATFORM_HEIGHT: i32 = 20;

    /// Downward displacement per tick (gravity)
    pub const FALL_RATE: i32 = 3;
    /// Upward displacement per tick: the platform scroll rate, and the
    /// collision escape rate (a resting player rides the scroll)
    pub const RISE_RATE: i32 = -1;
    /// Horizontal displacement per tick while a steer key is held
    pub const STEER_SPEED: i32 = 3;

    /// Ticks between generated rows
    pub const ROW_INTERVAL_TICKS: u64 = 50;
    /// Top edge of a freshly generated row (the incoming scroll edge)
    pub const ROW_SPAWN_Y: i32 = WORLD_HEIGHT - 2 * PLATFORM_HEIGHT;
    /// Top edge of the highest pre-filled row at run start
    pub const FIRST_ROW_Y: i32 = 310;
    /// Vertical distance between consecutive rows
    pub const ROW_SPACING: i32 = ROW_INTERVAL_TICKS as i32 * -RISE_RATE;

    /// Gap defaults - every gap fits the player with room to spare
    pub const BASE_GAP: i32 = 40;
    pub const GAP_VARIANCE: i32 = 20;
    pub const MIN_GAPS: u32 = 1;
    pub const MAX_GAPS: u32 = 5;
    /// Extra width a gap must have beyond the player box
    pub const GAP_CLEARANCE: i32 = 10;

    /// A platform whose top edge reaches this is fully above the playfield
    pub const RECYCLE_Y: i32 = HUD_HEIGHT - PLATFORM_HEIGHT;
}
