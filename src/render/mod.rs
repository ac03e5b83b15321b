//! Renderer abstraction
//!
//! The simulation hands a renderer an ordered scene of colored boxes; the
//! renderer clears to the background color and draws them back-to-front
//! (later entries over earlier ones). Nothing else is promised.

pub mod software;

pub use software::SoftwareRenderer;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{GameState, Rect};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 0xRRGGBBAA, alpha always opaque
    #[inline]
    pub fn packed(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, 0xff])
    }
}

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const PLATFORM_GREEN: Color = Color::rgb(61, 192, 108);
pub const BALL_WHITE: Color = Color::rgb(255, 255, 255);

/// One box in a render scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub rect: Rect,
    pub color: Color,
}

/// Draws an ordered scene; later entries draw over earlier ones.
pub trait Renderer {
    fn render(&mut self, scene: &[Drawable]);
}

/// Renderer backend selection (the `-software` CLI flag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    Software,
    #[default]
    Accelerated,
}

/// Build a renderer for the requested backend.
///
/// No GPU surface is compiled into the native build, so the accelerated
/// backend currently falls back to the software rasterizer.
pub fn create(backend: Backend) -> Box<dyn Renderer> {
    match backend {
        Backend::Software => {
            log::info!("using software rendering");
        }
        Backend::Accelerated => {
            log::warn!("accelerated backend needs a GPU surface; falling back to software");
        }
    }
    Box::new(SoftwareRenderer::new(
        WORLD_WIDTH as usize,
        WORLD_HEIGHT as usize,
    ))
}

/// Derive the scene from the live entities, back-to-front: platforms
/// first, the ball on top.
pub fn build_scene(state: &GameState) -> Vec<Drawable> {
    let mut scene = Vec::with_capacity(state.platforms.len() + 1);
    for platform in state.platforms.iter() {
        scene.push(Drawable {
            rect: platform.movable.rect,
            color: PLATFORM_GREEN,
        });
    }
    scene.push(Drawable {
        rect: state.player.movable.rect,
        color: BALL_WHITE,
    });
    scene
}
