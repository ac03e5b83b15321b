//! CPU framebuffer renderer
//!
//! Rasterizes a scene into an in-memory RGBA buffer: clear to the
//! background, then fill each box in order with clipping. A window backend
//! would blit the finished frame; tests read pixels straight out of it.

use super::{BACKGROUND, Drawable, Renderer};

pub struct SoftwareRenderer {
    width: usize,
    height: usize,
    frame: Vec<u32>,
}

impl SoftwareRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            frame: vec![BACKGROUND.packed(); width * height],
        }
    }

    /// The last rendered frame, row-major packed RGBA.
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.frame[y * self.width + x]
    }

    fn fill(&mut self, drawable: &Drawable) {
        let rect = &drawable.rect;
        let x0 = rect.left().clamp(0, self.width as i32) as usize;
        let x1 = rect.right().clamp(0, self.width as i32) as usize;
        let y0 = rect.top().clamp(0, self.height as i32) as usize;
        let y1 = rect.bottom().clamp(0, self.height as i32) as usize;
        let color = drawable.color.packed();

        for y in y0..y1 {
            let row = y * self.width;
            self.frame[row + x0..row + x1].fill(color);
        }
    }
}

impl Renderer for SoftwareRenderer {
    fn render(&mut self, scene: &[Drawable]) {
        self.frame.fill(BACKGROUND.packed());
        for drawable in scene {
            self.fill(drawable);
        }
    }
}
