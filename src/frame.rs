//! Drawable output handed to the host each tick
//!
//! The simulation never touches a canvas. Each tick it rebuilds an ordered list
//! of filled rectangles (platforms, then checkpoints, then the player) and the
//! host rasterizes them onto its 2D surface in that order.

use glam::Vec2;

/// A filled rectangle to rasterize at `pos` in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// CSS fill color, passed through to the host untouched
    pub color: &'static str,
}

/// Ordered rect list for one tick; order is back-to-front layering
#[derive(Debug, Clone, Default)]
pub struct Frame {
    rects: Vec<DrawRect>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything drawn last tick
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn push(&mut self, rect: DrawRect) {
        self.rects.push(rect);
    }

    pub fn rects(&self) -> &[DrawRect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
