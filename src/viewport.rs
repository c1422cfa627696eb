//! Viewport-proportional sizing
//!
//! Entity sizes are authored against a 500-unit-tall design viewport. Shorter
//! viewports shrink everything proportionally so the level still fits; taller
//! viewports keep design sizes as-is. The viewport is read once at session start
//! and threaded into constructors - there is no runtime resize support.

use serde::{Deserialize, Serialize};

use crate::consts::NOMINAL_VIEWPORT_HEIGHT;

/// Immutable viewport dimensions captured at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a nominal design-time size to the actual size for this viewport.
    ///
    /// Short viewports (height below 500 design units) get the size scaled by
    /// `height / 500` and rounded up; otherwise the nominal size passes through
    /// unchanged. Pure, and called once per entity at construction, not per
    /// frame.
    pub fn scale(&self, nominal: f32) -> f32 {
        if self.height < NOMINAL_VIEWPORT_HEIGHT {
            (nominal * self.height / NOMINAL_VIEWPORT_HEIGHT).ceil()
        } else {
            nominal
        }
    }
}
