//! Rendering module
//!
//! Turns live entities into rotated sprite blits. The actual drawing is done by
//! whatever `Canvas` the host provides.

pub mod sprite;

pub use sprite::{DrawCommand, Rect, build_draw_list, draw_command, render};

/// RGBA, each channel in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    /// Sprites are drawn untinted
    pub const SPRITE_TINT: Color = [1.0, 1.0, 1.0, 1.0];
}
