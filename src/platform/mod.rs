//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or GPU directly. The host
//! supplies these capabilities:
//! - Time (elapsed seconds since the last frame)
//! - Input (key state polling)
//! - Screen size
//! - Frame lifecycle and drawing
//! - Image loading

pub mod headless;

pub use headless::{HeadlessAssets, HeadlessPlatform};

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::renderer::{Color, DrawCommand};

/// Keys the game knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    Left,
    Right,
    Up,
    Space,
    Escape,
}

/// Opaque, non-owning reference to an image the host loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub id: u32,
    /// Pixel dimensions of the image
    pub width: u32,
    pub height: u32,
}

/// Window, clock and keyboard owned by the host
pub trait Platform {
    /// Host asked the game to stop (window closed, demo finished, ...)
    fn should_close(&self) -> bool;
    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;
    fn is_key_down(&self, key: Key) -> bool;
    fn screen_width(&self) -> u32;
    fn screen_height(&self) -> u32;
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn close_window(&mut self);
}

/// Immediate-mode drawing surface
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_image(&mut self, command: &DrawCommand);
    /// Draw a frames-per-second counter with its top-left corner at (x, y)
    fn draw_fps(&mut self, x: i32, y: i32);
}

/// Loads images once during setup
pub trait AssetLoader {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, GameError>;
}
