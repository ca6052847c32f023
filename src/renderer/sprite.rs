//! Sprite draw list generation

use glam::Vec2;

use super::Color;
use super::colors;
use crate::consts::FPS_OVERLAY_POS;
use crate::platform::{Canvas, ImageHandle};
use crate::settings::Settings;
use crate::sim::{Entity, GameState};

/// Axis-aligned rectangle, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let min = center - size / 2.0;
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One rotated, scaled sprite blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: ImageHandle,
    /// Region of the image to sample (the whole image)
    pub source: Rect,
    /// Where the sprite lands on screen, centered on the entity
    pub dest: Rect,
    /// Rotation pivot, relative to `dest`'s top-left corner
    pub origin: Vec2,
    /// Degrees, clockwise on screen
    pub rotation: f32,
    pub tint: Color,
}

/// Build the blit for a single entity, or nothing if it is dead
pub fn draw_command(entity: &Entity) -> Option<DrawCommand> {
    if !entity.alive {
        return None;
    }
    let size = entity.size();
    Some(DrawCommand {
        sprite: entity.sprite,
        source: Rect::new(
            0.0,
            0.0,
            entity.sprite.width as f32,
            entity.sprite.height as f32,
        ),
        dest: Rect::centered(entity.pos, size),
        origin: size / 2.0,
        rotation: entity.rotation,
        tint: colors::SPRITE_TINT,
    })
}

/// Blits for every live entity, ship first
pub fn build_draw_list(state: &GameState) -> Vec<DrawCommand> {
    state.entities().filter_map(draw_command).collect()
}

/// Draw one frame of the game onto `canvas`
pub fn render(state: &GameState, canvas: &mut impl Canvas, settings: &Settings) {
    canvas.clear(colors::BACKGROUND);
    for command in build_draw_list(state) {
        canvas.draw_image(&command);
    }
    if settings.show_fps {
        let (x, y) = FPS_OVERLAY_POS;
        canvas.draw_fps(x, y);
    }
}
