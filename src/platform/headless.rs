//! In-memory platform
//!
//! Runs the game without a window: fixed frame time, scripted key presses,
//! and every draw call recorded so tests and the native demo can inspect it.

use std::collections::{HashMap, HashSet};

use super::{AssetLoader, Canvas, ImageHandle, Key, Platform};
use crate::error::GameError;
use crate::renderer::{Color, DrawCommand};

/// Side length of the placeholder sprites registered by `HeadlessAssets::square`
pub const DEFAULT_SPRITE_SIZE: u32 = 32;

/// Key held down for a half-open range of frames
#[derive(Debug, Clone, Copy)]
struct KeyHold {
    key: Key,
    from_frame: u64,
    until_frame: u64,
}

/// Everything drawn during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecord {
    pub clear: Option<Color>,
    pub draws: Vec<DrawCommand>,
    pub fps_overlays: u32,
}

#[derive(Debug)]
pub struct HeadlessPlatform {
    width: u32,
    height: u32,
    dt: f32,
    /// Close after this many completed frames
    frame_limit: Option<u64>,
    frames_completed: u64,
    held: HashSet<Key>,
    holds: Vec<KeyHold>,
    closed: bool,
    current: Option<FrameRecord>,
    /// Completed frames, oldest first
    pub frames: Vec<FrameRecord>,
}

impl HeadlessPlatform {
    pub fn new(width: u32, height: u32, dt: f32) -> Self {
        Self {
            width,
            height,
            dt,
            frame_limit: None,
            frames_completed: 0,
            held: HashSet::new(),
            holds: Vec::new(),
            closed: false,
            current: None,
            frames: Vec::new(),
        }
    }

    /// Ask to close once `frames` frames have been completed
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Hold `key` for frames in `[from_frame, until_frame)`
    pub fn hold_during(mut self, key: Key, from_frame: u64, until_frame: u64) -> Self {
        self.holds.push(KeyHold {
            key,
            from_frame,
            until_frame,
        });
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn set_frame_time(&mut self, dt: f32) {
        self.dt = dt;
    }

    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The most recently completed frame
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl Platform for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.closed
            || self
                .frame_limit
                .is_some_and(|limit| self.frames_completed >= limit)
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn is_key_down(&self, key: Key) -> bool {
        let frame = self.frames_completed;
        self.held.contains(&key)
            || self
                .holds
                .iter()
                .any(|h| h.key == key && (h.from_frame..h.until_frame).contains(&frame))
    }

    fn screen_width(&self) -> u32 {
        self.width
    }

    fn screen_height(&self) -> u32 {
        self.height
    }

    fn begin_frame(&mut self) {
        if self.current.is_some() {
            log::warn!("begin_frame called twice without end_frame");
        }
        self.current = Some(FrameRecord::default());
    }

    fn end_frame(&mut self) {
        match self.current.take() {
            Some(record) => self.frames.push(record),
            None => log::warn!("end_frame called without begin_frame"),
        }
        self.frames_completed += 1;
    }

    fn close_window(&mut self) {
        self.closed = true;
    }
}

impl Canvas for HeadlessPlatform {
    fn clear(&mut self, color: Color) {
        if let Some(frame) = self.current.as_mut() {
            frame.clear = Some(color);
        }
    }

    fn draw_image(&mut self, command: &DrawCommand) {
        if let Some(frame) = self.current.as_mut() {
            frame.draws.push(*command);
        }
    }

    fn draw_fps(&mut self, _x: i32, _y: i32) {
        if let Some(frame) = self.current.as_mut() {
            frame.fps_overlays += 1;
        }
    }
}

/// Image registry that hands out handles for known paths
#[derive(Debug, Default)]
pub struct HeadlessAssets {
    images: HashMap<String, (u32, u32)>,
    next_id: u32,
    /// Paths successfully loaded, in load order
    pub loaded: Vec<String>,
}

impl HeadlessAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image of the given pixel size
    pub fn with_image(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.images.insert(path.into(), (width, height));
        self
    }

    /// Register each path as a `DEFAULT_SPRITE_SIZE` square
    pub fn square<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        paths.into_iter().fold(Self::new(), |assets, path| {
            assets.with_image(path, DEFAULT_SPRITE_SIZE, DEFAULT_SPRITE_SIZE)
        })
    }
}

impl AssetLoader for HeadlessAssets {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, GameError> {
        let (width, height) =
            self.images
                .get(path)
                .copied()
                .ok_or_else(|| GameError::ResourceLoadFailure {
                    path: path.to_string(),
                    reason: "no such image registered".to_string(),
                })?;
        self.next_id += 1;
        self.loaded.push(path.to_string());
        Ok(ImageHandle {
            id: self.next_id,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_limit_closes() {
        let mut platform = HeadlessPlatform::new(100, 100, 0.1).with_frame_limit(2);
        assert!(!platform.should_close());
        for _ in 0..2 {
            platform.begin_frame();
            platform.end_frame();
        }
        assert!(platform.should_close());
        assert_eq!(platform.frames.len(), 2);
    }

    #[test]
    fn test_scripted_hold() {
        let mut platform = HeadlessPlatform::new(100, 100, 0.1).hold_during(Key::W, 1, 3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(platform.is_key_down(Key::W));
            platform.begin_frame();
            platform.end_frame();
        }
        assert_eq!(seen, vec![false, true, true, false]);
    }

    #[test]
    fn test_press_release() {
        let mut platform = HeadlessPlatform::new(100, 100, 0.1);
        platform.press(Key::Space);
        assert!(platform.is_key_down(Key::Space));
        platform.release(Key::Space);
        assert!(!platform.is_key_down(Key::Space));
    }

    #[test]
    fn test_unknown_image_fails() {
        let mut assets = HeadlessAssets::new().with_image("a.png", 10, 20);
        let handle = assets.load_image("a.png").unwrap();
        assert_eq!((handle.width, handle.height), (10, 20));

        let err = assets.load_image("b.png").unwrap_err();
        assert!(matches!(err, GameError::ResourceLoadFailure { .. }));
        assert_eq!(assets.loaded, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut assets = HeadlessAssets::square(["a.png", "b.png"]);
        let a = assets.load_image("a.png").unwrap();
        let b = assets.load_image("b.png").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.width, DEFAULT_SPRITE_SIZE);
    }
}
