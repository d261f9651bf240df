/// Sprite - one billboard quad drawn by a SpriteManager
///
/// A plain record: the manager reads position, rotation, size, atlas cell,
/// flips and tint every frame. Animation state is data only; the stepping
/// logic lives in a `SpriteAnimator` owned by the manager.

use glam::Vec3;
use crate::color::Color4;

/// Cell animation state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellAnimation {
    /// True while the animation is running
    pub started: bool,
    /// Wrap back to `from` when `to` is reached
    pub looping: bool,
    pub from: u32,
    pub to: u32,
    /// Milliseconds between cell steps
    pub delay: f32,
    /// -1, 0 or 1: step applied to the cell index
    pub direction: i32,
    /// Milliseconds accumulated since the last step
    pub time: f32,
    /// Set when a non-looping animation reaches `to`
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    /// World-space center
    pub position: Vec3,
    /// In-plane rotation, radians
    pub angle: f32,
    /// World-space quad edge length
    pub size: f32,
    /// Index into the atlas grid (row-major)
    pub cell_index: u32,
    pub invert_u: bool,
    pub invert_v: bool,
    pub color: Color4,
    /// Remove the sprite from its manager once a non-looping animation ends
    pub dispose_when_finished_animating: bool,
    pub animation: CellAnimation,
}

impl Sprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            angle: 0.0,
            size: 1.0,
            cell_index: 0,
            invert_u: false,
            invert_v: false,
            color: Color4::WHITE,
            dispose_when_finished_animating: false,
            animation: CellAnimation::default(),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_cell_index(mut self, cell_index: u32) -> Self {
        self.cell_index = cell_index;
        self
    }

    pub fn with_color(mut self, color: Color4) -> Self {
        self.color = color;
        self
    }

    /// Start stepping through cells `from..=to`, one step every `delay_ms`
    ///
    /// The sprite jumps to `from` immediately.
    pub fn play_animation(&mut self, from: u32, to: u32, looping: bool, delay_ms: f32) {
        self.animation = CellAnimation {
            started: true,
            looping,
            from,
            to,
            delay: delay_ms,
            direction: (to as i64 - from as i64).signum() as i32,
            time: 0.0,
            finished: false,
        };
        self.cell_index = from;
    }

    /// Freeze the animation on the current cell
    pub fn stop_animation(&mut self) {
        self.animation.started = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.started
    }
}

#[cfg(test)]
#[path = "sprite_tests.rs"]
mod tests;
