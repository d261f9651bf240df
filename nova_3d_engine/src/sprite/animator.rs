/// Sprite animation strategies
///
/// The manager calls its animator once per rendered sprite per frame,
/// before the sprite's vertices are emitted.

use super::sprite::Sprite;

/// Per-frame animation strategy
pub trait SpriteAnimator: Send + Sync {
    /// Advance `sprite` by `delta_time_ms` milliseconds
    fn animate(&self, sprite: &mut Sprite, delta_time_ms: f32);
}

/// Default strategy: steps `cell_index` through the range set by
/// `Sprite::play_animation`
///
/// Whenever the accumulated time exceeds the delay, the time wraps modulo
/// the delay and the cell moves one step toward `to`. Reaching `to` either
/// wraps to `from` (looping) or stops the animation and marks it finished.
/// A delay of zero or less steps once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellAnimator;

impl SpriteAnimator for CellAnimator {
    fn animate(&self, sprite: &mut Sprite, delta_time_ms: f32) {
        let animation = &mut sprite.animation;
        if !animation.started {
            return;
        }

        animation.time += delta_time_ms;
        if animation.delay <= 0.0 {
            animation.time = 0.0;
        } else if animation.time > animation.delay {
            animation.time %= animation.delay;
        } else {
            return;
        }

        sprite.cell_index = sprite.cell_index.saturating_add_signed(animation.direction);
        if sprite.cell_index == animation.to {
            if animation.looping {
                sprite.cell_index = animation.from;
            } else {
                animation.started = false;
                animation.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "animator_tests.rs"]
mod tests;
