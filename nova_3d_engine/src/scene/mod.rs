//! Scene context module
//!
//! Provides the explicit rendering context handed to sprite managers:
//! device handle, camera matrices, fog state, frame clock and the registry
//! of live sprite managers.

mod scene;
mod fog;
mod clock;
mod sprite_manager_registry;

pub use scene::Scene;
pub use fog::{Fog, FogMode};
pub use clock::FrameClock;
pub use sprite_manager_registry::{SpriteManagerRegistry, SpriteManagerKey, SpriteManagerInfo};
