/// Scene - explicit rendering context shared by sprite managers.
///
/// Owns nothing GPU-side itself: it hands out the device handle, exposes
/// the camera matrices and fog state for the current frame, drives the
/// frame clock, and keeps the registry of live sprite managers.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::device::GraphicsDevice;
use super::clock::FrameClock;
use super::fog::Fog;
use super::sprite_manager_registry::SpriteManagerRegistry;

pub struct Scene {
    /// Rendering device used to create and draw GPU resources
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    fog: Fog,
    clock: FrameClock,
    sprite_managers: SpriteManagerRegistry,
}

impl Scene {
    /// Create a scene with identity matrices, fog disabled and an empty registry
    pub fn new(graphics_device: Arc<Mutex<dyn GraphicsDevice>>) -> Self {
        Self {
            graphics_device,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            fog: Fog::default(),
            clock: FrameClock::new(),
            sprite_managers: SpriteManagerRegistry::new(),
        }
    }

    /// Shared handle to the rendering device
    pub fn graphics_device(&self) -> Arc<Mutex<dyn GraphicsDevice>> {
        self.graphics_device.clone()
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.view_matrix = view;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection_matrix = projection;
    }

    /// Projection * view, the matrix frustum planes are extracted from
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn fog(&self) -> &Fog {
        &self.fog
    }

    pub fn fog_mut(&mut self) -> &mut Fog {
        &mut self.fog
    }

    pub fn set_fog(&mut self, fog: Fog) {
        self.fog = fog;
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// Delta time of the current frame in milliseconds
    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }

    /// Registry of live sprite managers
    pub fn sprite_managers(&self) -> &SpriteManagerRegistry {
        &self.sprite_managers
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
