/// Graphics device module - the rendering device abstraction
///
/// The engine core never talks to a GPU API directly. Backends implement
/// `GraphicsDevice` plus the `Buffer`, `Effect` and `Texture` resource
/// traits; the sprite renderer drives them through these interfaces only.

// Module declarations
pub mod graphics_device;
pub mod buffer;
pub mod effect;
pub mod texture;
pub mod vertex_layout;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use buffer::*;
pub use effect::*;
pub use texture::*;
pub use vertex_layout::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
