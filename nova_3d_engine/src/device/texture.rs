/// Texture trait, texture descriptor, and load flags

use bitflags::bitflags;

bitflags! {
    /// Options applied while a texture is loaded
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureFlags: u32 {
        /// Build the full mip chain after upload
        const GENERATE_MIPMAPS = 1 << 0;
        /// Flip the image vertically on load
        const INVERT_Y = 1 << 1;
    }
}

/// Descriptor for loading a texture from a source path
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Source path or URL of the image
    pub path: String,
    /// Load options
    pub flags: TextureFlags,
}

/// Size of mip level 0, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

/// Texture resource trait
///
/// Textures load asynchronously; `base_size` is only meaningful once
/// `is_ready` returns true.
pub trait Texture: Send + Sync {
    /// True once the image has been decoded and uploaded
    fn is_ready(&self) -> bool;

    /// Size of the source image
    fn base_size(&self) -> TextureSize;

    /// Horizontal wrap (repeat) addressing
    fn wrap_u(&self) -> bool;

    fn set_wrap_u(&self, wrap: bool);

    /// Vertical wrap (repeat) addressing
    fn wrap_v(&self) -> bool;

    fn set_wrap_v(&self, wrap: bool);

    /// Release the GPU image
    fn dispose(&self);
}
