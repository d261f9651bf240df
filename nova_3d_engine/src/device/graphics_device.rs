/// GraphicsDevice trait - resource factory and draw-state interface

use std::sync::Arc;
use crate::error::Result;
use crate::device::{Buffer, Effect, EffectDesc, Texture, TextureDesc, VertexLayout};

/// Blend mode applied to subsequent draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Blending off (opaque writes)
    Disable,
    /// Standard alpha blending: src * a + dst * (1 - a)
    Combine,
}

/// Rendering device interface
///
/// Implemented by backend-specific devices. Resource handles are shared
/// pointers; releasing them is explicit (`release_buffer`,
/// `Texture::dispose`) so owners decide exactly when GPU memory goes away.
pub trait GraphicsDevice: Send + Sync {
    /// Create a CPU-updatable vertex buffer of `size_bytes` bytes
    fn create_dynamic_vertex_buffer(&mut self, size_bytes: u64) -> Result<Arc<dyn Buffer>>;

    /// Overwrite the start of a dynamic vertex buffer with `data`
    ///
    /// Bytes beyond `data.len()` keep their previous contents.
    fn update_dynamic_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, data: &[u8]) -> Result<()>;

    /// Create an immutable 32-bit index buffer
    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<Arc<dyn Buffer>>;

    /// Release the GPU memory behind a buffer
    fn release_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()>;

    /// Start loading a texture (readiness is reported by `Texture::is_ready`)
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Start compiling an effect (readiness is reported by `Effect::is_ready`)
    fn create_effect(&mut self, desc: EffectDesc) -> Result<Arc<dyn Effect>>;

    /// Make `effect` the active program for subsequent draws
    fn enable_effect(&mut self, effect: &Arc<dyn Effect>) -> Result<()>;

    /// Bind vertex and index buffers with the given vertex layout
    ///
    /// # Arguments
    ///
    /// * `layout` - Attribute groups of one vertex
    /// * `stride` - Size in bytes of one vertex
    /// * `effect` - Effect whose attribute locations receive the layout
    fn bind_buffers(
        &mut self,
        vertex_buffer: &Arc<dyn Buffer>,
        index_buffer: &Arc<dyn Buffer>,
        layout: &VertexLayout,
        stride: u32,
        effect: &Arc<dyn Effect>,
    ) -> Result<()>;

    /// Issue a draw call over `index_count` indices starting at `start_index`
    fn draw(&mut self, indexed: bool, start_index: u32, index_count: u32) -> Result<()>;

    /// Enable or disable writes to the color buffer (depth writes unaffected)
    fn set_color_write(&mut self, enabled: bool);

    /// Set the blend mode for subsequent draws
    fn set_alpha_mode(&mut self, mode: AlphaMode);
}
