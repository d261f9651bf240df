/// Buffer trait and buffer usage

/// Buffer usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex buffer rewritten by the CPU every frame
    DynamicVertex,
    /// Immutable index buffer
    Index,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. GPU memory is returned
/// through `GraphicsDevice::release_buffer`.
pub trait Buffer: Send + Sync {
    /// Size in bytes
    fn size(&self) -> u64;

    /// What the buffer was created for
    fn usage(&self) -> BufferUsage;
}
