/// Mock graphics device for unit tests (no GPU required)
///
/// Every device, effect and texture call is appended to one shared command
/// log, so tests can assert on the exact order of state changes and draws.
/// Buffers are tracked by identity to catch double releases.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::color::Color3;
use crate::device::{
    AlphaMode, Buffer, BufferUsage, Effect, EffectDesc, GraphicsDevice,
    Texture, TextureDesc, TextureFlags, TextureSize, VertexLayout,
};
use crate::error::Result;
use crate::engine_bail;

pub type CommandLog = Arc<Mutex<Vec<MockCommand>>>;

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    CreateDynamicVertexBuffer { id: u32, size: u64 },
    UpdateDynamicVertexBuffer { id: u32, floats: Vec<f32> },
    CreateIndexBuffer { id: u32, indices: Vec<u32> },
    ReleaseBuffer { id: u32 },
    CreateTexture { path: String, flags: TextureFlags },
    DisposeTexture { path: String },
    CreateEffect { desc: EffectDesc },
    EnableEffect { defines: String },
    BindBuffers { vertex: u32, index: u32, stride: u32, attribute_count: usize },
    Draw { indexed: bool, start: u32, count: u32 },
    SetColorWrite(bool),
    SetAlphaMode(AlphaMode),
    SetTexture { defines: String, sampler: String },
    SetMatrix { defines: String, uniform: String, value: Mat4 },
    SetVector2 { defines: String, uniform: String, value: [f32; 2] },
    SetFloat4 { defines: String, uniform: String, value: [f32; 4] },
    SetColor3 { defines: String, uniform: String, value: Color3 },
    SetBool { defines: String, uniform: String, value: bool },
}

fn same_object<T: ?Sized, U: ?Sized>(a: &Arc<T>, b: &Arc<U>) -> bool {
    Arc::as_ptr(a) as *const u8 == Arc::as_ptr(b) as *const u8
}

fn record(log: &CommandLog, command: MockCommand) {
    log.lock().unwrap().push(command);
}

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub id: u32,
    pub size: u64,
    pub usage: BufferUsage,
}

impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.size
    }

    fn usage(&self) -> BufferUsage {
        self.usage
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub path: String,
    pub size: TextureSize,
    pub ready: AtomicBool,
    wrap_u: AtomicBool,
    wrap_v: AtomicBool,
    dispose_count: AtomicU32,
    log: CommandLog,
}

impl MockTexture {
    pub fn dispose_count(&self) -> u32 {
        self.dispose_count.load(Ordering::SeqCst)
    }
}

impl Texture for MockTexture {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn base_size(&self) -> TextureSize {
        self.size
    }

    fn wrap_u(&self) -> bool {
        self.wrap_u.load(Ordering::SeqCst)
    }

    fn set_wrap_u(&self, wrap: bool) {
        self.wrap_u.store(wrap, Ordering::SeqCst);
    }

    fn wrap_v(&self) -> bool {
        self.wrap_v.load(Ordering::SeqCst)
    }

    fn set_wrap_v(&self, wrap: bool) {
        self.wrap_v.store(wrap, Ordering::SeqCst);
    }

    fn dispose(&self) {
        self.dispose_count.fetch_add(1, Ordering::SeqCst);
        record(&self.log, MockCommand::DisposeTexture { path: self.path.clone() });
    }
}

// ============================================================================
// Mock Effect
// ============================================================================

#[derive(Debug)]
pub struct MockEffect {
    pub desc: EffectDesc,
    pub ready: AtomicBool,
    log: CommandLog,
}

impl MockEffect {
    fn defines(&self) -> String {
        self.desc.defines.clone()
    }
}

impl Effect for MockEffect {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn set_texture(&self, sampler: &str, _texture: &Arc<dyn Texture>) {
        record(&self.log, MockCommand::SetTexture {
            defines: self.defines(),
            sampler: sampler.to_string(),
        });
    }

    fn set_matrix(&self, uniform: &str, value: &Mat4) {
        record(&self.log, MockCommand::SetMatrix {
            defines: self.defines(),
            uniform: uniform.to_string(),
            value: *value,
        });
    }

    fn set_vector2(&self, uniform: &str, x: f32, y: f32) {
        record(&self.log, MockCommand::SetVector2 {
            defines: self.defines(),
            uniform: uniform.to_string(),
            value: [x, y],
        });
    }

    fn set_float4(&self, uniform: &str, x: f32, y: f32, z: f32, w: f32) {
        record(&self.log, MockCommand::SetFloat4 {
            defines: self.defines(),
            uniform: uniform.to_string(),
            value: [x, y, z, w],
        });
    }

    fn set_color3(&self, uniform: &str, color: &Color3) {
        record(&self.log, MockCommand::SetColor3 {
            defines: self.defines(),
            uniform: uniform.to_string(),
            value: *color,
        });
    }

    fn set_bool(&self, uniform: &str, value: bool) {
        record(&self.log, MockCommand::SetBool {
            defines: self.defines(),
            uniform: uniform.to_string(),
            value,
        });
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that records calls instead of touching a GPU
pub struct MockGraphicsDevice {
    log: CommandLog,
    buffers: Vec<Arc<MockBuffer>>,
    released: Vec<u32>,
    textures: Vec<Arc<MockTexture>>,
    effects: Vec<Arc<MockEffect>>,
    next_id: u32,
    texture_size: TextureSize,
    resources_ready: bool,
    fail_effect_creation: bool,
    /// Zero-based index of the draw call that fails
    failing_draw: Option<usize>,
    draw_count: usize,
}

impl MockGraphicsDevice {
    /// Device whose textures are 256x256 and load/compile instantly
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            buffers: Vec::new(),
            released: Vec::new(),
            textures: Vec::new(),
            effects: Vec::new(),
            next_id: 0,
            texture_size: TextureSize { width: 256, height: 256 },
            resources_ready: true,
            fail_effect_creation: false,
            failing_draw: None,
            draw_count: 0,
        }
    }

    /// Size reported by textures created from now on
    pub fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_size = TextureSize { width, height };
        self
    }

    /// Whether textures and effects created from now on start ready
    pub fn with_resources_ready(mut self, ready: bool) -> Self {
        self.resources_ready = ready;
        self
    }

    /// Make the next `create_effect` calls fail
    pub fn with_failing_effects(mut self) -> Self {
        self.fail_effect_creation = true;
        self
    }

    /// Make the `index`-th draw call (zero-based, counted over the device
    /// lifetime) fail
    pub fn with_failing_draw(mut self, index: usize) -> Self {
        self.failing_draw = Some(index);
        self
    }

    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    pub fn commands(&self) -> Vec<MockCommand> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_commands(&self) {
        self.log.lock().unwrap().clear();
    }

    pub fn set_effects_ready(&self, ready: bool) {
        for effect in &self.effects {
            effect.ready.store(ready, Ordering::SeqCst);
        }
    }

    pub fn set_textures_ready(&self, ready: bool) {
        for texture in &self.textures {
            texture.ready.store(ready, Ordering::SeqCst);
        }
    }

    pub fn textures(&self) -> &[Arc<MockTexture>] {
        &self.textures
    }

    pub fn effects(&self) -> &[Arc<MockEffect>] {
        &self.effects
    }

    /// Ids of every buffer created so far
    pub fn buffer_ids(&self) -> Vec<u32> {
        self.buffers.iter().map(|b| b.id).collect()
    }

    /// Number of times buffer `id` was released
    pub fn release_count(&self, id: u32) -> usize {
        self.released.iter().filter(|&&r| r == id).count()
    }

    /// Buffers created and not yet released
    pub fn live_buffer_count(&self) -> usize {
        self.buffers.iter().filter(|b| !self.released.contains(&b.id)).count()
    }

    fn buffer_id(&self, buffer: &Arc<dyn Buffer>) -> Option<u32> {
        self.buffers.iter().find(|b| same_object(b, buffer)).map(|b| b.id)
    }

    fn add_buffer(&mut self, size: u64, usage: BufferUsage) -> Arc<MockBuffer> {
        let buffer = Arc::new(MockBuffer { id: self.next_id, size, usage });
        self.next_id += 1;
        self.buffers.push(buffer.clone());
        buffer
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_dynamic_vertex_buffer(&mut self, size_bytes: u64) -> Result<Arc<dyn Buffer>> {
        let buffer = self.add_buffer(size_bytes, BufferUsage::DynamicVertex);
        record(&self.log, MockCommand::CreateDynamicVertexBuffer { id: buffer.id, size: size_bytes });
        Ok(buffer)
    }

    fn update_dynamic_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, data: &[u8]) -> Result<()> {
        let Some(id) = self.buffer_id(buffer) else {
            engine_bail!("nova3d::mock", "update of unknown buffer");
        };
        if data.len() as u64 > buffer.size() {
            engine_bail!("nova3d::mock", "update of {} bytes overflows buffer {} ({} bytes)",
                data.len(), id, buffer.size());
        }
        let floats = data
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        record(&self.log, MockCommand::UpdateDynamicVertexBuffer { id, floats });
        Ok(())
    }

    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<Arc<dyn Buffer>> {
        let buffer = self.add_buffer(indices.len() as u64 * 4, BufferUsage::Index);
        record(&self.log, MockCommand::CreateIndexBuffer { id: buffer.id, indices: indices.to_vec() });
        Ok(buffer)
    }

    fn release_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()> {
        let Some(id) = self.buffer_id(buffer) else {
            engine_bail!("nova3d::mock", "release of unknown buffer");
        };
        if self.released.contains(&id) {
            engine_bail!("nova3d::mock", "buffer {} released twice", id);
        }
        self.released.push(id);
        record(&self.log, MockCommand::ReleaseBuffer { id });
        Ok(())
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let texture = Arc::new(MockTexture {
            path: desc.path.clone(),
            size: self.texture_size,
            ready: AtomicBool::new(self.resources_ready),
            wrap_u: AtomicBool::new(true),
            wrap_v: AtomicBool::new(true),
            dispose_count: AtomicU32::new(0),
            log: self.log.clone(),
        });
        self.textures.push(texture.clone());
        record(&self.log, MockCommand::CreateTexture { path: desc.path, flags: desc.flags });
        Ok(texture)
    }

    fn create_effect(&mut self, desc: EffectDesc) -> Result<Arc<dyn Effect>> {
        if self.fail_effect_creation {
            engine_bail!("nova3d::mock", "effect '{}' failed to compile", desc.name);
        }
        let effect = Arc::new(MockEffect {
            desc: desc.clone(),
            ready: AtomicBool::new(self.resources_ready),
            log: self.log.clone(),
        });
        self.effects.push(effect.clone());
        record(&self.log, MockCommand::CreateEffect { desc });
        Ok(effect)
    }

    fn enable_effect(&mut self, effect: &Arc<dyn Effect>) -> Result<()> {
        let Some(known) = self.effects.iter().find(|e| same_object(e, effect)) else {
            engine_bail!("nova3d::mock", "enable of unknown effect");
        };
        record(&self.log, MockCommand::EnableEffect { defines: known.defines() });
        Ok(())
    }

    fn bind_buffers(
        &mut self,
        vertex_buffer: &Arc<dyn Buffer>,
        index_buffer: &Arc<dyn Buffer>,
        layout: &VertexLayout,
        stride: u32,
        _effect: &Arc<dyn Effect>,
    ) -> Result<()> {
        let (Some(vertex), Some(index)) = (self.buffer_id(vertex_buffer), self.buffer_id(index_buffer)) else {
            engine_bail!("nova3d::mock", "bind of unknown buffer");
        };
        record(&self.log, MockCommand::BindBuffers {
            vertex,
            index,
            stride,
            attribute_count: layout.attributes.len(),
        });
        Ok(())
    }

    fn draw(&mut self, indexed: bool, start_index: u32, index_count: u32) -> Result<()> {
        let call = self.draw_count;
        self.draw_count += 1;
        if self.failing_draw == Some(call) {
            engine_bail!("nova3d::mock", "draw {} failed", call);
        }
        record(&self.log, MockCommand::Draw { indexed, start: start_index, count: index_count });
        Ok(())
    }

    fn set_color_write(&mut self, enabled: bool) {
        record(&self.log, MockCommand::SetColorWrite(enabled));
    }

    fn set_alpha_mode(&mut self, mode: AlphaMode) {
        record(&self.log, MockCommand::SetAlphaMode(mode));
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
