/// SpriteManager - batches the sprites of one atlas into a single draw
///
/// Owns a fixed-capacity dynamic vertex buffer, a static index buffer, the
/// atlas texture and two effect variants (base and fog). Every frame the
/// vertex stream is rebuilt from live sprite state, in insertion order,
/// and drawn twice: a depth-only alpha-tested mask pass, then a blended
/// color pass.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use slotmap::{new_key_type, SlotMap};
use crate::device::{
    AlphaMode, Buffer, Effect, EffectDesc, GraphicsDevice, Texture, TextureDesc,
    TextureFlags, VertexLayout,
};
use crate::engine_err;
use crate::error::{Error, Result};
use crate::scene::{FogMode, Scene, SpriteManagerInfo, SpriteManagerKey, SpriteManagerRegistry};
use super::animator::{CellAnimator, SpriteAnimator};
use super::sprite::Sprite;
use super::sprite_vertex::{
    append_sprite_quad, build_quad_indices, sprite_vertex_layout, SpriteVertex,
    INDICES_PER_SPRITE, SPRITE_VERTEX_STRIDE, VERTICES_PER_SPRITE,
};

const SOURCE: &str = "nova3d::SpriteManager";

/// Default inset applied to cell-edge texture offsets
pub const DEFAULT_EPSILON: f32 = 0.01;

// ===== SHADER CONTRACT =====

pub const SPRITE_EFFECT_NAME: &str = "sprites";
pub const SPRITE_ATTRIBUTES: [&str; 4] = ["position", "options", "cellInfo", "color"];
pub const UNIFORM_VIEW: &str = "view";
pub const UNIFORM_PROJECTION: &str = "projection";
pub const UNIFORM_TEXTURE_INFOS: &str = "textureInfos";
pub const UNIFORM_ALPHA_TEST: &str = "alphaTest";
pub const UNIFORM_FOG_INFOS: &str = "vFogInfos";
pub const UNIFORM_FOG_COLOR: &str = "vFogColor";
pub const DIFFUSE_SAMPLER: &str = "diffuseSampler";

new_key_type! {
    /// Stable handle to a sprite inside its manager
    pub struct SpriteKey;
}

/// Effect variant used for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderVariant {
    Base = 0,
    /// Binds the fog uniform block
    Fog = 1,
}

impl ShaderVariant {
    pub const ALL: [ShaderVariant; 2] = [ShaderVariant::Base, ShaderVariant::Fog];

    /// Variant matching the scene's fog mode
    pub fn for_fog(mode: FogMode) -> Self {
        if mode.is_enabled() {
            ShaderVariant::Fog
        } else {
            ShaderVariant::Base
        }
    }

    pub fn defines(self) -> &'static str {
        match self {
            ShaderVariant::Base => "",
            ShaderVariant::Fog => "#define FOG",
        }
    }

    pub fn effect_desc(self) -> EffectDesc {
        let mut uniforms = vec![UNIFORM_VIEW, UNIFORM_PROJECTION, UNIFORM_TEXTURE_INFOS, UNIFORM_ALPHA_TEST];
        if self == ShaderVariant::Fog {
            uniforms.extend([UNIFORM_FOG_INFOS, UNIFORM_FOG_COLOR]);
        }
        EffectDesc {
            name: SPRITE_EFFECT_NAME.to_string(),
            attributes: SPRITE_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            uniforms: uniforms.into_iter().map(String::from).collect(),
            samplers: vec![DIFFUSE_SAMPLER.to_string()],
            defines: self.defines().to_string(),
        }
    }
}

/// Sprite manager creation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteManagerDesc {
    /// Debug name, also the registry entry name
    pub name: String,
    /// Atlas image path
    pub texture_path: String,
    /// Maximum number of sprites drawn per frame
    pub capacity: usize,
    /// Edge length of one square atlas cell, in pixels
    pub cell_size: u32,
    /// Inset applied to texture offsets of exactly 0 or 1
    pub epsilon: f32,
}

impl SpriteManagerDesc {
    pub fn new(
        name: impl Into<String>,
        texture_path: impl Into<String>,
        capacity: usize,
        cell_size: u32,
    ) -> Self {
        Self {
            name: name.into(),
            texture_path: texture_path.into(),
            capacity,
            cell_size,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    fn validate(&self) -> Result<()> {
        let problem = if self.capacity == 0 {
            Some("capacity must be > 0".to_string())
        } else if self.capacity > u32::MAX as usize / INDICES_PER_SPRITE {
            Some(format!("capacity {} exceeds the 32-bit index range", self.capacity))
        } else if self.cell_size == 0 {
            Some("cell size must be > 0".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => {
                crate::engine_error!(SOURCE, "Invalid SpriteManagerDesc '{}': {}", self.name, message);
                Err(Error::InvalidResource(message))
            }
            None => Ok(()),
        }
    }
}

/// Outcome of one `render` call
///
/// All zeros when the frame was skipped because resources were not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteRenderStats {
    /// Sprites written to the vertex buffer
    pub sprites: usize,
    pub draw_calls: u32,
    /// Index count of each draw
    pub indices_per_draw: u32,
}

fn lock_device(
    device: &Mutex<dyn GraphicsDevice>,
) -> Result<MutexGuard<'_, dyn GraphicsDevice + 'static>> {
    device
        .lock()
        .map_err(|_| engine_err!(SOURCE, "Graphics device lock poisoned"))
}

pub struct SpriteManager {
    name: String,
    capacity: usize,
    cell_size: u32,
    epsilon: f32,
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    texture: Option<Arc<dyn Texture>>,
    vertex_buffer: Option<Arc<dyn Buffer>>,
    index_buffer: Option<Arc<dyn Buffer>>,
    /// Indexed by `ShaderVariant`
    effects: [Arc<dyn Effect>; 2],
    vertex_layout: VertexLayout,
    sprites: SlotMap<SpriteKey, Sprite>,
    /// Insertion order, which is draw order
    draw_order: Vec<SpriteKey>,
    animator: Box<dyn SpriteAnimator>,
    /// Per-frame vertex stream, reused across frames
    vertices: Vec<SpriteVertex>,
    registry: SpriteManagerRegistry,
    registry_key: Option<SpriteManagerKey>,
    on_dispose: Option<Box<dyn FnOnce() + Send>>,
    overflow_warned: bool,
    disposed: bool,
}

impl SpriteManager {
    /// Create a sprite manager and register it with `scene`
    ///
    /// Requests the atlas texture (no mipmaps, no flip, wrapping off),
    /// allocates vertex storage for `capacity` quads, builds the index
    /// buffer once and compiles both effect variants. If any step fails,
    /// the resources created so far are released before returning.
    pub fn new(desc: SpriteManagerDesc, scene: &Scene) -> Result<Self> {
        desc.validate()?;

        let graphics_device = scene.graphics_device();
        let (texture, vertex_buffer, index_buffer, effects) = {
            let mut device = lock_device(&graphics_device)?;
            Self::create_gpu_resources(&mut *device, &desc).map_err(|err| {
                crate::engine_error!(SOURCE, "Failed to create '{}': {}", desc.name, err);
                Error::InitializationFailed(format!("sprite manager '{}': {}", desc.name, err))
            })?
        };

        let registry = scene.sprite_managers().clone();
        let registry_key = registry.register(SpriteManagerInfo {
            name: desc.name.clone(),
            capacity: desc.capacity,
        });

        crate::engine_debug!(SOURCE, "Created '{}' (capacity {}, cell size {}px, atlas '{}')",
            desc.name, desc.capacity, desc.cell_size, desc.texture_path);

        Ok(Self {
            name: desc.name,
            capacity: desc.capacity,
            cell_size: desc.cell_size,
            epsilon: desc.epsilon,
            graphics_device,
            texture: Some(texture),
            vertex_buffer: Some(vertex_buffer),
            index_buffer: Some(index_buffer),
            effects,
            vertex_layout: sprite_vertex_layout(),
            sprites: SlotMap::with_key(),
            draw_order: Vec::new(),
            animator: Box::new(CellAnimator),
            vertices: Vec::with_capacity(desc.capacity * VERTICES_PER_SPRITE),
            registry,
            registry_key: Some(registry_key),
            on_dispose: None,
            overflow_warned: false,
            disposed: false,
        })
    }

    #[allow(clippy::type_complexity)]
    fn create_gpu_resources(
        device: &mut dyn GraphicsDevice,
        desc: &SpriteManagerDesc,
    ) -> Result<(Arc<dyn Texture>, Arc<dyn Buffer>, Arc<dyn Buffer>, [Arc<dyn Effect>; 2])> {
        let texture = device.create_texture(TextureDesc {
            path: desc.texture_path.clone(),
            flags: TextureFlags::empty(),
        })?;
        texture.set_wrap_u(false);
        texture.set_wrap_v(false);

        let vertex_bytes = (desc.capacity * VERTICES_PER_SPRITE) as u64 * SPRITE_VERTEX_STRIDE as u64;
        let vertex_buffer = match device.create_dynamic_vertex_buffer(vertex_bytes) {
            Ok(buffer) => buffer,
            Err(err) => {
                texture.dispose();
                return Err(err);
            }
        };

        let index_buffer = match device.create_index_buffer(&build_quad_indices(desc.capacity)) {
            Ok(buffer) => buffer,
            Err(err) => {
                Self::release_logged(device, &vertex_buffer);
                texture.dispose();
                return Err(err);
            }
        };

        let effects = match Self::create_effects(device) {
            Ok(effects) => effects,
            Err(err) => {
                Self::release_logged(device, &index_buffer);
                Self::release_logged(device, &vertex_buffer);
                texture.dispose();
                return Err(err);
            }
        };

        Ok((texture, vertex_buffer, index_buffer, effects))
    }

    fn create_effects(device: &mut dyn GraphicsDevice) -> Result<[Arc<dyn Effect>; 2]> {
        let base = device.create_effect(ShaderVariant::Base.effect_desc())?;
        let fog = device.create_effect(ShaderVariant::Fog.effect_desc())?;
        Ok([base, fog])
    }

    fn release_logged(device: &mut dyn GraphicsDevice, buffer: &Arc<dyn Buffer>) {
        if let Err(err) = device.release_buffer(buffer) {
            crate::engine_error!(SOURCE, "Failed to release buffer: {}", err);
        }
    }

    // ===== SPRITES =====

    /// Append a sprite at the end of the draw order
    ///
    /// Sprites beyond `capacity` are kept but not drawn until earlier ones
    /// are removed.
    pub fn add_sprite(&mut self, sprite: Sprite) -> SpriteKey {
        let key = self.sprites.insert(sprite);
        self.draw_order.push(key);
        key
    }

    /// Remove a sprite, keeping the relative order of the others
    pub fn remove_sprite(&mut self, key: SpriteKey) -> Option<Sprite> {
        let sprite = self.sprites.remove(key)?;
        self.draw_order.retain(|&k| k != key);
        Some(sprite)
    }

    pub fn clear_sprites(&mut self) {
        self.sprites.clear();
        self.draw_order.clear();
    }

    pub fn sprite(&self, key: SpriteKey) -> Option<&Sprite> {
        self.sprites.get(key)
    }

    pub fn sprite_mut(&mut self, key: SpriteKey) -> Option<&mut Sprite> {
        self.sprites.get_mut(key)
    }

    pub fn contains_sprite(&self, key: SpriteKey) -> bool {
        self.sprites.contains_key(key)
    }

    /// Sprites in draw order
    pub fn sprites(&self) -> impl Iterator<Item = (SpriteKey, &Sprite)> + '_ {
        self.draw_order
            .iter()
            .filter_map(move |&key| self.sprites.get(key).map(|sprite| (key, sprite)))
    }

    pub fn sprite_count(&self) -> usize {
        self.draw_order.len()
    }

    /// Replace the animation strategy (default: `CellAnimator`)
    pub fn set_animator(&mut self, animator: impl SpriteAnimator + 'static) {
        self.animator = Box::new(animator);
    }

    /// Callback run once, at the end of `dispose`
    pub fn set_on_dispose(&mut self, callback: impl FnOnce() + Send + 'static) {
        self.on_dispose = Some(Box::new(callback));
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn texture(&self) -> Option<&Arc<dyn Texture>> {
        self.texture.as_ref()
    }

    pub fn effect(&self, variant: ShaderVariant) -> &Arc<dyn Effect> {
        &self.effects[variant as usize]
    }

    pub fn registry_key(&self) -> Option<SpriteManagerKey> {
        self.registry_key
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// True when the texture and both effect variants have finished loading
    pub fn is_ready(&self) -> bool {
        self.texture.as_ref().is_some_and(|texture| texture.is_ready())
            && self.effects.iter().all(|effect| effect.is_ready())
    }

    // ===== RENDERING =====

    /// Rebuild the vertex stream and issue the mask and color passes
    ///
    /// Skips the frame (zero stats, no device calls) when disposed or when
    /// the texture or either effect is not ready yet. Only the first
    /// `capacity` sprites in draw order are animated and drawn. Sprites
    /// whose animation finished this frame and that are flagged
    /// `dispose_when_finished_animating` are removed after drawing, even
    /// when a device call fails.
    ///
    /// Cells per atlas row is `atlas_width / cell_size` in integer pixels,
    /// clamped to at least 1: a partial cell at the right edge of the atlas
    /// is never addressed, and an atlas narrower than one cell is a single
    /// column.
    ///
    /// If a draw fails, color writes, the alpha-test uniform and the blend
    /// mode are restored before the error is returned.
    pub fn render(&mut self, scene: &Scene) -> Result<SpriteRenderStats> {
        let (Some(texture), Some(vertex_buffer), Some(index_buffer)) = (
            self.texture.clone(),
            self.vertex_buffer.clone(),
            self.index_buffer.clone(),
        ) else {
            crate::engine_trace!(SOURCE, "'{}' skipped: disposed", self.name);
            return Ok(SpriteRenderStats::default());
        };

        if !self.is_ready() {
            crate::engine_trace!(SOURCE, "'{}' skipped: resources not ready", self.name);
            return Ok(SpriteRenderStats::default());
        }

        let base_size = texture.base_size();
        if base_size.width == 0 || base_size.height == 0 {
            crate::engine_trace!(SOURCE, "'{}' skipped: atlas size unknown", self.name);
            return Ok(SpriteRenderStats::default());
        }
        let row_size = (base_size.width / self.cell_size).max(1);

        let live = self.draw_order.len();
        if live > self.capacity {
            if !self.overflow_warned {
                crate::engine_warn!(SOURCE, "'{}' has {} sprites, only the first {} are drawn",
                    self.name, live, self.capacity);
                self.overflow_warned = true;
            }
        } else {
            self.overflow_warned = false;
        }
        let max = live.min(self.capacity);

        // Animate and pack
        let delta_time = scene.delta_time();
        let mut finished = Vec::new();
        self.vertices.clear();
        for &key in &self.draw_order[..max] {
            let Some(sprite) = self.sprites.get_mut(key) else {
                continue;
            };
            let was_animating = sprite.animation.started;
            self.animator.animate(sprite, delta_time);
            if was_animating
                && sprite.animation.finished
                && sprite.dispose_when_finished_animating
            {
                finished.push(key);
            }
            append_sprite_quad(sprite, &mut self.vertices, row_size, self.epsilon);
        }

        let drawn = self.vertices.len() / VERTICES_PER_SPRITE;
        let index_count = (drawn * INDICES_PER_SPRITE) as u32;
        let variant = ShaderVariant::for_fog(scene.fog().mode);

        let submitted = self.submit_frame(
            scene,
            &texture,
            (&vertex_buffer, &index_buffer),
            variant,
            index_count,
        );

        for key in finished {
            self.remove_sprite(key);
        }
        submitted?;

        Ok(SpriteRenderStats {
            sprites: drawn,
            draw_calls: 2,
            indices_per_draw: index_count,
        })
    }

    /// Upload the packed vertices, bind the effect and draw both passes
    fn submit_frame(
        &self,
        scene: &Scene,
        texture: &Arc<dyn Texture>,
        (vertex_buffer, index_buffer): (&Arc<dyn Buffer>, &Arc<dyn Buffer>),
        variant: ShaderVariant,
        index_count: u32,
    ) -> Result<()> {
        let effect = &self.effects[variant as usize];
        let base_size = texture.base_size();

        let mut device = lock_device(&self.graphics_device)?;
        device.update_dynamic_vertex_buffer(vertex_buffer, bytemuck::cast_slice(&self.vertices))?;

        device.enable_effect(effect)?;
        effect.set_texture(DIFFUSE_SAMPLER, texture);
        effect.set_matrix(UNIFORM_VIEW, &scene.view_matrix());
        effect.set_matrix(UNIFORM_PROJECTION, &scene.projection_matrix());
        effect.set_vector2(
            UNIFORM_TEXTURE_INFOS,
            self.cell_size as f32 / base_size.width as f32,
            self.cell_size as f32 / base_size.height as f32,
        );

        if variant == ShaderVariant::Fog {
            let fog = scene.fog();
            let [mode, start, end, density] = fog.infos();
            effect.set_float4(UNIFORM_FOG_INFOS, mode, start, end, density);
            effect.set_color3(UNIFORM_FOG_COLOR, &fog.color);
        }

        device.bind_buffers(vertex_buffer, index_buffer, &self.vertex_layout, SPRITE_VERTEX_STRIDE, effect)?;

        Self::draw_passes(&mut *device, effect, index_count)
    }

    /// Mask pass then color pass; draw state is restored even on failure
    fn draw_passes(device: &mut dyn GraphicsDevice, effect: &Arc<dyn Effect>, index_count: u32) -> Result<()> {
        // Mask pass: depth only, alpha-tested
        effect.set_bool(UNIFORM_ALPHA_TEST, true);
        device.set_color_write(false);
        let mask = device.draw(true, 0, index_count);
        device.set_color_write(true);
        effect.set_bool(UNIFORM_ALPHA_TEST, false);
        mask?;

        // Color pass: blended
        device.set_alpha_mode(AlphaMode::Combine);
        let color = device.draw(true, 0, index_count);
        device.set_alpha_mode(AlphaMode::Disable);
        color
    }

    // ===== LIFECYCLE =====

    /// Release GPU resources, leave the scene registry and run the
    /// dispose callback
    ///
    /// Safe to call more than once; later calls do nothing. Release
    /// failures are logged and do not stop the remaining steps.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        let buffers: Vec<Arc<dyn Buffer>> = [self.vertex_buffer.take(), self.index_buffer.take()]
            .into_iter()
            .flatten()
            .collect();
        if !buffers.is_empty() {
            let mut device = self.graphics_device.lock().unwrap_or_else(PoisonError::into_inner);
            for buffer in &buffers {
                Self::release_logged(&mut *device, buffer);
            }
        }

        if let Some(texture) = self.texture.take() {
            texture.dispose();
        }

        if let Some(key) = self.registry_key.take() {
            self.registry.unregister(key);
        }

        if let Some(callback) = self.on_dispose.take() {
            callback();
        }

        crate::engine_info!(SOURCE, "Disposed '{}'", self.name);
    }
}

impl Drop for SpriteManager {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "sprite_manager_tests.rs"]
mod tests;
