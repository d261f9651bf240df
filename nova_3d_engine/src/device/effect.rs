/// Effect trait (compiled shader program + parameter binding) and descriptor

use std::sync::Arc;
use glam::Mat4;
use crate::color::Color3;
use crate::device::Texture;

/// Descriptor for compiling an effect
///
/// The attribute, uniform and sampler names form the binding contract
/// between the engine and the shader source named by `name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectDesc {
    /// Shader source name (e.g., "sprites")
    pub name: String,
    /// Vertex attribute names, in layout order
    pub attributes: Vec<String>,
    /// Uniform names
    pub uniforms: Vec<String>,
    /// Texture sampler names
    pub samplers: Vec<String>,
    /// Preprocessor defines prepended to the source (e.g., "#define FOG")
    pub defines: String,
}

/// Effect resource trait
///
/// Parameter setters take `&self`; backends buffer the values until the
/// next draw that uses this effect.
pub trait Effect: Send + Sync {
    /// True once compilation has finished successfully
    fn is_ready(&self) -> bool;

    fn set_texture(&self, sampler: &str, texture: &Arc<dyn Texture>);

    fn set_matrix(&self, uniform: &str, value: &Mat4);

    fn set_vector2(&self, uniform: &str, x: f32, y: f32);

    fn set_float4(&self, uniform: &str, x: f32, y: f32, z: f32, w: f32);

    fn set_color3(&self, uniform: &str, color: &Color3);

    fn set_bool(&self, uniform: &str, value: bool);
}
