//! Sprite batching module
//!
//! Provides the sprite record, animation strategies, the packed vertex
//! format and the batching SpriteManager.

mod sprite;
mod animator;
mod sprite_vertex;
mod sprite_manager;

pub use sprite::{Sprite, CellAnimation};
pub use animator::{SpriteAnimator, CellAnimator};
pub use sprite_vertex::{
    SpriteVertex, append_sprite_vertex, append_sprite_quad, build_quad_indices,
    sprite_vertex_layout, QUAD_CORNERS, SPRITE_ATTRIBUTE_GROUPS, SPRITE_VERTEX_FLOATS,
    SPRITE_VERTEX_STRIDE, VERTICES_PER_SPRITE, INDICES_PER_SPRITE,
};
pub use sprite_manager::{
    SpriteManager, SpriteManagerDesc, SpriteKey, SpriteRenderStats, ShaderVariant,
    DEFAULT_EPSILON, SPRITE_EFFECT_NAME, SPRITE_ATTRIBUTES, DIFFUSE_SAMPLER,
    UNIFORM_VIEW, UNIFORM_PROJECTION, UNIFORM_TEXTURE_INFOS, UNIFORM_ALPHA_TEST,
    UNIFORM_FOG_INFOS, UNIFORM_FOG_COLOR,
};
