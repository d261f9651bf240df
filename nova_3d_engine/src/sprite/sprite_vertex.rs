/// Sprite vertex format and quad geometry
///
/// Each sprite is four vertices of 15 floats, grouped as the sprite shader
/// expects:
///
/// | location | name       | floats | contents                              |
/// |----------|------------|--------|---------------------------------------|
/// | 0        | `position` | 3      | world-space center                    |
/// | 1        | `options`  | 4      | angle, size, offset x, offset y       |
/// | 2        | `cellInfo` | 4      | invert u, invert v, column, row       |
/// | 3        | `color`    | 4      | r, g, b, a                            |

use bytemuck::{Pod, Zeroable};
use crate::device::VertexLayout;
use super::sprite::Sprite;

/// Floats per vertex
pub const SPRITE_VERTEX_FLOATS: usize = 15;

/// Bytes per vertex
pub const SPRITE_VERTEX_STRIDE: u32 = (SPRITE_VERTEX_FLOATS * 4) as u32;

pub const VERTICES_PER_SPRITE: usize = 4;

pub const INDICES_PER_SPRITE: usize = 6;

/// Float count of each attribute group, in location order
pub const SPRITE_ATTRIBUTE_GROUPS: [u32; 4] = [3, 4, 4, 4];

/// Corner offsets, in emission order
pub const QUAD_CORNERS: [(f32, f32); VERTICES_PER_SPRITE] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
];

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 3],
    pub options: [f32; 4],
    pub cell_info: [f32; 4],
    pub color: [f32; 4],
}

/// Vertex layout matching `SpriteVertex`
pub fn sprite_vertex_layout() -> VertexLayout {
    VertexLayout::from_float_groups(&SPRITE_ATTRIBUTE_GROUPS).unwrap_or_default()
}

/// Move an offset of exactly 0 or 1 inward by `epsilon`
///
/// Keeps sampling off the atlas cell border so filtering does not pick up
/// texels from the neighbouring cell.
fn clamp_offset(offset: f32, epsilon: f32) -> f32 {
    if offset == 0.0 {
        epsilon
    } else if offset == 1.0 {
        1.0 - epsilon
    } else {
        offset
    }
}

/// Append one corner of `sprite` to `vertices`
///
/// `row_size` is the number of cells per atlas row and must be non-zero.
pub fn append_sprite_vertex(
    sprite: &Sprite,
    vertices: &mut Vec<SpriteVertex>,
    offset_x: f32,
    offset_y: f32,
    row_size: u32,
    epsilon: f32,
) {
    let column = sprite.cell_index % row_size;
    let row = sprite.cell_index / row_size;

    vertices.push(SpriteVertex {
        position: sprite.position.to_array(),
        options: [
            sprite.angle,
            sprite.size,
            clamp_offset(offset_x, epsilon),
            clamp_offset(offset_y, epsilon),
        ],
        cell_info: [
            if sprite.invert_u { 1.0 } else { 0.0 },
            if sprite.invert_v { 1.0 } else { 0.0 },
            column as f32,
            row as f32,
        ],
        color: sprite.color.to_array(),
    });
}

/// Append all four corners of `sprite`
pub fn append_sprite_quad(sprite: &Sprite, vertices: &mut Vec<SpriteVertex>, row_size: u32, epsilon: f32) {
    for (offset_x, offset_y) in QUAD_CORNERS {
        append_sprite_vertex(sprite, vertices, offset_x, offset_y, row_size, epsilon);
    }
}

/// Index list for `capacity` quads: triangles (0,1,2) and (0,2,3) per quad
pub fn build_quad_indices(capacity: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(capacity * INDICES_PER_SPRITE);
    let mut base = 0u32;
    for _ in 0..capacity {
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        base += VERTICES_PER_SPRITE as u32;
    }
    indices
}

#[cfg(test)]
#[path = "sprite_vertex_tests.rs"]
mod tests;
