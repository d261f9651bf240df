/// Frustum - six clipping planes for visibility culling.
///
/// Plane normals point inward (toward the visible volume), so a point is
/// inside when every plane reports a non-negative signed distance.
/// The caller may build the planes by any means; `from_view_projection()`
/// is provided as a utility.

use glam::{Mat4, Vec4};
use super::plane::Plane;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
///
/// Plane order only matters for early-out speed; every containment
/// test requires all six planes to pass.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract normalized frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann method, valid for perspective and orthographic
    /// projections with a [0, 1] clip-space depth range.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let coefficients: [Vec4; 6] = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row2,        // near (z >= 0)
            row3 - row2, // far
        ];

        Self {
            planes: coefficients.map(|c| Plane::from_vec4(c).normalized()),
        }
    }

    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
