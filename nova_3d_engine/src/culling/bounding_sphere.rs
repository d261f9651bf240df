/// BoundingSphere - sphere bound used for visibility culling.
///
/// The model-space sphere is computed once from a vertex stream. Each
/// frame the owner calls `update()` with its world matrix; all queries
/// read only the world-space copy (`center_world`, `radius_world`).

use glam::{Mat4, Vec3};
use super::plane::Plane;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Model-space center
    center: Vec3,
    /// Model-space radius
    radius: f32,
    /// World-space center, as of the last `update()`
    center_world: Vec3,
    /// World-space radius, as of the last `update()`
    radius_world: f32,
}

impl BoundingSphere {
    /// Sphere with an explicit center and radius.
    ///
    /// The world-space copy starts equal to the model-space sphere
    /// (identity transform) until the first `update()`.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            center_world: center,
            radius_world: radius,
        }
    }

    /// Bound the positions of an interleaved vertex stream.
    ///
    /// Scans `vertices[start..start + count]` in steps of `stride`, reading a
    /// position triple at each step. The sphere's diameter is the diagonal of
    /// the axis-aligned box of those positions: a loose but cheap bound, not
    /// the minimal enclosing sphere.
    ///
    /// # Panics
    ///
    /// `count == 0` leaves the min/max sentinels in place and is a caller
    /// bug (debug builds assert). A zero `stride` or a range that reads
    /// past the end of `vertices` panics.
    pub fn from_vertices(vertices: &[f32], stride: usize, start: usize, count: usize) -> Self {
        debug_assert!(count > 0, "bounding sphere built from an empty vertex range");

        let mut minimum = Vec3::splat(f32::INFINITY);
        let mut maximum = Vec3::splat(f32::NEG_INFINITY);

        for index in (start..start + count).step_by(stride) {
            let current = Vec3::new(vertices[index], vertices[index + 1], vertices[index + 2]);
            minimum = minimum.min(current);
            maximum = maximum.max(current);
        }

        Self::new(minimum.lerp(maximum, 0.5), minimum.distance(maximum) * 0.5)
    }

    /// Refresh the world-space sphere.
    ///
    /// `scale` is the uniform scale factor of `world`, extracted by the
    /// caller; the sphere never decomposes matrices itself.
    pub fn update(&mut self, world: &Mat4, scale: f32) {
        // Homogeneous divide, so projective matrices behave like affine ones
        self.center_world = world.project_point3(self.center);
        self.radius_world = self.radius * scale;
    }

    /// Conservative sphere/frustum test.
    ///
    /// Rejects only when the sphere lies entirely on the negative side of
    /// some plane (`distance <= -radius`). Spheres near frustum corners may
    /// be accepted even though they are outside.
    pub fn is_in_frustum(&self, planes: &[Plane; 6]) -> bool {
        !planes
            .iter()
            .any(|plane| plane.dot_coordinate(self.center_world) <= -self.radius_world)
    }

    /// True when `point` is within the world-space sphere (boundary inclusive).
    pub fn intersects_point(&self, point: Vec3) -> bool {
        self.center_world.distance(point) <= self.radius_world
    }

    /// True when two world-space spheres overlap or touch.
    pub fn intersects(a: &BoundingSphere, b: &BoundingSphere) -> bool {
        a.center_world.distance(b.center_world) <= a.radius_world + b.radius_world
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center_world(&self) -> Vec3 {
        self.center_world
    }

    pub fn radius_world(&self) -> f32 {
        self.radius_world
    }
}

#[cfg(test)]
#[path = "bounding_sphere_tests.rs"]
mod tests;
