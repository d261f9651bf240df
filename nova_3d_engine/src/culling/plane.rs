/// Plane - signed distance function over points.
///
/// Stored as (normal, d) where `normal · p + d = 0` on the plane.
/// Points on the normal side have a positive signed distance.

use glam::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal (unit length once normalized)
    pub normal: Vec3,
    /// Signed offset from the origin
    pub d: f32,
}

impl Plane {
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self { normal, d: -normal.dot(point) }
    }

    /// Plane from packed (A, B, C, D) coefficients.
    pub fn from_vec4(coefficients: Vec4) -> Self {
        Self { normal: coefficients.truncate(), d: coefficients.w }
    }

    /// Signed distance from the plane to `point` along the normal.
    ///
    /// Only a true distance when the normal is unit length.
    #[inline]
    pub fn dot_coordinate(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Rescale so the normal is unit length. A zero normal is left untouched.
    pub fn normalized(&self) -> Self {
        let length = self.normal.length();
        if length > 0.0 {
            Self { normal: self.normal / length, d: self.d / length }
        } else {
            *self
        }
    }
}
