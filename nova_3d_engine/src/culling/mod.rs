//! Culling module - planes, frustum, and bounding spheres.
//!
//! Bounding volumes are owned by whatever they bound. The caller updates
//! them with the current world transform once per frame, then runs
//! visibility and intersection queries against the world-space copy.

mod plane;
mod frustum;
mod bounding_sphere;

pub use plane::Plane;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use bounding_sphere::BoundingSphere;
