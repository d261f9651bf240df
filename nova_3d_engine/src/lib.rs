/*!
# Nova 3D Engine

Visibility culling and sprite batching for the Nova3D rendering engine.

The crate is backend-agnostic: rendering goes through the `GraphicsDevice`
trait and its resource traits, implemented by a backend outside this crate.

## Architecture

- **BoundingSphere**: loose sphere bound with frustum, point and sphere tests
- **Frustum**: six culling planes extracted from a view-projection matrix
- **Scene**: explicit context (device, camera, fog, clock, manager registry)
- **SpriteManager**: fixed-capacity batch of billboard sprites drawn in a
  depth-mask pass followed by a blended color pass
- **Engine**: process-wide logger used by the `engine_*!` macros
*/

// Internal modules
mod error;
mod engine;
mod color;
pub mod log;
pub mod culling;
pub mod device;
pub mod scene;
pub mod sprite;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Color value types
    pub use crate::color::{Color3, Color4};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Culling sub-module
    pub mod culling {
        pub use crate::culling::*;
    }

    // Rendering device sub-module
    pub mod device {
        pub use crate::device::*;
    }

    // Scene context sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Sprite batching sub-module
    pub mod sprite {
        pub use crate::sprite::*;
    }
}

// Re-export math library at crate root
pub use glam;
