//! Error types for the Nova3D engine
//!
//! This module defines the error type shared by the culling, device and
//! sprite subsystems, plus the `engine_err!` / `engine_bail!` helpers that
//! log an error before handing it back to the caller.

use std::fmt;

/// Result type for Nova3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (device call failed, lock poisoned, etc.)
    BackendError(String),

    /// Out of GPU memory (reported by `GraphicsDevice` backends)
    OutOfMemory,

    /// Invalid resource (texture, buffer, effect, descriptor, etc.)
    InvalidResource(String),

    /// Initialization failed (sprite manager whose device resources could
    /// not all be created)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message (with file:line) and build an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use nova_3d_engine::engine_err;
/// let err = engine_err!("nova3d::SpriteManager", "Buffer {} missing", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nova3d::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the
/// enclosing function
///
/// # Example
///
/// ```no_run
/// # use nova_3d_engine::engine_bail;
/// fn check(capacity: usize) -> nova_3d_engine::nova3d::Result<()> {
///     if capacity == 0 {
///         engine_bail!("nova3d::SpriteManager", "capacity must be > 0");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
