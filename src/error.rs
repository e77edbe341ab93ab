//! Error types for the Vista3D culling engine
//!
//! The original classification path is unchecked: malformed frustum
//! parameters silently produce a degenerate frustum (documented
//! precondition, matching the behavior this engine preserves). These
//! error types back the optional validated construction path
//! (`Frustum::try_from_source`) for callers that want a guarded fault
//! instead of silent degeneracy.

use std::fmt;

/// Result type for Vista3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vista3D culling engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Look/normal direction is zero-length or the two are parallel
    DegenerateDirection(String),

    /// Near/far clip distances are invalid (near <= 0 or far <= near)
    InvalidClipRange(String),

    /// Field of view outside the open interval (0, 180) degrees
    InvalidFieldOfView(String),

    /// Aspect ratio is zero or negative
    InvalidAspectRatio(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateDirection(msg) => write!(f, "Degenerate direction: {}", msg),
            Error::InvalidClipRange(msg) => write!(f, "Invalid clip range: {}", msg),
            Error::InvalidFieldOfView(msg) => write!(f, "Invalid field of view: {}", msg),
            Error::InvalidAspectRatio(msg) => write!(f, "Invalid aspect ratio: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
