//! Crop engine errors.

/// Crop computation or gesture error.
///
/// None of these are fatal to the host: at worst a single crop session is
/// invalidated. State-machine actions that fail leave the session untouched.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CropError {
    /// Aspect ratio label outside the fixed set.
    #[error("unknown aspect ratio label")]
    InvalidAspectRatio,
    /// Zero, negative, NaN or infinite width/height where a real size is required.
    #[error("cannot initialize crop for empty image")]
    DegenerateDimensions,
    /// Action called in the wrong gesture state (e.g. resize update while idle).
    #[error("action not valid in the current gesture state")]
    InvalidGestureState,
}

/// Result alias defaulting to [`CropError`].
pub type Result<T, E = CropError> = core::result::Result<T, E>;
