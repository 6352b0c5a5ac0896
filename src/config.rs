//! Crop session configuration.
//!
//! ```
//! use zencrop::{AspectRatio, CropConfig, FrameCropper, ResizeLimits};
//!
//! let config = CropConfig::default()
//!     .default_ratio(AspectRatio::Square)
//!     .limits(ResizeLimits::new(50.0, 50.0))
//!     .container_fill(0.9);
//!
//! let cropper = FrameCropper::with_config(config);
//! assert_eq!(cropper.config().aspect_ratio, AspectRatio::Square);
//! ```

use crate::frame::FrameConfig;
use crate::geometry::{Point, ResizeLimits, Size, derive_frame_dimensions};
use crate::ratio::AspectRatio;

/// Fraction of the container a freshly initialized frame may occupy.
pub const DEFAULT_CONTAINER_FILL: f64 = 0.8;

/// Width of the frame restored by a reset.
pub const DEFAULT_FRAME_WIDTH: f64 = 400.0;

/// Tunables for a [`FrameCropper`](crate::FrameCropper).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropConfig {
    /// Ratio for new and reset frames.
    pub default_ratio: AspectRatio,
    /// Minimum frame size for corner resizes.
    pub limits: ResizeLimits,
    /// Fraction (0, 1] of the container a new frame may span on each axis.
    pub container_fill: f64,
    /// Width of the reset frame. Height follows `default_ratio`.
    pub default_frame_width: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            default_ratio: AspectRatio::default(),
            limits: ResizeLimits::DEFAULT,
            container_fill: DEFAULT_CONTAINER_FILL,
            default_frame_width: DEFAULT_FRAME_WIDTH,
        }
    }
}

impl CropConfig {
    /// Set the ratio used by initialize and reset.
    pub fn default_ratio(mut self, ratio: AspectRatio) -> Self {
        self.default_ratio = ratio;
        self
    }

    /// Set the minimum frame size.
    pub fn limits(mut self, limits: ResizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the container fill fraction.
    pub fn container_fill(mut self, fill: f64) -> Self {
        self.container_fill = fill;
        self
    }

    /// Set the reset frame width.
    pub fn default_frame_width(mut self, width: f64) -> Self {
        self.default_frame_width = width;
        self
    }

    /// The state a session returns to on reset.
    ///
    /// A `default_frame_width`-wide frame on `default_ratio` at the origin,
    /// holding content of exactly the frame's size at scale 1. Falls back to
    /// [`DEFAULT_FRAME_WIDTH`] when the configured width is unusable.
    pub fn default_frame_config(&self) -> FrameConfig {
        let ratio = self.default_ratio;
        let frame = derive_frame_dimensions(ratio, self.default_frame_width, f64::INFINITY)
            .unwrap_or_else(|_| {
                log::warn!(
                    "default frame width {} unusable, using {DEFAULT_FRAME_WIDTH}",
                    self.default_frame_width
                );
                Size::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_WIDTH / ratio.ratio())
            });
        FrameConfig {
            frame,
            position: Point::ZERO,
            aspect_ratio: ratio,
            content: frame,
            content_offset: Point::ZERO,
            content_scale: 1.0,
        }
    }

    /// `container_fill` if it lies in (0, 1], otherwise the default.
    pub(crate) fn effective_fill(&self) -> f64 {
        if self.container_fill > 0.0 && self.container_fill <= 1.0 {
            self.container_fill
        } else {
            DEFAULT_CONTAINER_FILL
        }
    }
}
