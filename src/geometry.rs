//! Frame and content geometry.
//!
//! Derives frame dimensions from an aspect ratio and a size budget, resizes a
//! frame proportionally from any corner, and computes the content scale and
//! offset that keep the image covering the frame. Pure functions over plain
//! values. No state and no allocation, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zencrop::geometry::{coverage_scale, derive_frame_dimensions, Size};
//! use zencrop::AspectRatio;
//!
//! let frame = derive_frame_dimensions(AspectRatio::Standard4x3, 800.0, 640.0).unwrap();
//! assert_eq!(frame, Size::new(800.0, 600.0));
//!
//! // 1600×1200 image must be scaled to at least 0.5 to cover the frame.
//! let scale = coverage_scale(Size::new(1600.0, 1200.0), frame).unwrap();
//! assert_eq!(scale, 0.5);
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::{CropError, Result};
use crate::ratio::AspectRatio;

/// Relative tolerance for a frame to count as on its locked ratio.
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// Width × height in scene units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size without validation.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting zero, negative, NaN or infinite values.
    pub fn checked(width: f64, height: f64) -> Result<Self> {
        let s = Self { width, height };
        if s.is_valid() {
            Ok(s)
        } else {
            Err(CropError::DegenerateDimensions)
        }
    }

    /// Both sides positive and finite.
    pub fn is_valid(&self) -> bool {
        is_positive_finite(self.width) && is_positive_finite(self.height)
    }

    /// `width / height`.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Uniformly scaled copy.
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(self.width * scale, self.height * scale)
    }

    /// Whether `width / height` matches `ratio` within [`RATIO_TOLERANCE`].
    pub fn is_on_ratio(&self, ratio: AspectRatio) -> bool {
        let r = ratio.ratio();
        (self.aspect() - r).abs() <= RATIO_TOLERANCE * r
    }
}

/// A position in scene space. Either sign is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Translate by a delta.
    pub fn offset_by(self, delta: Delta) -> Self {
        Self::new(self.x + delta.dx, self.y + delta.dy)
    }
}

/// A movement: pointer drag increment or position adjustment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    /// No movement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a delta.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A frame corner, used both as the resize handle being dragged and to
/// locate handle points on a [`Rect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in hit-test order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner (the resize anchor).
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Dragging this corner moves the left edge.
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Dragging this corner moves the top edge.
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Axis-aligned rectangle in scene space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect with the given top-left and size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Midpoint.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Location of a corner (where its resize handle is drawn).
    pub fn corner(&self, corner: Corner) -> Point {
        let x = if corner.is_left() {
            self.x
        } else {
            self.x + self.width
        };
        let y = if corner.is_top() {
            self.y
        } else {
            self.y + self.height
        };
        Point::new(x, y)
    }

    /// Whether the point lies inside or on the edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// First corner (in [`Corner::ALL`] order) within `tolerance` of `p`.
    pub fn hit_handle(&self, p: Point, tolerance: f64) -> Option<Corner> {
        Corner::ALL.into_iter().find(|&c| {
            let h = self.corner(c);
            let (dx, dy) = (p.x - h.x, p.y - h.y);
            dx * dx + dy * dy < tolerance * tolerance
        })
    }
}

/// Minimum frame size enforced by [`resize_from_corner`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeLimits {
    pub min_width: f64,
    pub min_height: f64,
}

impl ResizeLimits {
    /// Default minimum: 100×100.
    pub const DEFAULT: Self = Self {
        min_width: 100.0,
        min_height: 100.0,
    };

    /// Create limits.
    pub const fn new(min_width: f64, min_height: f64) -> Self {
        Self {
            min_width,
            min_height,
        }
    }
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Geometry engine
// ============================================================================

/// Largest rectangle of `ratio` that fits inside `max_width × max_height`.
///
/// Width is tried first; if the resulting height overflows, height becomes
/// the constraint. `max_height` may be `f64::INFINITY` to size from the
/// width budget alone.
pub fn derive_frame_dimensions(ratio: AspectRatio, max_width: f64, max_height: f64) -> Result<Size> {
    // `!(x > 0)` also rejects NaN.
    if !(max_width > 0.0) || !(max_height > 0.0) {
        return Err(CropError::DegenerateDimensions);
    }
    let r = ratio.ratio();
    let mut width = max_width;
    let mut height = width / r;
    if height > max_height {
        height = max_height;
        width = height * r;
    }
    Size::checked(width, height)
}

/// Resize `current` by a pointer `delta` applied at `corner`, keeping `ratio`.
///
/// Left corners shrink as `dx` grows, top corners shrink as `dy` grows. The
/// axis that changed more drives the other through the ratio (width wins
/// ties). Minimums are enforced width first, then height, each recomputing
/// the other side, so the result is always on ratio.
///
/// The driving axis is picked from the raw delta on every call, even right
/// after a clamp, so a gesture that keeps crossing the minimum can snap for
/// one update.
pub fn resize_from_corner(
    current: Size,
    delta: Delta,
    corner: Corner,
    ratio: AspectRatio,
    limits: ResizeLimits,
) -> Result<Size> {
    if !current.is_valid()
        || !is_positive_finite(limits.min_width)
        || !is_positive_finite(limits.min_height)
    {
        return Err(CropError::DegenerateDimensions);
    }
    let r = ratio.ratio();

    let raw_width = if corner.is_left() {
        current.width - delta.dx
    } else {
        current.width + delta.dx
    };
    let raw_height = if corner.is_top() {
        current.height - delta.dy
    } else {
        current.height + delta.dy
    };

    let (mut width, mut height) =
        if (raw_width - current.width).abs() >= (raw_height - current.height).abs() {
            (raw_width, raw_width / r)
        } else {
            (raw_height * r, raw_height)
        };

    if !(width >= limits.min_width) {
        width = limits.min_width;
        height = width / r;
    }
    if !(height >= limits.min_height) {
        height = limits.min_height;
        width = height * r;
    }

    Size::checked(width, height)
}

/// Position change that keeps the corner opposite `corner` fixed while the
/// frame goes from `original` to `resized`.
pub fn anchor_adjustment(original: Size, resized: Size, corner: Corner) -> Delta {
    let dw = resized.width - original.width;
    let dh = resized.height - original.height;
    Delta::new(
        if corner.is_left() { -dw } else { 0.0 },
        if corner.is_top() { -dh } else { 0.0 },
    )
}

/// Smallest uniform scale at which `content` covers `frame` on both axes.
pub fn coverage_scale(content: Size, frame: Size) -> Result<f64> {
    if !content.is_valid() || !frame.is_valid() {
        return Err(CropError::DegenerateDimensions);
    }
    Ok((frame.width / content.width).max(frame.height / content.height))
}

/// Offset (relative to the frame's top-left) that centers `content` scaled
/// by `scale` over `frame`.
///
/// At the coverage scale the fitted axis gets `0` and the overflowing axis a
/// negative offset.
pub fn centered_offset(content: Size, frame: Size, scale: f64) -> Point {
    Point::new(
        (frame.width - content.width * scale) / 2.0,
        (frame.height - content.height * scale) / 2.0,
    )
}

fn is_positive_finite(v: f64) -> bool {
    v > 0.0 && v.is_finite()
}
