//! Crop session state and its persisted form.

use crate::error::{CropError, Result};
use crate::geometry::{Point, Rect, Size, centered_offset, coverage_scale};
use crate::ratio::AspectRatio;

/// Tolerance for the coverage check, in scene units.
pub const COVERAGE_EPSILON: f64 = 1e-6;

/// Frame and content geometry of one crop session.
///
/// Only [`FrameCropper`](crate::FrameCropper) actions mutate a live session;
/// the fields are public so renderers and tests can read them directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameConfig {
    /// Frame size. On `aspect_ratio` at rest.
    pub frame: Size,
    /// Top-left of the frame in scene space.
    pub position: Point,
    /// Locked ratio.
    pub aspect_ratio: AspectRatio,
    /// Natural (unscaled) size of the image content.
    pub content: Size,
    /// Content top-left relative to the frame top-left.
    pub content_offset: Point,
    /// Uniform content scale. Never below the coverage scale.
    pub content_scale: f64,
}

impl FrameConfig {
    /// Frame bounds in scene space.
    pub fn frame_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.frame)
    }

    /// Frame midpoint in scene space.
    pub fn center(&self) -> Point {
        self.frame_rect().center()
    }

    /// Content size after scaling.
    pub fn scaled_content(&self) -> Size {
        self.content.scaled(self.content_scale)
    }

    /// Scaled content bounds in scene space.
    pub fn content_rect(&self) -> Rect {
        let origin = Point::new(
            self.position.x + self.content_offset.x,
            self.position.y + self.content_offset.y,
        );
        Rect::from_origin_size(origin, self.scaled_content())
    }

    /// Whether the scaled content is at least as large as the frame on both axes.
    pub fn is_covered(&self) -> bool {
        let s = self.scaled_content();
        s.width >= self.frame.width - COVERAGE_EPSILON
            && s.height >= self.frame.height - COVERAGE_EPSILON
    }

    /// Snap scale to the coverage minimum and center the content.
    pub(crate) fn refit_content(&mut self) -> Result<()> {
        let scale = coverage_scale(self.content, self.frame)?;
        self.content_scale = scale;
        self.content_offset = centered_offset(self.content, self.frame, scale);
        Ok(())
    }

    /// Flat record for storage alongside the image.
    pub fn to_record(&self) -> FrameRecord {
        FrameRecord {
            frame_width: self.frame.width,
            frame_height: self.frame.height,
            aspect_ratio: self.aspect_ratio,
            content_offset_x: self.content_offset.x,
            content_offset_y: self.content_offset.y,
            content_scale: self.content_scale,
        }
    }

    /// Rebuild a session from a stored record.
    ///
    /// The record does not carry the image size or the frame position, so the
    /// caller supplies them. The stored frame size is used as is and must be
    /// on the stored ratio; the scale is floored at the coverage scale. A
    /// record taken from a live session comes back unchanged.
    pub fn from_record(record: &FrameRecord, content: Size, position: Point) -> Result<Self> {
        if !content.is_valid() || !position.is_finite() || !record.content_scale.is_finite() {
            return Err(CropError::DegenerateDimensions);
        }
        let frame = Size::checked(record.frame_width, record.frame_height)?;
        if !frame.is_on_ratio(record.aspect_ratio) {
            log::warn!(
                "stored frame {}x{} is not {}",
                frame.width,
                frame.height,
                record.aspect_ratio
            );
            return Err(CropError::DegenerateDimensions);
        }
        let content_offset = Point::new(record.content_offset_x, record.content_offset_y);
        if !content_offset.is_finite() {
            return Err(CropError::DegenerateDimensions);
        }
        let content_scale = record.content_scale.max(coverage_scale(content, frame)?);
        Ok(Self {
            frame,
            position,
            aspect_ratio: record.aspect_ratio,
            content,
            content_offset,
            content_scale,
        })
    }
}

/// Persisted crop layout: `{frameWidth, frameHeight, aspectRatio,
/// contentOffsetX, contentOffsetY, contentScale}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameRecord {
    pub frame_width: f64,
    pub frame_height: f64,
    pub aspect_ratio: AspectRatio,
    pub content_offset_x: f64,
    pub content_offset_y: f64,
    pub content_scale: f64,
}
