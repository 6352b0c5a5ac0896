//! Crop session state machine.
//!
//! [`FrameCropper`] owns one [`FrameConfig`] plus the transient
//! [`InteractionState`] and applies geometry results on each user action.
//! Actions run synchronously and either commit a complete new state or leave
//! the session untouched.
//!
//! Gesture states: idle ⇄ resizing (one active corner), and orthogonally
//! frame mode ⇄ edit mode (content panning). Resizing and edit mode are
//! mutually exclusive. An action called in the wrong gesture state returns
//! [`CropError::InvalidGestureState`] and changes nothing, so adapters that
//! see out-of-order events can ignore the error.
//!
//! # Example
//!
//! ```
//! use zencrop::{AspectRatio, Corner, Delta, FrameCropper, Point, Size};
//!
//! let mut cropper = FrameCropper::new();
//! cropper
//!     .initialize_frame(Size::new(1600.0, 1200.0), Size::new(1000.0, 800.0))
//!     .unwrap();
//! assert_eq!(cropper.config().frame, Size::new(800.0, 600.0));
//! assert_eq!(cropper.config().position, Point::new(100.0, 100.0));
//!
//! cropper.start_resize(Corner::BottomRight).unwrap();
//! cropper.update_resize(Delta::new(-80.0, 0.0)).unwrap();
//! cropper.end_resize();
//! assert_eq!(cropper.config().frame, Size::new(720.0, 540.0));
//!
//! cropper.set_aspect_ratio(AspectRatio::Square).unwrap();
//! assert!(cropper.config().is_covered());
//! ```

use crate::config::CropConfig;
use crate::error::{CropError, Result};
use crate::frame::{FrameConfig, FrameRecord};
use crate::geometry::{
    Corner, Delta, Point, Rect, Size, anchor_adjustment, coverage_scale,
    derive_frame_dimensions, resize_from_corner,
};
use crate::ratio::AspectRatio;

/// Transient gesture state. Not persisted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// Corner being dragged; `Some` exactly while a resize is in progress.
    pub active_handle: Option<Corner>,
    /// Pointer drags pan content instead of resizing; handles are hidden.
    pub is_edit_mode: bool,
    /// Content offset captured when the current pan started.
    pub pan_origin: Option<Point>,
}

impl InteractionState {
    /// A resize gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.active_handle.is_some()
    }

    /// A pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan_origin.is_some()
    }
}

/// State holder for one crop session.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameCropper {
    settings: CropConfig,
    state: FrameConfig,
    interaction: InteractionState,
}

impl Default for FrameCropper {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameCropper {
    /// Session at the default configuration's reset state.
    pub fn new() -> Self {
        Self::with_config(CropConfig::default())
    }

    /// Session at `settings`' reset state.
    pub fn with_config(settings: CropConfig) -> Self {
        Self {
            state: settings.default_frame_config(),
            settings,
            interaction: InteractionState::default(),
        }
    }

    /// Session starting from an explicit state.
    ///
    /// Rejects degenerate frame or content sizes, a frame that is off its
    /// `aspect_ratio`, and a non-finite position or content offset. A scale
    /// below the coverage scale is raised to it.
    pub fn from_state(settings: CropConfig, mut state: FrameConfig) -> Result<Self> {
        let floor = coverage_scale(state.content, state.frame)?;
        if !state.frame.is_on_ratio(state.aspect_ratio)
            || !state.position.is_finite()
            || !state.content_offset.is_finite()
        {
            log::warn!("rejected initial crop state {state:?}");
            return Err(CropError::DegenerateDimensions);
        }
        if !(state.content_scale >= floor) || state.content_scale.is_infinite() {
            state.content_scale = floor;
        }
        Ok(Self {
            settings,
            state,
            interaction: InteractionState::default(),
        })
    }

    // ── Read side ───────────────────────────────────────────────────────

    /// Current frame/content geometry.
    pub fn config(&self) -> &FrameConfig {
        &self.state
    }

    /// Current gesture state.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Tunables this session was built with.
    pub fn settings(&self) -> &CropConfig {
        &self.settings
    }

    /// Frame bounds in scene space.
    pub fn frame_rect(&self) -> Rect {
        self.state.frame_rect()
    }

    /// Scaled content bounds in scene space.
    pub fn content_rect(&self) -> Rect {
        self.state.content_rect()
    }

    /// Whether a scene point lies on the frame (for click-outside detection).
    pub fn contains(&self, p: Point) -> bool {
        self.frame_rect().contains(p)
    }

    /// Resize handle under a scene point. Always `None` in edit mode, where
    /// handles are hidden.
    pub fn handle_at(&self, p: Point, tolerance: f64) -> Option<Corner> {
        if self.interaction.is_edit_mode {
            return None;
        }
        self.frame_rect().hit_handle(p, tolerance)
    }

    /// Persistable record of the current geometry.
    pub fn record(&self) -> FrameRecord {
        self.state.to_record()
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Start a session for a freshly loaded image inside a container.
    ///
    /// The frame takes the default ratio and the largest size fitting both
    /// `container_fill` of the container and the image itself, centered in
    /// the container. Content starts at the coverage scale, centered.
    pub fn initialize_frame(&mut self, image: Size, container: Size) -> Result<()> {
        if !image.is_valid() || !container.is_valid() {
            log::warn!("cannot initialize crop: image {image:?}, container {container:?}");
            return Err(CropError::DegenerateDimensions);
        }
        let fill = self.settings.effective_fill();
        let ratio = self.settings.default_ratio;
        let frame = derive_frame_dimensions(
            ratio,
            (container.width * fill).min(image.width),
            (container.height * fill).min(image.height),
        )?;
        let mut next = FrameConfig {
            frame,
            position: Point::new(
                (container.width - frame.width) / 2.0,
                (container.height - frame.height) / 2.0,
            ),
            aspect_ratio: ratio,
            content: image,
            content_offset: Point::ZERO,
            content_scale: 1.0,
        };
        next.refit_content()?;
        self.state = next;
        self.interaction = InteractionState::default();
        log::debug!(
            "initialized {ratio} frame {}x{} at ({}, {}), scale {}",
            frame.width,
            frame.height,
            next.position.x,
            next.position.y,
            next.content_scale
        );
        Ok(())
    }

    /// Return to the configured default state and clear gestures.
    pub fn reset_frame(&mut self) {
        self.state = self.settings.default_frame_config();
        self.interaction = InteractionState::default();
        log::debug!("crop frame reset");
    }

    // ── Aspect ratio ────────────────────────────────────────────────────

    /// Lock the frame to a new ratio.
    ///
    /// The current width is kept as the budget (height grows or shrinks
    /// freely), the frame stays centered on its old midpoint, and content is
    /// refit to the coverage scale.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<()> {
        let center = self.state.center();
        let frame = derive_frame_dimensions(ratio, self.state.frame.width, f64::INFINITY)?;
        let mut next = self.state;
        next.aspect_ratio = ratio;
        next.frame = frame;
        next.position = Point::new(center.x - frame.width / 2.0, center.y - frame.height / 2.0);
        next.refit_content()?;
        self.state = next;
        log::debug!("aspect ratio {ratio}: frame {}x{}", frame.width, frame.height);
        Ok(())
    }

    // ── Corner resize ───────────────────────────────────────────────────

    /// Begin dragging a corner handle.
    ///
    /// Calling again with the same corner is a no-op. A different corner
    /// mid-gesture, or any corner in edit mode, is rejected.
    pub fn start_resize(&mut self, corner: Corner) -> Result<()> {
        if self.interaction.is_edit_mode {
            return self.reject("start_resize in edit mode");
        }
        match self.interaction.active_handle {
            Some(active) if active == corner => Ok(()),
            Some(_) => self.reject("start_resize with another corner active"),
            None => {
                self.interaction.active_handle = Some(corner);
                log::debug!("resize started from {corner:?}");
                Ok(())
            }
        }
    }

    /// Apply an incremental pointer delta to the active corner.
    ///
    /// Each call works from the current frame and position, so deltas must be
    /// per-move increments, not totals since the gesture began.
    pub fn update_resize(&mut self, delta: Delta) -> Result<()> {
        let Some(corner) = self.interaction.active_handle else {
            return self.reject("update_resize while idle");
        };
        let original = self.state.frame;
        let resized = resize_from_corner(
            original,
            delta,
            corner,
            self.state.aspect_ratio,
            self.settings.limits,
        )?;
        let mut next = self.state;
        next.frame = resized;
        next.position = next
            .position
            .offset_by(anchor_adjustment(original, resized, corner));
        next.refit_content()?;
        self.state = next;
        log::trace!(
            "resize {corner:?} by ({}, {}) → {}x{}",
            delta.dx,
            delta.dy,
            resized.width,
            resized.height
        );
        Ok(())
    }

    /// Finish the resize gesture. Geometry is left as is.
    pub fn end_resize(&mut self) {
        if let Some(corner) = self.interaction.active_handle.take() {
            log::debug!("resize from {corner:?} ended");
        }
    }

    // ── Edit mode ───────────────────────────────────────────────────────

    /// Switch between frame mode and edit mode. Never touches the frame.
    pub fn toggle_edit_mode(&mut self) -> Result<()> {
        let enable = !self.interaction.is_edit_mode;
        self.set_edit_mode(enable)
    }

    /// Enter edit mode (no-op if already there).
    pub fn enter_edit_mode(&mut self) -> Result<()> {
        self.set_edit_mode(true)
    }

    /// Leave edit mode (no-op if not in it).
    pub fn exit_edit_mode(&mut self) -> Result<()> {
        self.set_edit_mode(false)
    }

    fn set_edit_mode(&mut self, enable: bool) -> Result<()> {
        if self.interaction.is_resizing() {
            return self.reject("edit mode change while resizing");
        }
        if self.interaction.is_edit_mode != enable {
            self.interaction.is_edit_mode = enable;
            if !enable {
                self.interaction.pan_origin = None;
            }
            log::debug!("edit mode {}", if enable { "on" } else { "off" });
        }
        Ok(())
    }

    // ── Content ─────────────────────────────────────────────────────────

    /// Place the content at `offset` relative to the frame's top-left.
    ///
    /// Not clamped: the offset may leave the content off-center or even
    /// uncovered on one side until the caller moves it back. Non-finite
    /// offsets are rejected.
    pub fn update_content_position(&mut self, offset: Point) -> Result<()> {
        if !self.interaction.is_edit_mode {
            return self.reject("update_content_position outside edit mode");
        }
        if !offset.is_finite() {
            log::warn!("rejected content offset ({}, {})", offset.x, offset.y);
            return Err(CropError::DegenerateDimensions);
        }
        self.state.content_offset = offset;
        log::trace!("content offset ({}, {})", offset.x, offset.y);
        Ok(())
    }

    /// Begin a pan: snapshot the current content offset.
    pub fn start_pan(&mut self) -> Result<()> {
        if !self.interaction.is_edit_mode {
            return self.reject("start_pan outside edit mode");
        }
        self.interaction.pan_origin = Some(self.state.content_offset);
        Ok(())
    }

    /// Move content to the pan snapshot plus `total`, the pointer movement
    /// since [`start_pan`](Self::start_pan).
    pub fn update_pan(&mut self, total: Delta) -> Result<()> {
        let Some(origin) = self.interaction.pan_origin else {
            return self.reject("update_pan without start_pan");
        };
        self.update_content_position(origin.offset_by(total))
    }

    /// Finish the pan gesture.
    pub fn end_pan(&mut self) {
        self.interaction.pan_origin = None;
    }

    /// Set the content scale, never going below the coverage scale.
    ///
    /// NaN and `-inf` fall to the coverage scale; `+inf` is rejected.
    pub fn update_content_scale(&mut self, scale: f64) -> Result<()> {
        if scale == f64::INFINITY {
            log::warn!("rejected infinite content scale");
            return Err(CropError::DegenerateDimensions);
        }
        let floor = coverage_scale(self.state.content, self.state.frame)?;
        self.state.content_scale = scale.max(floor);
        log::trace!("content scale {}", self.state.content_scale);
        Ok(())
    }

    fn reject(&self, what: &str) -> Result<()> {
        log::warn!("ignored {what} ({:?})", self.interaction);
        Err(CropError::InvalidGestureState)
    }
}
