//! Aspect-locked crop frame geometry and crop session state.
//!
//! Pure geometry plus a small state machine. Nothing here renders or does
//! I/O, and the core is `no_std` compatible.
//!
//! # Modules
//!
//! - [`ratio`] - The fixed set of frame aspect ratios
//! - [`geometry`] - Frame derivation, corner resize, anchoring, content coverage
//! - [`frame`] - Session geometry ([`FrameConfig`]) and its persisted record
//! - [`cropper`] - [`FrameCropper`], the session state machine
//! - [`config`] - Session tunables
//! - [`press`] - Double-press detection for adapters
//! - `svg` - SVG snapshot of a session (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cropper;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod press;
pub mod ratio;

#[cfg(feature = "svg")]
pub mod svg;

pub use config::CropConfig;
pub use cropper::{FrameCropper, InteractionState};
pub use error::CropError;
pub use frame::{FrameConfig, FrameRecord};
pub use geometry::{
    Corner, Delta, Point, Rect, ResizeLimits, Size, anchor_adjustment, centered_offset,
    coverage_scale, derive_frame_dimensions, resize_from_corner,
};
pub use ratio::AspectRatio;
