//! Multi-press detection for entering edit mode.
//!
//! Driven by caller-supplied timestamps so it works the same in tests,
//! browsers and native event loops. The crop session itself never sees raw
//! presses; an adapter feeds presses here and calls
//! [`FrameCropper::toggle_edit_mode`](crate::FrameCropper::toggle_edit_mode)
//! when a double press completes.
//!
//! ```
//! use zencrop::press::MultiPress;
//!
//! let mut presses = MultiPress::double();
//! assert!(!presses.press("frame", 1_000));
//! assert!(presses.press("frame", 1_250)); // within 300 ms
//! assert!(!presses.press("frame", 1_400)); // sequence restarted
//! ```

/// Default window between presses of a double press, in milliseconds.
pub const DOUBLE_PRESS_WINDOW_MS: u64 = 300;

/// Counts presses on the same target that each follow the previous one
/// within a time window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiPress<T> {
    window_ms: u64,
    required: u32,
    last: Option<(T, u64)>,
    count: u32,
}

impl<T: PartialEq> MultiPress<T> {
    /// Detector for `required` presses (at least 2) within `window_ms` of each other.
    pub fn new(required: u32, window_ms: u64) -> Self {
        Self {
            window_ms,
            required: required.max(2),
            last: None,
            count: 0,
        }
    }

    /// Double press within [`DOUBLE_PRESS_WINDOW_MS`].
    pub fn double() -> Self {
        Self::new(2, DOUBLE_PRESS_WINDOW_MS)
    }

    /// Record a press. Returns `true` when it completes the sequence, which
    /// then starts over.
    ///
    /// A different target, a gap longer than the window, or a timestamp
    /// earlier than the previous press restarts counting at this press.
    pub fn press(&mut self, target: T, at_ms: u64) -> bool {
        let continues = match &self.last {
            Some((prev, prev_ms)) => {
                *prev == target && at_ms >= *prev_ms && at_ms - *prev_ms <= self.window_ms
            }
            None => false,
        };
        self.count = if continues { self.count + 1 } else { 1 };

        if self.count >= self.required {
            self.reset();
            true
        } else {
            self.last = Some((target, at_ms));
            false
        }
    }

    /// Forget any partial sequence.
    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}
