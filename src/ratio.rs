//! Fixed aspect ratio table.
//!
//! The set is closed: every frame is locked to one of these ratios, there is
//! no free/unconstrained mode.
//!
//! ```
//! use zencrop::AspectRatio;
//!
//! let r: AspectRatio = "16:9".parse().unwrap();
//! assert_eq!(r, AspectRatio::Widescreen16x9);
//! assert_eq!(r.counterpart(), AspectRatio::Portrait9x16);
//! assert!((r.ratio() - 16.0 / 9.0).abs() < 1e-12);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::CropError;

/// Locked frame aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    /// 4:3, the default for new frames.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "4:3"))]
    Standard4x3,
    /// 16:9 widescreen.
    #[cfg_attr(feature = "serde", serde(rename = "16:9"))]
    Widescreen16x9,
    /// 1:1.
    #[cfg_attr(feature = "serde", serde(rename = "1:1"))]
    Square,
    /// 9:16 portrait (stories, mobile).
    #[cfg_attr(feature = "serde", serde(rename = "9:16"))]
    Portrait9x16,
    /// 3:2 photo.
    #[cfg_attr(feature = "serde", serde(rename = "3:2"))]
    Classic3x2,
    /// 2:3 portrait photo.
    #[cfg_attr(feature = "serde", serde(rename = "2:3"))]
    Portrait2x3,
    /// 21:9 ultrawide.
    #[cfg_attr(feature = "serde", serde(rename = "21:9"))]
    Ultrawide21x9,
}

impl AspectRatio {
    /// All ratios, in menu order.
    pub const ALL: [AspectRatio; 7] = [
        AspectRatio::Standard4x3,
        AspectRatio::Widescreen16x9,
        AspectRatio::Square,
        AspectRatio::Portrait9x16,
        AspectRatio::Classic3x2,
        AspectRatio::Portrait2x3,
        AspectRatio::Ultrawide21x9,
    ];

    /// Integer `(width, height)` parts of the ratio.
    pub const fn parts(self) -> (u32, u32) {
        match self {
            Self::Standard4x3 => (4, 3),
            Self::Widescreen16x9 => (16, 9),
            Self::Square => (1, 1),
            Self::Portrait9x16 => (9, 16),
            Self::Classic3x2 => (3, 2),
            Self::Portrait2x3 => (2, 3),
            Self::Ultrawide21x9 => (21, 9),
        }
    }

    /// `width / height`. Always positive.
    pub fn ratio(self) -> f64 {
        let (w, h) = self.parts();
        f64::from(w) / f64::from(h)
    }

    /// Label as shown in menus, e.g. `"16:9"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard4x3 => "4:3",
            Self::Widescreen16x9 => "16:9",
            Self::Square => "1:1",
            Self::Portrait9x16 => "9:16",
            Self::Classic3x2 => "3:2",
            Self::Portrait2x3 => "2:3",
            Self::Ultrawide21x9 => "21:9",
        }
    }

    /// The same ratio with width and height swapped, when that is in the set.
    ///
    /// Ratios without a swapped entry (4:3, 21:9) and 1:1 return themselves.
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Widescreen16x9 => Self::Portrait9x16,
            Self::Portrait9x16 => Self::Widescreen16x9,
            Self::Classic3x2 => Self::Portrait2x3,
            Self::Portrait2x3 => Self::Classic3x2,
            other => other,
        }
    }

    /// Whether the frame is taller than wide.
    pub fn is_portrait(self) -> bool {
        let (w, h) = self.parts();
        h > w
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = CropError;

    /// Parse a label such as `"4:3"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.label() == s)
            .ok_or_else(|| {
                log::warn!("rejected aspect ratio label {s:?}");
                CropError::InvalidAspectRatio
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_three() {
        assert_eq!(AspectRatio::default(), AspectRatio::Standard4x3);
        assert_eq!(AspectRatio::default().label(), "4:3");
    }

    #[test]
    fn ratios_match_parts() {
        assert_eq!(AspectRatio::Standard4x3.ratio(), 4.0 / 3.0);
        assert_eq!(AspectRatio::Widescreen16x9.ratio(), 16.0 / 9.0);
        assert_eq!(AspectRatio::Square.ratio(), 1.0);
        assert_eq!(AspectRatio::Portrait9x16.ratio(), 9.0 / 16.0);
        assert_eq!(AspectRatio::Classic3x2.ratio(), 1.5);
        assert_eq!(AspectRatio::Portrait2x3.ratio(), 2.0 / 3.0);
        assert_eq!(AspectRatio::Ultrawide21x9.ratio(), 21.0 / 9.0);
    }

    #[test]
    fn every_label_parses_back() {
        for r in AspectRatio::ALL {
            assert_eq!(r.label().parse::<AspectRatio>(), Ok(r));
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 1:1 ".parse::<AspectRatio>(), Ok(AspectRatio::Square));
    }

    #[test]
    fn unknown_label_fails_fast() {
        assert_eq!(
            "5:4".parse::<AspectRatio>(),
            Err(CropError::InvalidAspectRatio)
        );
        assert_eq!("".parse::<AspectRatio>(), Err(CropError::InvalidAspectRatio));
        assert_eq!(
            "free".parse::<AspectRatio>(),
            Err(CropError::InvalidAspectRatio)
        );
    }

    #[test]
    fn counterpart_swaps_orientation() {
        for r in AspectRatio::ALL {
            let c = r.counterpart();
            assert_eq!(c.counterpart(), r);
            if c != r {
                assert_eq!(c.parts(), (r.parts().1, r.parts().0));
                assert_ne!(c.is_portrait(), r.is_portrait());
            }
        }
        assert_eq!(AspectRatio::Square.counterpart(), AspectRatio::Square);
        assert_eq!(
            AspectRatio::Standard4x3.counterpart(),
            AspectRatio::Standard4x3
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", AspectRatio::Ultrawide21x9), "21:9");
    }
}
