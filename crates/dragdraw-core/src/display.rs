//! Display rotation and frame model.
//!
//! The host's display provider reports the current rotation and the
//! physical pixel extents. Both are captured whenever the canvas is
//! (re)attached to a surface, and again on every restore.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Screen rotation reported by the display provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl ScreenRotation {
    /// Maps the platform's raw rotation constant (0..=3).
    ///
    /// Rotation values come from a closed enum on the provider side, so an
    /// out-of-range value falls back to `Deg0` (the identity transform)
    /// instead of failing.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => ScreenRotation::Deg0,
            1 => ScreenRotation::Deg90,
            2 => ScreenRotation::Deg180,
            3 => ScreenRotation::Deg270,
            unknown => {
                tracing::warn!("Unknown rotation constant {}, defaulting to 0 degrees", unknown);
                ScreenRotation::Deg0
            }
        }
    }

    /// Gets the rotation angle in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            ScreenRotation::Deg0 => 0,
            ScreenRotation::Deg90 => 90,
            ScreenRotation::Deg180 => 180,
            ScreenRotation::Deg270 => 270,
        }
    }
}

impl fmt::Display for ScreenRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Portrait-oriented display extents, invariant across rotation.
///
/// `max_width` is the smaller and `max_height` the larger of the two
/// physical pixel extents, so the same frame values are valid regardless
/// of which rotation they were measured under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub max_width: f64,
    pub max_height: f64,
}

impl DisplayFrame {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Builds the frame from the physical pixel extents, in either order.
    pub fn from_physical(width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        Self {
            max_width: w.min(h),
            max_height: w.max(h),
        }
    }
}

/// Display/rotation provider supplied by the hosting environment.
///
/// Queried on every surface attach and on every restore; the canvas never
/// caches rotation across a surface rebind.
pub trait DisplayInfo {
    /// Current rotation of the display.
    fn rotation(&self) -> ScreenRotation;

    /// Physical pixel extents `(width, height)` under the current rotation.
    fn physical_size(&self) -> (u32, u32);
}
