//! Rotation-invariant coordinate transform.
//!
//! Handles conversion between screen pixel coordinates captured under some
//! rotation and canonical coordinates (the frame as if the device were held
//! in its default 0° portrait orientation). Canonical space is the
//! persistence format: points saved under one rotation and restored under
//! another land in the same physical spot on the display.

use crate::display::{DisplayFrame, ScreenRotation};
use crate::geometry::Point;

/// Converts a screen-space point to canonical zero-rotation space.
///
/// Per rotation:
/// ```text
/// 0°:   (x, y) → (x, y)
/// 90°:  (x, y) → (max_width − y, x)
/// 180°: (x, y) → (max_width − x, max_height − y)
/// 270°: (x, y) → (y, max_height − x)
/// ```
pub fn to_canonical(p: Point, rotation: ScreenRotation, frame: DisplayFrame) -> Point {
    match rotation {
        ScreenRotation::Deg0 => p,
        ScreenRotation::Deg90 => Point::new(frame.max_width - p.y, p.x),
        ScreenRotation::Deg180 => {
            Point::new(frame.max_width - p.x, frame.max_height - p.y)
        }
        ScreenRotation::Deg270 => Point::new(p.y, frame.max_height - p.x),
    }
}

/// Converts a canonical-space point back to screen space under `rotation`.
///
/// The exact inverse of [`to_canonical`], per rotation:
/// ```text
/// 0°:   (x0, y0) → (x0, y0)
/// 90°:  (x0, y0) → (y0, max_width − x0)
/// 180°: (x0, y0) → (max_width − x0, max_height − y0)
/// 270°: (x0, y0) → (max_height − y0, x0)
/// ```
///
/// For every point, rotation, and frame:
/// `from_canonical(to_canonical(p, r, f), r, f) == p` up to floating-point
/// tolerance.
pub fn from_canonical(p: Point, rotation: ScreenRotation, frame: DisplayFrame) -> Point {
    match rotation {
        ScreenRotation::Deg0 => p,
        ScreenRotation::Deg90 => Point::new(p.y, frame.max_width - p.x),
        ScreenRotation::Deg180 => {
            Point::new(frame.max_width - p.x, frame.max_height - p.y)
        }
        ScreenRotation::Deg270 => Point::new(frame.max_height - p.y, p.x),
    }
}
