//! Model type for drawn boxes.

use dragdraw_core::Point;
use serde::{Deserialize, Serialize};

/// One rectangle, under construction or finalized.
///
/// `origin` is fixed where the drag started; `current` tracks the live
/// opposite corner while the gesture is in progress. Neither is required
/// to be the top-left corner: ordering is normalized in [`DrawnBox::bounds`]
/// at read time, never at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawnBox {
    pub origin: Point,
    pub current: Point,
    /// Tilt in degrees, applied at render time about `current`.
    pub rotation: f64,
}

impl DrawnBox {
    /// Creates a degenerate box at the drag start point.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
            rotation: 0.0,
        }
    }

    /// Rendered extents as `(left, top, right, bottom)`, with
    /// `left <= right` and `top <= bottom`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.origin.x.min(self.current.x),
            self.origin.y.min(self.current.y),
            self.origin.x.max(self.current.x),
            self.origin.y.max(self.current.y),
        )
    }
}
