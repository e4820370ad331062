//! Touch event stream model.
//!
//! The host's touch source produces these events in arrival order. The
//! primary pointer (id 0) drives box geometry; a secondary pointer (id 1)
//! only ever contributes a rotation angle.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier assigned by the touch source, stable for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The pointer that starts and drives the gesture.
    pub const PRIMARY: PointerId = PointerId(0);
    /// The opportunistic second pointer used for the rotation hint.
    pub const SECONDARY: PointerId = PointerId(1);
}

/// Kind of touch action an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Primary pointer made contact.
    Down,
    /// A non-primary pointer made contact.
    PointerDown,
    /// One or more pointers moved.
    Move,
    /// A non-primary pointer lifted.
    PointerUp,
    /// Primary pointer lifted.
    Up,
    /// The host cancelled the gesture.
    Cancel,
}

/// Position of one live pointer at event time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// One event from the touch source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// The pointer whose action triggered the event.
    pub pointer_id: PointerId,
    /// Positions of all pointers currently in contact with the surface.
    pub pointers: Vec<PointerSample>,
}

impl TouchEvent {
    /// Primary pointer makes contact.
    pub fn down(position: Point) -> Self {
        Self {
            phase: TouchPhase::Down,
            pointer_id: PointerId::PRIMARY,
            pointers: vec![PointerSample::new(PointerId::PRIMARY, position)],
        }
    }

    /// Primary pointer moves with no second pointer on the surface.
    pub fn moved(position: Point) -> Self {
        Self {
            phase: TouchPhase::Move,
            pointer_id: PointerId::PRIMARY,
            pointers: vec![PointerSample::new(PointerId::PRIMARY, position)],
        }
    }

    /// Move event carrying every live pointer position.
    pub fn moved_multi(pointers: Vec<PointerSample>) -> Self {
        Self {
            phase: TouchPhase::Move,
            pointer_id: PointerId::PRIMARY,
            pointers,
        }
    }

    /// Secondary pointer makes contact while the primary is down.
    pub fn secondary_down(primary: Point, secondary: Point) -> Self {
        Self {
            phase: TouchPhase::PointerDown,
            pointer_id: PointerId::SECONDARY,
            pointers: vec![
                PointerSample::new(PointerId::PRIMARY, primary),
                PointerSample::new(PointerId::SECONDARY, secondary),
            ],
        }
    }

    /// Secondary pointer lifts, leaving the primary in contact.
    pub fn secondary_up(primary: Point) -> Self {
        Self {
            phase: TouchPhase::PointerUp,
            pointer_id: PointerId::SECONDARY,
            pointers: vec![PointerSample::new(PointerId::PRIMARY, primary)],
        }
    }

    /// Primary pointer lifts.
    pub fn up(position: Point) -> Self {
        Self {
            phase: TouchPhase::Up,
            pointer_id: PointerId::PRIMARY,
            pointers: vec![PointerSample::new(PointerId::PRIMARY, position)],
        }
    }

    /// The host cancels the gesture.
    pub fn cancel() -> Self {
        Self {
            phase: TouchPhase::Cancel,
            pointer_id: PointerId::PRIMARY,
            pointers: Vec::new(),
        }
    }

    /// Gets the position of a live pointer by id.
    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.position)
    }

    /// Number of pointers in contact at event time.
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}
