//! Gesture state machine for the canvas.
//!
//! Two states: idle (no live gesture) and drawing (a box is being
//! extended). Only the primary pointer moves box geometry; a secondary
//! pointer, when present on a move event, contributes a rotation angle.

use dragdraw_core::{PointerId, TouchEvent, TouchPhase};
use tracing::debug;

use crate::model::DrawnBox;

use super::BoxCanvas;

impl BoxCanvas {
    /// Feeds one touch event through the gesture state machine.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Down => self.on_down(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::PointerDown | TouchPhase::PointerUp => {
                // Secondary contact changes carry no transition of their
                // own; in particular a secondary lift must not reset the
                // rotation already set on the box.
                debug!(
                    phase = ?event.phase,
                    pointer = event.pointer_id.0,
                    "secondary contact change"
                );
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                // The box stays in the list either way; cancel finalizes
                // just like a lift.
                if self.active.take().is_some() {
                    debug!(phase = ?event.phase, "gesture finished");
                    self.request_redraw();
                }
            }
        }
    }

    fn on_down(&mut self, event: &TouchEvent) {
        let Some(position) = event.position_of(PointerId::PRIMARY) else {
            return;
        };

        debug!(x = position.x, y = position.y, "gesture start");
        self.boxes.push(DrawnBox::new(position));
        self.active = Some(self.boxes.len() - 1);
        self.request_redraw();
    }

    fn on_move(&mut self, event: &TouchEvent) {
        let Some(index) = self.active else {
            // Idle: stray moves are ignored.
            return;
        };
        // A stale index (undo removed the box mid-drag) behaves as idle.
        let Some(active) = self.boxes.get_mut(index) else {
            return;
        };

        if let Some(primary) = event.position_of(PointerId::PRIMARY) {
            active.current = primary;
        }

        // Rotation updates only while both pointers are live. Lifting the
        // secondary leaves the last computed angle on the box.
        if event.pointer_count() > 1 {
            if let (Some(primary), Some(secondary)) = (
                event.position_of(PointerId::PRIMARY),
                event.position_of(PointerId::SECONDARY),
            ) {
                let angle = (secondary.y - primary.y)
                    .atan2(secondary.x - primary.x)
                    .to_degrees();
                active.rotation = angle;
                self.last_pointer_angle = angle;
                debug!(angle, "secondary pointer angle");
            }
        }

        self.request_redraw();
    }
}
