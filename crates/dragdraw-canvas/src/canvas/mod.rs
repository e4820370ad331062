//! Canvas controller: box list, gesture state machine, render pass.

mod gesture;
mod persistence;

pub use persistence::{BoxRecord, CanvasSnapshot};

use dragdraw_core::{DisplayFrame, DisplayInfo, ScreenRotation};
use tracing::debug;

use crate::model::DrawnBox;
use crate::render::RenderSurface;

/// Canvas state managing drawn boxes and the live gesture.
///
/// All mutation happens on the host's single UI thread: touch events and
/// render passes are invoked sequentially, never interleaved. The canvas
/// owns the box list by value; the in-progress box is tracked as an index
/// into the list, never a second owning reference.
#[derive(Debug, Clone)]
pub struct BoxCanvas {
    boxes: Vec<DrawnBox>,
    /// Index of the box the live gesture is extending; `None` when idle.
    active: Option<usize>,
    frame: DisplayFrame,
    rotation: ScreenRotation,
    /// Last angle computed from a secondary pointer, kept for diagnostics.
    last_pointer_angle: f64,
    redraw_requested: bool,
}

impl BoxCanvas {
    /// Creates a new, unattached canvas.
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            active: None,
            frame: DisplayFrame::new(0.0, 0.0),
            rotation: ScreenRotation::Deg0,
            last_pointer_angle: 0.0,
            redraw_requested: false,
        }
    }

    /// Captures the display's rotation and frame on (re)attach.
    ///
    /// Must be called whenever the canvas is bound to a surface; restore
    /// calls it again so stale rotation is never trusted across a rebind.
    pub fn attach(&mut self, display: &dyn DisplayInfo) {
        let (width, height) = display.physical_size();
        self.rotation = display.rotation();
        self.frame = DisplayFrame::from_physical(width, height);
        debug!(
            rotation = %self.rotation,
            width,
            height,
            "attached to display"
        );
    }

    /// Returns the number of boxes on the canvas.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Gets all boxes in drawing order.
    pub fn boxes(&self) -> &[DrawnBox] {
        &self.boxes
    }

    /// True while a drag gesture is live.
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Gets the box the live gesture is extending, if any.
    pub fn active_box(&self) -> Option<&DrawnBox> {
        self.active.and_then(|i| self.boxes.get(i))
    }

    /// Gets the rotation captured at the last attach.
    pub fn rotation(&self) -> ScreenRotation {
        self.rotation
    }

    /// Gets the portrait frame captured at the last attach.
    pub fn frame(&self) -> DisplayFrame {
        self.frame
    }

    /// Last angle observed from a secondary pointer (diagnostic only).
    pub fn last_pointer_angle(&self) -> f64 {
        self.last_pointer_angle
    }

    /// Clears up the canvas: all boxes, the live gesture, and the
    /// diagnostic angle. Idempotent.
    pub fn clear_canvas(&mut self) {
        self.boxes.clear();
        self.active = None;
        self.last_pointer_angle = 0.0;
        self.request_redraw();
    }

    /// Removes the last drawn box. No-op when the canvas is empty.
    ///
    /// The live gesture is deliberately left alone: undoing the box a drag
    /// is currently extending leaves a stale index behind, which later
    /// moves treat as idle.
    pub fn undo_last_draw(&mut self) {
        if self.boxes.pop().is_none() {
            return;
        }
        self.request_redraw();
    }

    /// Paints the background, then every box in drawing order.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_background();

        for drawn in &self.boxes {
            let (left, top, right, bottom) = drawn.bounds();
            surface.draw_filled_rect(left, top, right, bottom, drawn.rotation, drawn.current);
        }
    }

    /// Takes the coalesced redraw request, resetting it.
    ///
    /// State is always fully mutated before the request becomes visible
    /// here, so a host may repaint immediately on `true`.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

impl Default for BoxCanvas {
    fn default() -> Self {
        Self::new()
    }
}
