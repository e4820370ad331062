//! Rendering surface abstraction.

use dragdraw_core::Point;

/// Surface the canvas paints into, supplied by the host.
///
/// Both methods are invoked from [`crate::BoxCanvas::render`], once per
/// redraw, in box list order. The rotation is scoped to the single
/// `draw_filled_rect` call, so one box's transform can never leak into the
/// next box's paint.
pub trait RenderSurface {
    /// Fills the whole surface with the background.
    fn draw_background(&mut self);

    /// Paints one filled rectangle, rotated `rotation_degrees` about `pivot`.
    fn draw_filled_rect(
        &mut self,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        rotation_degrees: f64,
        pivot: Point,
    );
}
