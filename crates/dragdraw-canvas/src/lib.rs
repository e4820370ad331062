//! # DragDraw Canvas
//!
//! This crate provides the box drawing canvas: it turns a stream of touch
//! events into axis-aligned rectangles, paints them onto a host-supplied
//! surface, and persists them across display rotation changes.
//!
//! ## Core Components
//!
//! - **Model**: [`DrawnBox`], one rectangle under construction or finalized
//! - **Canvas**: [`BoxCanvas`], the controller owning the box list and the
//!   gesture state machine
//! - **Render**: the [`RenderSurface`] trait the host implements to paint
//! - **Persistence**: [`CanvasSnapshot`], the canonical-space save format
//!
//! ## Architecture
//!
//! The canvas operates as a single-threaded, event-driven controller:
//!
//! ```text
//! BoxCanvas (Controller)
//!   ├── DrawnBox list (z-order = drawing order = undo order)
//!   ├── Gesture state machine (Idle ⇔ Drawing)
//!   ├── Render pass (RenderSurface)
//!   └── Snapshot/restore (canonical-space transform)
//! ```
//!
//! Touch events mutate the in-progress box; the render pass reads the box
//! list and paints. On teardown the host calls [`BoxCanvas::snapshot`]
//! before destroying the surface binding and [`BoxCanvas::restore`] after
//! rebinding to a (possibly differently rotated) surface.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dragdraw_canvas::BoxCanvas;
//! use dragdraw_core::{Point, TouchEvent};
//!
//! let mut canvas = BoxCanvas::new();
//! canvas.attach(&display);
//!
//! canvas.handle_touch(&TouchEvent::down(Point::new(100.0, 200.0)));
//! canvas.handle_touch(&TouchEvent::moved(Point::new(300.0, 400.0)));
//! canvas.handle_touch(&TouchEvent::up(Point::new(300.0, 400.0)));
//!
//! canvas.render(&mut surface);
//! ```

pub mod canvas;
pub mod model;
pub mod render;

pub use canvas::{BoxCanvas, BoxRecord, CanvasSnapshot};
pub use model::DrawnBox;
pub use render::RenderSurface;
