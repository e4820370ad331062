//! # DragDraw Core
//!
//! Core types and utilities for DragDraw.
//! Provides the fundamental abstractions for geometry, display rotation,
//! touch input, and coordinate transforms.
//!
//! ## Core Components
//!
//! - **Geometry**: the [`Point`] primitive shared by both coordinate spaces
//! - **Display**: rotation and portrait-frame model, plus the
//!   [`DisplayInfo`] provider trait implemented by the host
//! - **Transform**: conversion between screen space at the active rotation
//!   and the canonical zero-rotation space used for persistence
//! - **Touch**: the event stream model produced by the host's touch source
//!
//! Two coordinate spaces exist side by side: screen pixel space under the
//! rotation active when a point was captured, and canonical space (the
//! frame as if the device were held in its default portrait orientation).
//! Points never cross between the two without going through [`transform`].

pub mod display;
pub mod error;
pub mod geometry;
pub mod touch;
pub mod transform;

pub use display::{DisplayFrame, DisplayInfo, ScreenRotation};
pub use error::CanvasError;
pub use geometry::Point;
pub use touch::{PointerId, PointerSample, TouchEvent, TouchPhase};
pub use transform::{from_canonical, to_canonical};
