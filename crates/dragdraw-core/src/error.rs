//! Error handling for DragDraw.
//!
//! Gesture handling, list operations, and coordinate transforms are total
//! over their input domains and have no error paths. The only failure-shaped
//! conditions live at the persistence boundary, where a snapshot produced
//! elsewhere is decoded.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Canvas error type
///
/// Represents failures while decoding or applying a persisted canvas
/// snapshot.
#[derive(Error, Debug, Clone)]
pub enum CanvasError {
    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion {
        /// The version string found in the snapshot.
        found: String,
        /// The version string this build expects.
        expected: String,
    },

    /// Snapshot payload could not be decoded
    #[error("Malformed snapshot: {reason}")]
    MalformedSnapshot {
        /// A message describing what failed to decode.
        reason: String,
    },
}
