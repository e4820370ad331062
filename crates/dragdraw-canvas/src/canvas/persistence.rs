//! Snapshot save/restore across surface rebinds and rotation changes.
//!
//! Box points are captured in screen space under whatever rotation was
//! active when they were drawn. Replaying those pixel coordinates after a
//! rotation change would draw the boxes in the wrong place, so snapshots
//! store every point in canonical zero-rotation space and restore maps
//! them back out under the rotation active at restore time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dragdraw_core::transform::{from_canonical, to_canonical};
use dragdraw_core::{CanvasError, DisplayInfo, Point, ScreenRotation};

use crate::model::DrawnBox;

use super::BoxCanvas;

/// Snapshot format version
const SNAPSHOT_FORMAT_VERSION: &str = "1.0";

/// One box with both corner points in canonical zero-rotation space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoxRecord {
    pub origin: Point,
    pub current: Point,
    #[serde(default)]
    pub rotation: f64,
}

/// Complete canvas snapshot.
///
/// Records are ordered: index = drawing order = z-order. An explicit
/// sequence replaces the indexed string keys of bundle-style persistence;
/// an empty sequence is a valid snapshot of an empty canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub version: String,
    /// Rotation active when the snapshot was taken. Diagnostic only:
    /// restore re-queries the display provider instead of trusting it.
    pub rotation: ScreenRotation,
    #[serde(default)]
    pub records: Vec<BoxRecord>,
}

impl CanvasSnapshot {
    /// Serializes the snapshot for a host bundle.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize canvas snapshot")
    }

    /// Deserializes a snapshot from a host bundle.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CanvasError::MalformedSnapshot {
                reason: e.to_string(),
            })
            .context("deserialize canvas snapshot")
    }
}

impl BoxCanvas {
    /// Captures every box in canonical space.
    ///
    /// A box mid-drag is included: it is already in the list. The
    /// diagnostic pointer angle is not saved; it has no meaning across
    /// sessions.
    pub fn snapshot(&self) -> CanvasSnapshot {
        let records = self
            .boxes
            .iter()
            .map(|b| BoxRecord {
                origin: to_canonical(b.origin, self.rotation, self.frame),
                current: to_canonical(b.current, self.rotation, self.frame),
                rotation: b.rotation,
            })
            .collect();

        CanvasSnapshot {
            version: SNAPSHOT_FORMAT_VERSION.to_string(),
            rotation: self.rotation,
            records,
        }
    }

    /// Rebuilds the box list from a snapshot.
    ///
    /// Re-queries the display provider for the rotation now active and
    /// re-measures the frame, then maps every record out of canonical
    /// space under that rotation. Boxes are rebuilt in original order with
    /// no live gesture.
    pub fn restore(&mut self, snapshot: &CanvasSnapshot, display: &dyn DisplayInfo) -> Result<()> {
        if snapshot.version != SNAPSHOT_FORMAT_VERSION {
            return Err(CanvasError::SnapshotVersion {
                found: snapshot.version.clone(),
                expected: SNAPSHOT_FORMAT_VERSION.to_string(),
            }
            .into());
        }

        self.attach(display);
        if snapshot.rotation != self.rotation {
            debug!(
                saved = %snapshot.rotation,
                current = %self.rotation,
                "restoring across a rotation change"
            );
        }

        self.boxes = snapshot
            .records
            .iter()
            .map(|r| DrawnBox {
                origin: from_canonical(r.origin, self.rotation, self.frame),
                current: from_canonical(r.current, self.rotation, self.frame),
                rotation: r.rotation,
            })
            .collect();
        self.active = None;
        self.request_redraw();
        Ok(())
    }
}
