//! Canvas snapshots
//!
//! A serializable copy of a canvas, used for JSON output and for comparing
//! drawing results in tests.

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::pixel::Pen;

/// A snapshot of a canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub height: usize,
    pub width: usize,
    /// Pen in use when the snapshot was taken
    pub pen: Pen,
    /// Logical rows, top to bottom
    pub rows: Vec<String>,
}

impl Snapshot {
    /// Capture the current canvas state
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Snapshot {
            height: canvas.height(),
            width: canvas.width(),
            pen: canvas.pen(),
            rows: canvas.render(),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The rows as plain text, one line per row
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(self.height * (self.width + 1));
        for row in &self.rows {
            result.push_str(row);
            result.push('\n');
        }
        result
    }
}
