//! Canvas errors
//!
//! Construction problems (allocation and ingestion) are recorded in
//! [`Diagnostics`] next to a best-effort canvas. Drawing problems abort the
//! single operation that raised them.

use super::canvas::{MAX_HEIGHT, MAX_WIDTH};

/// Error raised while building a canvas
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("wrong pixel value {value}")]
    WrongPixel { line: usize, col: usize, value: char },

    #[error("canvas is too high (max height: {})", MAX_HEIGHT)]
    TooHigh { height: usize },

    #[error("canvas is too wide (max width: {})", MAX_WIDTH)]
    TooWide { width: usize },

    #[error("canvas should be rectangular")]
    NonRectangular {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Ordered record of the errors raised while building a canvas
///
/// Later errors take precedence: [`Diagnostics::error`] reports the last one
/// recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<CanvasError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: CanvasError) {
        self.errors.push(error);
    }

    /// The error that takes precedence, if any was recorded
    pub fn error(&self) -> Option<&CanvasError> {
        self.errors.last()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanvasError> {
        self.errors.iter()
    }

    /// Turn the record into a result carrying the error that takes precedence
    pub fn into_result(mut self) -> Result<(), CanvasError> {
        match self.errors.pop() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Extend<CanvasError> for Diagnostics {
    fn extend<T: IntoIterator<Item = CanvasError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

/// A row or column outside the logical canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("row {row} is outside the canvas (height: {height})")]
    Row { row: i32, height: usize },

    #[error("column {col} is outside the canvas (width: {width})")]
    Column { col: i32, width: usize },
}

/// Degenerate or negative shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("rectangle size {height}x{width} must be at least 1x1")]
    EmptyRectangle { height: i32, width: i32 },

    #[error("rectangle far corner ({row},{col}) is negative")]
    NegativeCorner { row: i64, col: i64 },

    #[error("circle radius {radius} is negative")]
    NegativeRadius { radius: i32 },
}

/// Error from a single drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
