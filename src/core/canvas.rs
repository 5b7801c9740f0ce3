//! Canvas Grid
//!
//! A fixed-capacity 2D grid of pixel characters. Only the top-left
//! `height` x `width` sub-grid is in use; every write is checked against it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{CanvasError, Diagnostics};
use super::pixel::{Pen, BACKGROUND};

/// Maximum number of rows a canvas can hold
pub const MAX_HEIGHT: usize = 40;
/// Maximum number of columns a canvas can hold
pub const MAX_WIDTH: usize = 80;

/// A position on the canvas
///
/// Coordinates are signed so that callers can describe shapes that reach
/// past the edges; they are clipped or rejected by each operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The canvas - a bounded grid of pixels and the active pen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel storage, always at full capacity
    pixels: Box<[[char; MAX_WIDTH]; MAX_HEIGHT]>,
    /// Rows in use
    height: usize,
    /// Columns in use
    width: usize,
    /// Pen used by the last drawing operation
    pen: Pen,
}

impl Canvas {
    /// Allocate a blank canvas
    ///
    /// Dimensions above the capacity are clamped and reported; negative
    /// dimensions are treated as zero.
    pub fn blank(height: i32, width: i32) -> (Self, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let height = usize::try_from(height).unwrap_or(0);
        let width = usize::try_from(width).unwrap_or(0);
        let (height, width) = clamp_extent(height, width, &mut diagnostics);

        debug!(height, width, "allocated blank canvas");
        (Self::with_extent(height, width), diagnostics)
    }

    /// A background-filled canvas of an already clamped size
    pub(crate) fn with_extent(height: usize, width: usize) -> Self {
        debug_assert!(height <= MAX_HEIGHT && width <= MAX_WIDTH);
        Self {
            pixels: Box::new([[BACKGROUND; MAX_WIDTH]; MAX_HEIGHT]),
            height,
            width,
            pen: Pen::DEFAULT,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    /// Whether a position lies inside the logical grid
    pub fn contains(&self, point: Point) -> bool {
        self.index(i64::from(point.row), i64::from(point.col))
            .is_some()
    }

    /// Get the pixel at a position inside the logical grid
    pub fn get(&self, point: Point) -> Option<char> {
        self.index(i64::from(point.row), i64::from(point.col))
            .map(|(row, col)| self.pixels[row][col])
    }

    /// Get the pixels of one logical row
    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.height).then(|| &self.pixels[row][..self.width])
    }

    /// Write a pixel if the position is inside the logical grid
    ///
    /// Returns whether the pixel was written.
    pub(crate) fn plot(&mut self, row: i64, col: i64, pen: Pen) -> bool {
        match self.index(row, col) {
            Some((row, col)) => {
                self.pixels[row][col] = pen.as_char();
                true
            }
            None => false,
        }
    }

    /// Store a raw pixel during ingestion; positions past capacity are dropped
    pub(crate) fn store(&mut self, row: usize, col: usize, pixel: char) {
        if let Some(cell) = self.pixels.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = pixel;
        }
    }

    /// Set the logical extent after ingestion
    pub(crate) fn set_extent(&mut self, height: usize, width: usize) {
        debug_assert!(height <= MAX_HEIGHT && width <= MAX_WIDTH);
        self.height = height;
        self.width = width;
    }

    /// Render the logical grid as text rows (no color)
    pub fn render(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| self.pixels[row][..self.width].iter().collect())
            .collect()
    }

    fn index(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        Some((row, col))
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Clamp a requested extent to the canvas capacity, recording each overflow
pub(crate) fn clamp_extent(
    height: usize,
    width: usize,
    diagnostics: &mut Diagnostics,
) -> (usize, usize) {
    let mut clamped = (height, width);
    if height > MAX_HEIGHT {
        warn!(height, max = MAX_HEIGHT, "canvas too high, clamping");
        diagnostics.record(CanvasError::TooHigh { height });
        clamped.0 = MAX_HEIGHT;
    }
    if width > MAX_WIDTH {
        warn!(width, max = MAX_WIDTH, "canvas too wide, clamping");
        diagnostics.record(CanvasError::TooWide { width });
        clamped.1 = MAX_WIDTH;
    }
    clamped
}
