//! Drawing requests
//!
//! A shape together with the pen to draw it with, applied to a canvas in
//! one step.

use tracing::debug;

use super::canvas::{Canvas, Point};
use super::error::DrawError;
use super::pixel::Pen;

/// The shapes a canvas can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A full row
    Horizontal { row: i32 },
    /// A full column
    Vertical { col: i32 },
    /// A rectangle outline
    Rectangle {
        top_left: Point,
        height: i32,
        width: i32,
    },
    /// A Bresenham segment
    Segment { from: Point, to: Point },
    /// A midpoint circle
    Circle { center: Point, radius: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    pub shape: Shape,
    pub pen: Pen,
}

impl DrawRequest {
    pub fn new(shape: Shape, pen: Pen) -> Self {
        Self { shape, pen }
    }
}

impl Canvas {
    /// Apply a drawing request
    ///
    /// The request's pen becomes the canvas pen. On error the canvas pixels
    /// are left untouched.
    pub fn apply(&mut self, request: &DrawRequest) -> Result<(), DrawError> {
        debug!(?request, "applying draw request");
        let pen = request.pen;
        self.set_pen(pen);

        match request.shape {
            Shape::Horizontal { row } => self.draw_horizontal(row, pen)?,
            Shape::Vertical { col } => self.draw_vertical(col, pen)?,
            Shape::Rectangle {
                top_left,
                height,
                width,
            } => self.draw_rectangle(top_left, height, width, pen)?,
            Shape::Segment { from, to } => self.draw_segment(from, to, pen),
            Shape::Circle { center, radius } => self.draw_circle(center, radius, pen)?,
        }
        Ok(())
    }
}
