//! Lines and rectangles
//!
//! Axis-aligned shapes drawn with a pen. Lines must lie on the canvas;
//! rectangles may overhang it and are clipped.

use tracing::debug;

use super::canvas::{Canvas, Point};
use super::error::{BoundsError, ShapeError};
use super::pixel::Pen;

impl Canvas {
    /// Fill row `row` with the pen
    pub fn draw_horizontal(&mut self, row: i32, pen: Pen) -> Result<(), BoundsError> {
        if !(0..self.height() as i64).contains(&i64::from(row)) {
            return Err(BoundsError::Row {
                row,
                height: self.height(),
            });
        }
        for col in 0..self.width() as i64 {
            self.plot(i64::from(row), col, pen);
        }
        debug!(row, %pen, "drew horizontal line");
        Ok(())
    }

    /// Fill column `col` with the pen
    pub fn draw_vertical(&mut self, col: i32, pen: Pen) -> Result<(), BoundsError> {
        if !(0..self.width() as i64).contains(&i64::from(col)) {
            return Err(BoundsError::Column {
                col,
                width: self.width(),
            });
        }
        for row in 0..self.height() as i64 {
            self.plot(row, i64::from(col), pen);
        }
        debug!(col, %pen, "drew vertical line");
        Ok(())
    }

    /// Draw the outline of a `height` x `width` box whose top-left corner is
    /// `top_left`
    ///
    /// Border cells outside the canvas are skipped.
    pub fn draw_rectangle(
        &mut self,
        top_left: Point,
        height: i32,
        width: i32,
        pen: Pen,
    ) -> Result<(), ShapeError> {
        if height < 1 || width < 1 {
            return Err(ShapeError::EmptyRectangle { height, width });
        }

        let top = i64::from(top_left.row);
        let left = i64::from(top_left.col);
        let bottom = top + i64::from(height) - 1;
        let right = left + i64::from(width) - 1;
        if bottom < 0 || right < 0 {
            return Err(ShapeError::NegativeCorner {
                row: bottom,
                col: right,
            });
        }

        // Only the part of the box that overlaps the canvas can be written.
        let rows = top.max(0)..=bottom.min(self.height() as i64 - 1);
        let cols = left.max(0)..=right.min(self.width() as i64 - 1);
        for row in rows {
            for col in cols.clone() {
                if row == top || row == bottom || col == left || col == right {
                    self.plot(row, col, pen);
                }
            }
        }
        debug!(%top_left, height, width, %pen, "drew rectangle");
        Ok(())
    }
}
