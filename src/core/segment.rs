//! Bresenham segments
//!
//! Integer line rasterization valid in every octant. Points that fall
//! outside the canvas are skipped; drawing a segment never fails.

use tracing::{debug, trace};

use super::canvas::{Canvas, Point};
use super::pixel::Pen;

/// Iterator over the discrete points of a segment, endpoints included
///
/// Visits exactly `max(|Δrow|, |Δcol|) + 1` points, one per unit step along
/// the major axis.
#[derive(Debug, Clone)]
pub struct SegmentPoints {
    current: Point,
    end: Point,
    /// Distance along rows (non-negative)
    d_row: i64,
    /// Negated distance along columns (non-positive)
    d_col: i64,
    step_row: i32,
    step_col: i32,
    err: i64,
    done: bool,
}

impl SegmentPoints {
    pub fn new(from: Point, to: Point) -> Self {
        let d_row = (i64::from(to.row) - i64::from(from.row)).abs();
        let d_col = -(i64::from(to.col) - i64::from(from.col)).abs();
        Self {
            current: from,
            end: to,
            d_row,
            d_col,
            step_row: if from.row < to.row { 1 } else { -1 },
            step_col: if from.col < to.col { 1 } else { -1 },
            err: d_row + d_col,
            done: false,
        }
    }
}

impl Iterator for SegmentPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 >= self.d_col {
            if self.current.row == self.end.row {
                self.done = true;
                return Some(point);
            }
            self.err += self.d_col;
            self.current.row += self.step_row;
        }
        if e2 <= self.d_row {
            if self.current.col == self.end.col {
                self.done = true;
                return Some(point);
            }
            self.err += self.d_row;
            self.current.col += self.step_col;
        }

        Some(point)
    }
}

impl Canvas {
    /// Draw a discrete segment from `from` to `to`
    pub fn draw_segment(&mut self, from: Point, to: Point, pen: Pen) {
        let mut plotted = 0usize;
        for point in SegmentPoints::new(from, to) {
            if self.plot(i64::from(point.row), i64::from(point.col), pen) {
                plotted += 1;
            } else {
                trace!(%point, "segment point outside canvas");
            }
        }
        debug!(%from, %to, %pen, plotted, "drew segment");
    }
}
