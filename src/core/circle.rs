//! Midpoint circles
//!
//! Circles are rasterized one octant at a time and mirrored into the other
//! seven. Points outside the canvas are dropped.

use tracing::debug;

use super::canvas::{Canvas, Point};
use super::error::ShapeError;
use super::pixel::Pen;

/// Visit the offsets (relative to the center) of a midpoint circle
///
/// The four axis extrema come first, then eight mirrored points per step
/// of the first octant. Offsets on the diagonals may be visited twice.
pub fn midpoint_offsets(radius: u32, mut visit: impl FnMut(i64, i64)) {
    let radius = i64::from(radius);
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    visit(0, radius);
    visit(0, -radius);
    visit(radius, 0);
    visit(-radius, 0);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        visit(x, y);
        visit(-x, y);
        visit(x, -y);
        visit(-x, -y);
        visit(y, x);
        visit(-y, x);
        visit(y, -x);
        visit(-y, -x);
    }
}

impl Canvas {
    /// Draw a circle of `radius` around `center`
    pub fn draw_circle(&mut self, center: Point, radius: i32, pen: Pen) -> Result<(), ShapeError> {
        let radius = u32::try_from(radius).map_err(|_| ShapeError::NegativeRadius { radius })?;

        let row = i64::from(center.row);
        let col = i64::from(center.col);
        midpoint_offsets(radius, |d_row, d_col| {
            self.plot(row + d_row, col + d_col, pen);
        });
        debug!(%center, radius, %pen, "drew circle");
        Ok(())
    }
}
