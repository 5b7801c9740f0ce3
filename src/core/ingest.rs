//! Canvas ingestion
//!
//! Builds a canvas from a stream of text rows. The last row read sets the
//! width, each row is compared with the one before it, and rows or columns
//! past the capacity are dropped. Problems are recorded in [`Diagnostics`]
//! in the order non-rectangular, wrong pixel, too high, too wide; the last
//! one recorded is the one reported.

use std::io::{self, BufRead};

use tracing::debug;

use super::canvas::{clamp_extent, Canvas};
use super::error::{CanvasError, Diagnostics};
use super::pixel::is_pixel;

/// Build a canvas from text rows (without line terminators)
///
/// Valid pixels are copied into the canvas. Cells past the end of a short
/// row, and cells holding a rejected character, are left as background.
pub fn ingest<I, S>(lines: I) -> (Canvas, Diagnostics)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut canvas = Canvas::with_extent(0, 0);
    let mut non_rectangular = None;
    let mut wrong_pixel = None;
    let mut line_count = 0usize;
    let mut char_count = 0usize;

    for (row, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        line_count += 1;

        let len = line.chars().count();
        if char_count != 0 && len != char_count && non_rectangular.is_none() {
            non_rectangular = Some(CanvasError::NonRectangular {
                line: row + 1,
                expected: char_count,
                found: len,
            });
        }
        char_count = len;

        for (col, c) in line.chars().enumerate() {
            if is_pixel(c) {
                canvas.store(row, col, c);
            } else if wrong_pixel.is_none() {
                wrong_pixel = Some(CanvasError::WrongPixel {
                    line: row + 1,
                    col: col + 1,
                    value: c,
                });
            }
        }
    }

    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(non_rectangular);
    diagnostics.extend(wrong_pixel);
    let (height, width) = clamp_extent(line_count, char_count, &mut diagnostics);
    canvas.set_extent(height, width);

    debug!(
        lines = line_count,
        width = char_count,
        errors = diagnostics.len(),
        "ingested canvas"
    );
    (canvas, diagnostics)
}

/// Read every row from `reader` and build a canvas from them
pub fn ingest_reader<R: BufRead>(reader: R) -> io::Result<(Canvas, Diagnostics)> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(ingest(lines))
}
