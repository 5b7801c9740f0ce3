//! Canvas Core Module
//!
//! The canvas model and everything that draws on it:
//! - Canvas grid with fixed capacity and a logical extent
//! - Pixel alphabet and pen
//! - Lines, rectangles, Bresenham segments and midpoint circles
//! - Ingestion and validation of canvases read from text
//! - Serializable snapshots
//!
//! Every write goes through a bounds-checked accessor, so no drawing
//! operation can touch a cell outside the logical grid.

mod canvas;
mod circle;
mod error;
mod ingest;
mod pixel;
mod request;
mod segment;
mod shapes;
mod snapshot;

pub use canvas::{Canvas, Point, MAX_HEIGHT, MAX_WIDTH};
pub use circle::midpoint_offsets;
pub use error::{BoundsError, CanvasError, Diagnostics, DrawError, ShapeError};
pub use ingest::{ingest, ingest_reader};
pub use pixel::{is_pixel, Color, InvalidPen, Pen, BACKGROUND};
pub use request::{DrawRequest, Shape};
pub use segment::SegmentPoints;
pub use snapshot::Snapshot;
