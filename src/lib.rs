//! Canvascii Library
//!
//! Draws on a small ASCII canvas of at most 40 rows and 80 columns.
//! This crate provides:
//!
//! - `core`: Canvas model, shapes, plotters, ingestion
//! - `cli`: Command-line parsing, execution and output

pub mod cli;
pub mod core;

pub use crate::core::{Canvas, Pen, Point};
