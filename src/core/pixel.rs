//! Canvas Pixels
//!
//! The pixel alphabet of a canvas: the background character `.` and the
//! eight color digits `0`-`7`, plus the pen that selects one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Background pixel
pub const BACKGROUND: char = '.';

/// Check whether a character belongs to the pixel alphabet
pub fn is_pixel(c: char) -> bool {
    c == BACKGROUND || ('0'..='7').contains(&c)
}

/// The character used by drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Pen(char);

/// Error returned when a character cannot be used as a pen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid pen {0:?} (allowed: '.', '0'-'7')")]
pub struct InvalidPen(pub char);

impl Pen {
    /// Pen that erases back to the background
    pub const BACKGROUND: Pen = Pen(BACKGROUND);
    /// Pen used when none has been selected (white)
    pub const DEFAULT: Pen = Pen('7');

    /// Create a pen, rejecting characters outside the pixel alphabet
    pub fn new(c: char) -> Result<Self, InvalidPen> {
        if is_pixel(c) {
            Ok(Pen(c))
        } else {
            Err(InvalidPen(c))
        }
    }

    /// Create a color pen from a digit in `0..=7`
    pub fn from_digit(digit: u8) -> Option<Self> {
        (digit <= 7).then(|| Pen(char::from(b'0' + digit)))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// The color this pen paints with, `None` for the background pen
    pub fn color(self) -> Option<Color> {
        Color::from_pixel(self.0)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen::DEFAULT
    }
}

impl TryFrom<char> for Pen {
    type Error = InvalidPen;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Pen::new(c)
    }
}

impl From<Pen> for char {
    fn from(pen: Pen) -> char {
        pen.0
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight standard ANSI colors a digit pixel stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Map a digit pixel to its color; the background has none
    pub fn from_pixel(c: char) -> Option<Self> {
        let index = c.to_digit(10)?;
        Self::ALL.get(index as usize).copied()
    }

    /// ANSI palette index (0-7)
    pub fn ansi_index(self) -> u8 {
        self as u8
    }
}
