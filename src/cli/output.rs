//! Canvas output
//!
//! Writes a finished canvas as plain rows, as ANSI-colored cells or as a
//! JSON snapshot.

use std::io::Write;

use crate::core::{Canvas, Color, Snapshot};

use super::{CliError, CliResult};

/// How the canvas is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The pixel characters as they are
    #[default]
    Plain,
    /// Each pixel as a colored blank cell
    Color,
    /// A pretty-printed JSON snapshot
    Json,
}

/// Encode one pixel as an ANSI background-colored cell
///
/// Digits become `ESC[4<d>m` + space + `ESC[0m`; the background pixel stays
/// an uncolored space.
pub fn colorize(pixel: char) -> String {
    match Color::from_pixel(pixel) {
        Some(color) => format!("\x1b[4{}m \x1b[0m", color.ansi_index()),
        None => " ".to_string(),
    }
}

/// Write `canvas` to `out` in the requested format
pub fn write_canvas<W: Write>(mut out: W, canvas: &Canvas, format: OutputFormat) -> CliResult<()> {
    let text = match format {
        OutputFormat::Plain => canvas.to_string(),
        OutputFormat::Color => {
            let mut text = String::new();
            for row in canvas.render() {
                for pixel in row.chars() {
                    text.push_str(&colorize(pixel));
                }
                text.push('\n');
            }
            text
        }
        OutputFormat::Json => {
            let mut json = Snapshot::from_canvas(canvas).to_json()?;
            json.push('\n');
            json
        }
    };

    out.write_all(text.as_bytes()).map_err(CliError::Write)?;
    out.flush().map_err(CliError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pen, Point};

    fn written(canvas: &Canvas, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_canvas(&mut out, canvas, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_colorize() {
        assert_eq!(colorize('1'), "\x1b[41m \x1b[0m");
        assert_eq!(colorize('7'), "\x1b[47m \x1b[0m");
        assert_eq!(colorize('.'), " ");
    }

    #[test]
    fn test_plain_output() {
        let (mut canvas, _) = Canvas::blank(2, 3);
        canvas.draw_horizontal(1, Pen::new('2').unwrap()).unwrap();
        assert_eq!(written(&canvas, OutputFormat::Plain), "...\n222\n");
    }

    #[test]
    fn test_color_output() {
        let (mut canvas, _) = Canvas::blank(1, 2);
        canvas.draw_segment(Point::new(0, 1), Point::new(0, 1), Pen::new('4').unwrap());
        assert_eq!(written(&canvas, OutputFormat::Color), " \x1b[44m \x1b[0m\n");
    }

    #[test]
    fn test_json_output() {
        let (canvas, _) = Canvas::blank(1, 2);
        let json = written(&canvas, OutputFormat::Json);
        let snapshot = Snapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.rows, vec![".."]);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_empty_canvas_writes_nothing() {
        let (canvas, _) = Canvas::blank(0, 0);
        assert_eq!(written(&canvas, OutputFormat::Plain), "");
        assert_eq!(written(&canvas, OutputFormat::Color), "");
    }
}
