//! Command-line front end
//!
//! Parses the arguments into a [`Command`] before any input is read, then
//! builds the canvas, applies the drawing requests in order and writes the
//! result.

pub mod output;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::core::{
    ingest_reader, Canvas, CanvasError, DrawError, DrawRequest, Pen, Point, Shape, MAX_HEIGHT,
    MAX_WIDTH,
};

pub use output::{colorize, write_canvas, OutputFormat};

/// Help text printed when no argument is given and after every error
pub const USAGE: &str = "\
Usage: canvascii [-n HEIGHT,WIDTH] [-s] [-k] [-j] [-p CHAR]
          [-h ROW] [-v COL] [-r ROW,COL,HEIGHT,WIDTH]
          [-l ROW1,COL1,ROW2,COL2] [-c ROW,COL,RADIUS]
Draws on an ASCII canvas. The canvas is provided on stdin and
the result is printed on stdout. The dimensions of the canvas
are limited to at most 40 rows and at most 80 columns.

If no argument is provided, the program prints this help and exit.

Canvas options:
  -n HEIGHT,WIDTH           Creates a new empty canvas of HEIGHT rows and
                            WIDTH columns. Ignores stdin.
  -s                        Shows the canvas and exit. Must be the first
                            option; the options after it are ignored.
  -k                        Enables colored output. Replaces characters
                            between 0 and 7 by their corresponding ANSI
                            colors:
                              0: black  1: red      2: green  3: yellow
                              4: blue   5: magenta  6: cyan   7: white
  -j                        Prints the canvas as a JSON snapshot.

Drawing options:
  -p CHAR                   Sets the pen to CHAR. Allowed pens are
                            0, 1, 2, 3, 4, 5, 6 or 7. Default pen
                            is 7.
  -h ROW                    Draws an horizontal line on row ROW.
  -v COL                    Draws a vertical line on column COL.
  -r ROW,COL,HEIGHT,WIDTH   Draws a rectangle of dimension HEIGHTxWIDTH
                            with top left corner at (ROW,COL).
  -l ROW1,COL1,ROW2,COL2    Draws a discrete segment from (ROW1,COL1) to
                            (ROW2,COL2) with Bresenham's algorithm.
  -c ROW,COL,RADIUS         Draws a circle centered at (ROW,COL) of
                            radius RADIUS with the midpoint algorithm.
";

/// Error type for command-line runs
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing value with option {0}")]
    MissingValue(&'static str),

    #[error("incorrect value with option {0}")]
    InvalidValue(&'static str),

    #[error("unrecognized option {0}")]
    UnrecognizedOption(String),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error("incorrect value with option {option}")]
    Draw {
        option: &'static str,
        #[source]
        source: DrawError,
    },

    #[error("failed to read canvas: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write canvas: {0}")]
    Write(#[source] io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Canvas(CanvasError::WrongPixel { .. }) => 1,
            CliError::Canvas(CanvasError::TooHigh { .. }) => 2,
            CliError::Canvas(CanvasError::TooWide { .. }) => 3,
            CliError::Canvas(CanvasError::NonRectangular { .. }) => 4,
            CliError::UnrecognizedOption(_) => 5,
            CliError::MissingValue(_) => 6,
            CliError::InvalidValue(_) | CliError::Draw { .. } => 7,
            CliError::Read(_) | CliError::Write(_) | CliError::Json(_) => 8,
        }
    }
}

/// Result type for command-line runs
pub type CliResult<T> = Result<T, CliError>;

/// Where the canvas comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A blank canvas of the given size
    Blank { height: i32, width: i32 },
    /// Rows read from the input stream
    Input,
}

/// A drawing request and the option that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub option: &'static str,
    pub request: DrawRequest,
}

/// Everything needed to produce one canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: Source,
    pub steps: Vec<Step>,
    pub format: OutputFormat,
}

/// What a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the usage text
    Usage,
    /// Print the input canvas unchanged
    Show,
    /// Build, draw and print a canvas
    Draw(Invocation),
}

/// Parse the arguments (without the program name)
pub fn parse_args<I, S>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = args.into_iter().collect();
    let mut args = owned.iter().map(|arg| arg.as_ref());

    let mut invocation = Invocation {
        source: Source::Input,
        steps: Vec::new(),
        format: OutputFormat::Plain,
    };
    let mut pen = Pen::DEFAULT;
    let mut first = true;

    while let Some(arg) = args.next() {
        match arg {
            "-s" if first => return Ok(Command::Show),
            "-s" => {}
            "-k" => invocation.format = OutputFormat::Color,
            "-j" => invocation.format = OutputFormat::Json,
            "-n" => {
                let [height, width] = numbers::<2>("-n", args.next())?;
                if !(0..=MAX_HEIGHT as i32).contains(&height)
                    || !(0..=MAX_WIDTH as i32).contains(&width)
                {
                    return Err(CliError::InvalidValue("-n"));
                }
                invocation.source = Source::Blank { height, width };
            }
            "-p" => {
                let value = args.next().ok_or(CliError::MissingValue("-p"))?;
                pen = parse_pen(value).ok_or(CliError::InvalidValue("-p"))?;
            }
            "-h" => {
                let [row] = numbers::<1>("-h", args.next())?;
                invocation.push("-h", Shape::Horizontal { row }, pen);
            }
            "-v" => {
                let [col] = numbers::<1>("-v", args.next())?;
                invocation.push("-v", Shape::Vertical { col }, pen);
            }
            "-r" => {
                let [row, col, height, width] = numbers::<4>("-r", args.next())?;
                let shape = Shape::Rectangle {
                    top_left: Point::new(row, col),
                    height,
                    width,
                };
                invocation.push("-r", shape, pen);
            }
            "-l" => {
                let [row1, col1, row2, col2] = numbers::<4>("-l", args.next())?;
                let shape = Shape::Segment {
                    from: Point::new(row1, col1),
                    to: Point::new(row2, col2),
                };
                invocation.push("-l", shape, pen);
            }
            "-c" => {
                let [row, col, radius] = numbers::<3>("-c", args.next())?;
                if radius < 0 {
                    return Err(CliError::InvalidValue("-c"));
                }
                let shape = Shape::Circle {
                    center: Point::new(row, col),
                    radius,
                };
                invocation.push("-c", shape, pen);
            }
            other => return Err(CliError::UnrecognizedOption(other.to_string())),
        }
        first = false;
    }

    if first {
        return Ok(Command::Usage);
    }
    debug!(?invocation, "parsed arguments");
    Ok(Command::Draw(invocation))
}

impl Invocation {
    fn push(&mut self, option: &'static str, shape: Shape, pen: Pen) {
        self.steps.push(Step {
            option,
            request: DrawRequest::new(shape, pen),
        });
    }

    /// Build the canvas and apply every step in order
    ///
    /// `input` is only read when the canvas comes from the input stream.
    pub fn execute<R: BufRead>(&self, input: R) -> CliResult<Canvas> {
        let mut canvas = match self.source {
            Source::Blank { height, width } => {
                let (canvas, diagnostics) = Canvas::blank(height, width);
                diagnostics.into_result()?;
                canvas
            }
            Source::Input => read_canvas(input)?,
        };

        for step in &self.steps {
            canvas.apply(&step.request).map_err(|source| {
                warn!(option = step.option, error = %source, "drawing failed");
                CliError::Draw {
                    option: step.option,
                    source,
                }
            })?;
        }
        Ok(canvas)
    }
}

/// Read a canvas from `input`, failing on any recorded problem
pub fn read_canvas<R: BufRead>(input: R) -> CliResult<Canvas> {
    let (canvas, diagnostics) = ingest_reader(input).map_err(CliError::Read)?;
    diagnostics.into_result()?;
    Ok(canvas)
}

/// Run a whole command line against the given streams
pub fn run<I, S, R, W>(args: I, input: R, mut output: W) -> CliResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    match parse_args(args)? {
        Command::Usage => output
            .write_all(USAGE.as_bytes())
            .map_err(CliError::Write),
        Command::Show => {
            let canvas = read_canvas(input)?;
            write_canvas(&mut output, &canvas, OutputFormat::Plain)
        }
        Command::Draw(invocation) => {
            let canvas = invocation.execute(input)?;
            write_canvas(&mut output, &canvas, invocation.format)
        }
    }
}

/// Parse exactly `N` comma-separated integers
fn numbers<const N: usize>(option: &'static str, value: Option<&str>) -> CliResult<[i32; N]> {
    let value = value.ok_or(CliError::MissingValue(option))?;
    let mut parsed = [0; N];
    let mut parts = value.split(',');
    for slot in &mut parsed {
        *slot = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .ok_or(CliError::InvalidValue(option))?;
    }
    if parts.next().is_some() {
        return Err(CliError::InvalidValue(option));
    }
    Ok(parsed)
}

/// A pen given on the command line: a single digit `0`-`7`
fn parse_pen(value: &str) -> Option<Pen> {
    let mut chars = value.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    c.to_digit(8).and_then(|d| Pen::from_digit(d as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeError;

    fn parse(args: &[&str]) -> CliResult<Command> {
        parse_args(args.iter().copied())
    }

    fn invocation(args: &[&str]) -> Invocation {
        match parse(args) {
            Ok(Command::Draw(invocation)) => invocation,
            other => panic!("expected a drawing invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_no_arguments_prints_usage() {
        assert!(matches!(parse(&[]), Ok(Command::Usage)));
    }

    #[test]
    fn test_show_must_come_first() {
        assert!(matches!(parse(&["-s", "-k"]), Ok(Command::Show)));
        let invocation = invocation(&["-k", "-s"]);
        assert_eq!(invocation.format, OutputFormat::Color);
        assert!(invocation.steps.is_empty());
    }

    #[test]
    fn test_blank_source() {
        let invocation = invocation(&["-n", "5,10"]);
        assert_eq!(
            invocation.source,
            Source::Blank {
                height: 5,
                width: 10
            }
        );
        assert_eq!(invocation.format, OutputFormat::Plain);
    }

    #[test]
    fn test_blank_source_limits() {
        assert!(matches!(
            parse(&["-n", "41,10"]),
            Err(CliError::InvalidValue("-n"))
        ));
        assert!(matches!(
            parse(&["-n", "10,81"]),
            Err(CliError::InvalidValue("-n"))
        ));
        assert!(matches!(
            parse(&["-n", "-1,10"]),
            Err(CliError::InvalidValue("-n"))
        ));
        assert!(matches!(parse(&["-n"]), Err(CliError::MissingValue("-n"))));
        assert!(matches!(
            parse(&["-n", "5"]),
            Err(CliError::InvalidValue("-n"))
        ));
        assert!(matches!(
            parse(&["-n", "5,5,5"]),
            Err(CliError::InvalidValue("-n"))
        ));
    }

    #[test]
    fn test_pen_applies_to_following_steps() {
        let invocation = invocation(&["-n", "5,5", "-h", "1", "-p", "3", "-v", "2"]);
        let pens: Vec<char> = invocation
            .steps
            .iter()
            .map(|s| s.request.pen.as_char())
            .collect();
        assert_eq!(pens, vec!['7', '3']);
        assert_eq!(invocation.steps[1].option, "-v");
    }

    #[test]
    fn test_invalid_pens() {
        for value in ["8", "a", "12", "", "."] {
            assert!(
                matches!(parse(&["-p", value]), Err(CliError::InvalidValue("-p"))),
                "pen {:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_shape_values() {
        let invocation = invocation(&["-r", "1,2,3,4", "-l", "0,0,4,-4", "-c", "5,5,3"]);
        let shapes: Vec<Shape> = invocation.steps.iter().map(|s| s.request.shape).collect();
        assert_eq!(
            shapes,
            vec![
                Shape::Rectangle {
                    top_left: Point::new(1, 2),
                    height: 3,
                    width: 4
                },
                Shape::Segment {
                    from: Point::new(0, 0),
                    to: Point::new(4, -4)
                },
                Shape::Circle {
                    center: Point::new(5, 5),
                    radius: 3
                },
            ]
        );
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            parse(&["-h", "x"]),
            Err(CliError::InvalidValue("-h"))
        ));
        assert!(matches!(
            parse(&["-r", "1,2,3"]),
            Err(CliError::InvalidValue("-r"))
        ));
        assert!(matches!(
            parse(&["-c", "1,1,-1"]),
            Err(CliError::InvalidValue("-c"))
        ));
        assert!(matches!(parse(&["-l"]), Err(CliError::MissingValue("-l"))));
    }

    #[test]
    fn test_unrecognized_option() {
        match parse(&["-n", "3,3", "-x"]) {
            Err(CliError::UnrecognizedOption(option)) => assert_eq!(option, "-x"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_execute_reports_failing_option() {
        let invocation = invocation(&["-n", "3,3", "-h", "1", "-r", "0,0,0,2"]);
        let err = invocation.execute(io::empty()).unwrap_err();
        assert_eq!(err.to_string(), "incorrect value with option -r");
        assert!(matches!(
            err,
            CliError::Draw {
                option: "-r",
                source: DrawError::Shape(ShapeError::EmptyRectangle { .. })
            }
        ));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_execute_reads_input_canvas() {
        let invocation = invocation(&["-v", "0"]);
        let canvas = invocation.execute("...\n...\n".as_bytes()).unwrap();
        assert_eq!(canvas.render(), vec!["7..", "7.."]);
    }

    #[test]
    fn test_execute_rejects_bad_input_canvas() {
        let invocation = invocation(&["-h", "0"]);
        let err = invocation.execute("...\n..\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "canvas should be rectangular");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::MissingValue("-n").exit_code(), 6);
        assert_eq!(CliError::UnrecognizedOption("-z".into()).exit_code(), 5);
        assert_eq!(
            CliError::Canvas(CanvasError::TooHigh { height: 41 }).exit_code(),
            2
        );
        assert_eq!(
            CliError::Canvas(CanvasError::WrongPixel {
                line: 1,
                col: 1,
                value: '#'
            })
            .exit_code(),
            1
        );
    }
}
