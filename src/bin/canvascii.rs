//! Canvascii
//!
//! Draws on an ASCII canvas read from stdin (or created with `-n`) and
//! prints the result on stdout.
//!
//! # Usage
//!
//! ```bash
//! # New 5x10 canvas with a red rectangle
//! canvascii -n 5,10 -p 1 -r 1,1,3,8
//!
//! # Draw a circle on an existing canvas, colored output
//! canvascii -c 5,5,3 -k < canvas.txt
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use canvascii::cli::{self, USAGE};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = std::env::args().skip(1);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli::run(args, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut stderr = io::stderr().lock();
            // Nothing left to report to if stderr itself is gone.
            let _ = write!(stderr, "Error: {}\n{}", e, USAGE);
            ExitCode::from(e.exit_code())
        }
    }
}
