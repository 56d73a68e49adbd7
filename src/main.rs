//! # txt2png
//!
//! Renders the lines of a text file onto an A4 page at 300 DPI and writes
//! the result to `out.png` in the current directory.
#![warn(missing_docs)]

use std::{io, path::Path};

use color_eyre::eyre::{self, WrapErr};

mod cli;

use cli::Options;

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    txt2png::convert(
        &opt.file,
        Path::new(txt2png::OUT_FILE),
        stdin.lock(),
        stdout.lock(),
    )
    .wrap_err_with(|| format!("failed to render '{}'", opt.file.display()))?;
    Ok(())
}
