//! # Asking before overwriting

use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::Error;

/// Ask whether `path` should be replaced.
///
/// Reads a single line from `input`; the answer is yes if it starts with
/// `y` or `Y`. An empty answer or the end of input is a no.
pub fn confirm_overwrite<R, W>(path: &Path, mut input: R, output: &mut W) -> Result<bool, Error>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "{} already exists. Overwrite? [y/N]: ",
        path.display()
    )
    .and_then(|()| output.flush())
    .map_err(Error::Console)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Console)?;
    let yes = is_yes(&answer);
    if !yes {
        log::warn!("Keeping '{}'", path.display());
    }
    Ok(yes)
}

/// Check whether `answer` is affirmative
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().chars().next(), Some('y' | 'Y'))
}
