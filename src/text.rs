//! # Reading the input text

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::info;

use crate::Error;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read all lines of the file at `path`
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(Error::io(path))?;
    let lines = lines_from(BufReader::new(file)).map_err(Error::io(path))?;
    info!("Read {} lines from '{}'", lines.len(), path.display());
    Ok(lines)
}

/// Split the reader into lines.
///
/// Line terminators (`\n` or `\r\n`) are not part of the result and a final
/// terminator does not start a new line. A byte order mark at the start
/// is dropped. Invalid UTF-8 is replaced with U+FFFD.
pub fn lines_from<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    if reader.fill_buf()?.starts_with(BOM) {
        reader.consume(BOM.len());
    }

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let mut line = &buf[..];
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        lines.push(String::from_utf8_lossy(line).into_owned());
    }
    Ok(lines)
}
