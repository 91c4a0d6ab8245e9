// src/document.rs
//
// File loader and writer around the line transformer.
//
// - Lines end at "\r\n", "\n" or a lone "\r"; each line keeps its own terminator
//   so passthrough output is byte-for-byte what was read.
// - Input must be valid UTF-8; output is written in order, truncating the target.

use memchr::memchr2;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::transform::transform_lines;

/// Line counts for one conversion, reported by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Split after every `\r\n`, `\n` or lone `\r`, keeping the terminator. A
/// trailing fragment without a terminator is its own line; empty text has no
/// lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    while let Some(p) = memchr2(b'\n', b'\r', &bytes[start..]) {
        let mut end = start + p + 1;
        if bytes[end - 1] == b'\r' && bytes.get(end) == Some(&b'\n') {
            end += 1;
        }
        lines.push(&text[start..end]); // safe: CR/LF are ASCII boundaries
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Read `path` as UTF-8 and split it into lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = split_lines(&text).into_iter().map(str::to_owned).collect();
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Create or truncate `path` and write `lines` to it in order.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut w = BufWriter::new(file);
    for line in lines {
        w.write_all(line.as_ref().as_bytes()).map_err(write_err)?;
    }
    w.flush().map_err(write_err)?;
    log::debug!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

/// Load `input`, convert it, and write the result to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<Summary> {
    if !input.is_file() {
        return Err(Error::MissingInput {
            path: input.to_path_buf(),
        });
    }
    let lines = load_lines(input)?;
    let html = transform_lines(&lines);
    write_lines(output, &html)?;
    Ok(Summary {
        lines_read: lines.len(),
        lines_written: html.len(),
    })
}
