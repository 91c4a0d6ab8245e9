//! Convert a small Markdown subset (ATX headings and flat `- ` bullet lists)
//! to HTML, line by line. Every other line is passed through untouched.

pub mod document;
pub mod error;
pub mod transform;

pub use document::{convert_file, load_lines, split_lines, write_lines, Summary};
pub use error::{Error, Result};
pub use transform::{classify, convert_str, transform_lines, LineKind, LineTransformer};
