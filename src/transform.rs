// src/transform.rs
//
// Line transformer: Markdown subset → HTML, one line at a time.
//
// - ATX headings: 1–6 '#' then exactly one space → <hN>content</hN>\n, N being
//   the number of '#'. Seven or more '#' is not a heading. The content is
//   everything after that space up to, but not including, the line terminator
//   ("\n", "\r\n" or a lone "\r").
// - List items: lines starting with "- " → <li>trimmed</li>\n. A run of items
//   is wrapped in a single <ul>\n ... </ul>\n pair.
// - Anything else is copied verbatim, terminator and all, after closing an open
//   list.
// - Generated tags always end in "\n"; passthrough lines keep whatever they had.
// - No escaping, no inline formatting, no nesting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::split_lines;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) (.*)").unwrap());

const LIST_PREFIX: &str = "- ";

/* ============================ Classification ============================ */

/// What a single source line turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, content: &'a str },
    /// Item text with the `- ` marker removed and surrounding whitespace trimmed.
    ListItem(&'a str),
    Other,
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

/// Classify one line. Heading wins over list item; first match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADING.captures(strip_terminator(line)) {
        let hashes = caps.get(1).map_or("", |m| m.as_str());
        let content = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Heading {
            level: hashes.len() as u8,
            content,
        };
    }
    if let Some(rest) = line.strip_prefix(LIST_PREFIX) {
        return LineKind::ListItem(rest.trim());
    }
    LineKind::Other
}

/* ============================== Transformer ============================= */

/// Carries the open-list flag across the lines of one document.
///
/// Feed lines in order with [`push_line`](Self::push_line), then call
/// [`finish`](Self::finish) to close a list left open at end of input.
#[derive(Debug, Default)]
pub struct LineTransformer {
    in_list: bool,
}

impl LineTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the last structural line emitted was an `<li>` and no
    /// `</ul>` has followed it.
    pub fn in_list(&self) -> bool {
        self.in_list
    }

    pub fn push_line(&mut self, line: &str, out: &mut Vec<String>) {
        match classify(line) {
            LineKind::Heading { level, content } => {
                self.close_list(out);
                out.push(format!("<h{level}>{content}</h{level}>\n"));
            }
            LineKind::ListItem(item) => {
                self.open_list(out);
                out.push(format!("<li>{item}</li>\n"));
            }
            LineKind::Other => {
                self.close_list(out);
                out.push(line.to_owned());
            }
        }
    }

    pub fn finish(mut self, out: &mut Vec<String>) {
        self.close_list(out);
    }

    fn open_list(&mut self, out: &mut Vec<String>) {
        if !self.in_list {
            log::debug!("opening list block at output line {}", out.len() + 1);
            out.push("<ul>\n".to_owned());
            self.in_list = true;
        }
    }

    fn close_list(&mut self, out: &mut Vec<String>) {
        if self.in_list {
            log::debug!("closing list block at output line {}", out.len() + 1);
            out.push("</ul>\n".to_owned());
            self.in_list = false;
        }
    }
}

/// Transform a whole document given as lines (terminators included).
pub fn transform_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    let mut transformer = LineTransformer::new();
    for line in lines {
        transformer.push_line(line.as_ref(), &mut out);
    }
    transformer.finish(&mut out);
    out
}

/// Convenience wrapper over [`transform_lines`] for in-memory text.
pub fn convert_str(text: &str) -> String {
    transform_lines(split_lines(text)).concat()
}
