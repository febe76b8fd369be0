//! Front matter detection and document splitting

/// The line that opens and closes a front matter block
pub const DELIMITER: &str = "---";

/// Split text into lines, preferring `\r\n` terminators.
///
/// Falls back to `\n` only when the `\r\n` split finds no break at all. The
/// empty piece after a final terminator is not a line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split("\r\n").collect();
    if lines.len() == 1 {
        lines = text.split('\n').collect();
    }
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// A document divided at its front matter delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    header: Vec<&'a str>,
    body: Vec<&'a str>,
    closed: bool,
}

impl<'a> Split<'a> {
    /// Front matter content, without the delimiter lines
    pub fn header(&self) -> String {
        self.header.join("\n")
    }

    /// Everything after the closing delimiter, one `\n` per line
    pub fn body(&self) -> String {
        let mut body = String::with_capacity(self.body.iter().map(|l| l.len() + 1).sum());
        for line in &self.body {
            body.push_str(line);
            body.push('\n');
        }
        body
    }

    /// Whether a closing delimiter line was found
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Whether the first line of `text` is exactly the delimiter
pub fn has_front_matter(text: &str) -> bool {
    split_lines(text).first() == Some(&DELIMITER)
}

/// Divide `text` into front matter and body.
///
/// Returns `None` when the first line is not the delimiter. Without a
/// closing delimiter the rest of the document is header and the body is
/// empty.
pub fn split(text: &str) -> Option<Split<'_>> {
    let lines = split_lines(text);
    let (first, rest) = lines.split_first()?;
    if *first != DELIMITER {
        return None;
    }

    match rest.iter().position(|line| *line == DELIMITER) {
        Some(end) => Some(Split {
            header: rest[..end].to_vec(),
            body: rest[end + 1..].to_vec(),
            closed: true,
        }),
        None => Some(Split {
            header: rest.to_vec(),
            body: Vec::new(),
            closed: false,
        }),
    }
}
