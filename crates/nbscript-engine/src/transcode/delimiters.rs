//! Sentinel lines and the markdown line prefix.
//!
//! These strings are the wire contract of the script form: a sentinel only
//! counts when it fills a whole line, with no surrounding whitespace.

use regex::Regex;
use std::sync::OnceLock;

/// Line that opens a code region
pub const CODE_SENTINEL: &str = "# +";

/// Line that opens a markdown region
pub const MARKDOWN_SENTINEL: &str = "# -";

/// Prefix carried by every markdown content line
pub const MARKDOWN_PREFIX: &str = "# ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Code,
    Markdown,
}

impl Sentinel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentinel::Code => CODE_SENTINEL,
            Sentinel::Markdown => MARKDOWN_SENTINEL,
        }
    }

    pub fn from_line(line: &str) -> Option<Self> {
        match line {
            CODE_SENTINEL => Some(Sentinel::Code),
            MARKDOWN_SENTINEL => Some(Sentinel::Markdown),
            _ => None,
        }
    }
}

/// One element of a split script: either content or the sentinel that governs
/// the content after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Content(&'a str),
    Sentinel(Sentinel),
}

fn sentinel_regex() -> &'static Regex {
    static SENTINEL_REGEX: OnceLock<Regex> = OnceLock::new();
    SENTINEL_REGEX.get_or_init(|| Regex::new(r"(?m)^# [+-]$").expect("Invalid sentinel regex"))
}

/// Split `text` into content segments interleaved with sentinel tokens.
///
/// The output always starts and ends with a `Content` segment, and content and
/// sentinels alternate; empty content between two adjacent matches is kept.
/// The newline that terminates a sentinel line stays in the following segment.
pub fn split_sentinels(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in sentinel_regex().find_iter(text) {
        segments.push(Segment::Content(&text[last..m.start()]));
        if let Some(sentinel) = Sentinel::from_line(m.as_str()) {
            segments.push(Segment::Sentinel(sentinel));
        }
        last = m.end();
    }
    segments.push(Segment::Content(&text[last..]));

    segments
}

/// Prefix a markdown line for the script form
pub fn comment_line(line: &str) -> String {
    format!("{MARKDOWN_PREFIX}{line}")
}

/// Undo [`comment_line`]: drop one `# ` prefix if present and trim the end
pub fn uncomment_line(line: &str) -> &str {
    line.strip_prefix(MARKDOWN_PREFIX).unwrap_or(line).trim_end()
}
