use regex::Regex;
use std::sync::OnceLock;

use crate::ranges::{RangeError, expand_indices, expand_selection};

/// An insertion marker: a line reading `&[<ranges>](<file>)` and nothing else.
///
/// The syntax borrows from markdown links, read as "insert [these lines]
/// from (this file)". Leading whitespace is allowed and is reapplied to every
/// inserted line; trailing text of any kind, whitespace included, means the
/// line is not a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Whitespace in front of the `&`, kept verbatim.
    pub indent: String,
    /// Raw range spec between the brackets, possibly empty.
    pub range_spec: String,
    /// File reference between the parentheses, relative to the base path.
    pub file_reference: String,
}

fn marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX.get_or_init(|| {
        Regex::new(r"^(\s*?)&\[(.*?)\]\((.+?)\)$").expect("Invalid marker regex")
    })
}

impl Marker {
    /// Recognise a marker line, returning `None` for ordinary content.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = marker_regex().captures(line)?;
        Some(Self {
            indent: captures[1].to_string(),
            range_spec: captures[2].to_string(),
            file_reference: captures[3].to_string(),
        })
    }

    /// Path of the referenced file under `base_path`.
    ///
    /// Plain string concatenation: no normalisation, so `..` segments and
    /// absolute-looking references are taken as written.
    pub fn resolve(&self, base_path: &str) -> String {
        format!("{base_path}/{}", self.file_reference)
    }

    /// Zero-based line indices requested by this marker; empty means all lines.
    pub fn indices(&self) -> Result<Vec<usize>, RangeError> {
        expand_indices(&self.range_spec)
    }

    /// Lines this marker selects, `None` meaning the whole file.
    pub fn selection(&self) -> Result<Option<Vec<usize>>, RangeError> {
        expand_selection(&self.range_spec)
    }

    /// Prefix an inserted line with the marker's indentation.
    pub fn indent_line(&self, line: &str) -> String {
        format!("{}{}", self.indent, line.trim())
    }
}
