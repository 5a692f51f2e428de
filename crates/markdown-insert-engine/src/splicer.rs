use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::io::{self, IoError};
use crate::marker::Marker;
use crate::ranges::RangeError;

/// How a non-empty range spec picks lines out of the referenced file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrder {
    /// Walk the file once and keep every line whose index was requested.
    /// Lines come out in file order, each at most once.
    #[default]
    Source,
    /// Walk the requested indices in the order written, so repeated or
    /// reordered tokens repeat or reorder lines.
    Listed,
}

impl fmt::Display for LineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineOrder::Source => write!(f, "source"),
            LineOrder::Listed => write!(f, "listed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicerConfig {
    /// Directory prefix for marker file references, joined with `/`.
    pub base_path: String,
    pub line_order: LineOrder,
}

impl Default for SplicerConfig {
    fn default() -> Self {
        Self {
            base_path: ".".to_string(),
            line_order: LineOrder::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpliceError {
    #[error("Invalid line range in marker on line {line_number}: {source}")]
    Range {
        line_number: usize,
        #[source]
        source: RangeError,
    },
}

/// A marker whose file could not be read. The marker contributed no lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedInclude {
    pub path: String,
    pub kind: std::io::ErrorKind,
}

impl fmt::Display for UnresolvedInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: \"{}\" does not exist.", self.path)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub lines: Vec<String>,
    pub unresolved: Vec<UnresolvedInclude>,
}

/// Replaces insertion markers with the lines of the files they reference.
///
/// Runs in a single synchronous pass over the document. Every marker reads
/// its file afresh; nothing is cached and inserted content is not scanned
/// for further markers.
#[derive(Debug, Clone, Default)]
pub struct Splicer {
    config: SplicerConfig,
}

impl Splicer {
    pub fn new(config: SplicerConfig) -> Self {
        Self { config }
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self::new(SplicerConfig {
            base_path: base_path.into(),
            ..SplicerConfig::default()
        })
    }

    pub fn config(&self) -> &SplicerConfig {
        &self.config
    }

    /// Expand every marker in `lines`, writing a diagnostic to stderr for
    /// each file that could not be read.
    pub fn run(&self, lines: Vec<String>) -> Result<Vec<String>, SpliceError> {
        let outcome = self.splice(lines)?;
        for unresolved in &outcome.unresolved {
            eprintln!("{unresolved}");
        }
        Ok(outcome.lines)
    }

    /// Expand every marker in `lines`, returning unreadable files alongside
    /// the output instead of printing them.
    ///
    /// A malformed range spec fails the whole pass; the error carries the
    /// 1-based line number of the marker.
    pub fn splice(&self, lines: Vec<String>) -> Result<SpliceOutcome, SpliceError> {
        let mut outcome = SpliceOutcome {
            lines: Vec::with_capacity(lines.len()),
            unresolved: Vec::new(),
        };

        for (index, line) in lines.into_iter().enumerate() {
            let Some(marker) = Marker::parse(&line) else {
                outcome.lines.push(line);
                continue;
            };

            let selection = marker.selection().map_err(|source| SpliceError::Range {
                line_number: index + 1,
                source,
            })?;

            let path = marker.resolve(&self.config.base_path);
            match io::read_lines(Path::new(&path)) {
                Ok(source_lines) => {
                    let inserted = self.select(&marker, selection.as_deref(), &source_lines);
                    log::debug!(
                        "Inserted {} of {} lines from {path}",
                        inserted.len(),
                        source_lines.len()
                    );
                    outcome.lines.extend(inserted);
                }
                Err(e) => {
                    log::debug!("Skipping marker on line {}: {e}", index + 1);
                    let kind = match e {
                        IoError::NotFound(_) => std::io::ErrorKind::NotFound,
                        IoError::Io(source) => source.kind(),
                    };
                    outcome.unresolved.push(UnresolvedInclude { path, kind });
                }
            }
        }

        Ok(outcome)
    }

    fn select(&self, marker: &Marker, selection: Option<&[usize]>, source: &[String]) -> Vec<String> {
        let Some(indices) = selection else {
            return source.iter().map(|line| marker.indent_line(line)).collect();
        };

        match self.config.line_order {
            LineOrder::Source => {
                let wanted: HashSet<usize> = indices.iter().copied().collect();
                source
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| wanted.contains(i))
                    .map(|(_, line)| marker.indent_line(line))
                    .collect()
            }
            LineOrder::Listed => indices
                .iter()
                .filter_map(|&i| source.get(i))
                .map(|line| marker.indent_line(line))
                .collect(),
        }
    }
}
