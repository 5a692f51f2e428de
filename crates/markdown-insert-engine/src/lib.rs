pub mod io;
pub mod marker;
pub mod pipeline;
pub mod ranges;
pub mod render;
pub mod splicer;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use marker::Marker;
pub use pipeline::{INSERT_PRIORITY, INSERT_STAGE_NAME, LineTransform, Pipeline, PipelineError};
pub use ranges::{RangeError, expand_indices, expand_selection};
pub use render::render_html;
pub use splicer::{LineOrder, SpliceError, SpliceOutcome, Splicer, SplicerConfig, UnresolvedInclude};
