//! Ranked line-transform stages run ahead of markdown rendering.
//!
//! A host registers stages with a priority; higher priorities run first. The
//! insertion splicer registers at [`INSERT_PRIORITY`] so included content is
//! in place before any other stage sees the document.

use crate::splicer::{SpliceError, Splicer};

/// Priority the splicer registers at.
pub const INSERT_PRIORITY: u32 = 100;

/// Name the splicer registers under.
pub const INSERT_STAGE_NAME: &str = "insert-snippet";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A whole-document transformation over source lines.
pub trait LineTransform {
    fn name(&self) -> &str;

    fn transform(&self, lines: Vec<String>) -> Result<Vec<String>, PipelineError>;
}

impl LineTransform for Splicer {
    fn name(&self) -> &str {
        INSERT_STAGE_NAME
    }

    fn transform(&self, lines: Vec<String>) -> Result<Vec<String>, PipelineError> {
        self.run(lines).map_err(|e: SpliceError| PipelineError::Stage {
            stage: INSERT_STAGE_NAME.to_string(),
            source: Box::new(e),
        })
    }
}

struct RankedStage {
    priority: u32,
    stage: Box<dyn LineTransform>,
}

#[derive(Default)]
pub struct Pipeline {
    stages: Vec<RankedStage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipeline holding only the splicer at its usual priority.
    pub fn with_splicer(splicer: Splicer) -> Self {
        let mut pipeline = Self::new();
        pipeline.register(splicer, INSERT_PRIORITY);
        pipeline
    }

    /// Add a stage. Stages with equal priority run in registration order.
    pub fn register(&mut self, stage: impl LineTransform + 'static, priority: u32) {
        let at = self
            .stages
            .iter()
            .position(|s| s.priority < priority)
            .unwrap_or(self.stages.len());
        self.stages.insert(
            at,
            RankedStage {
                priority,
                stage: Box::new(stage),
            },
        );
    }

    /// Stage names in the order they will run
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.stage.name()).collect()
    }

    pub fn run_lines(&self, lines: Vec<String>) -> Result<Vec<String>, PipelineError> {
        self.stages.iter().try_fold(lines, |lines, ranked| {
            log::debug!("Running stage '{}'", ranked.stage.name());
            ranked.stage.transform(lines)
        })
    }

    /// Run over a whole document, split on `\n` and joined back with `\n`.
    pub fn run(&self, text: &str) -> Result<String, PipelineError> {
        let lines = text.split('\n').map(str::to_string).collect();
        Ok(self.run_lines(lines)?.join("\n"))
    }
}
