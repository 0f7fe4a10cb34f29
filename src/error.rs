//! Error taxonomy for the generation workflow.
//!
//! Classified errors are reported at the CLI boundary as a single
//! human-readable line with a clean exit; anything unclassified keeps its
//! full context chain and propagates out of `main`.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal, classified failures surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Missing or unusable credential configuration.
    #[error("configuration: {0}")]
    Config(String),

    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The request or generated plan is structurally unusable.
    #[error("{0}")]
    Structure(String),

    /// No parsing strategy could extract a JSON object from the response.
    #[error("could not extract valid JSON from the model response; response was:\n{excerpt}")]
    Parse { excerpt: String },

    /// A field value could not be coerced to its required type.
    #[error("{0}")]
    Coercion(String),
}
