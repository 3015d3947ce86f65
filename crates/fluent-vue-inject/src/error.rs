use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluentVueError {
    /// None of the known insertion anchors occur in the compiled component.
    #[error("Could not find where to attach translations in the compiled component (looked for: {tried})")]
    ComponentShapeUnrecognized {
        /// Comma separated anchors that were searched for.
        tried: String,
    },

    /// An inline custom block was compiled without a `locale` attribute.
    #[error("Custom block in '{id}' does not have locale attribute")]
    MissingLocaleAttribute { id: String },

    /// A resource file could not be read. Only ever reported as a warning.
    #[error("Failed to read Fluent resource '{}': {source}", .path.display())]
    ResourceReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource contains Fluent syntax errors.
    #[error("Fluent syntax errors in '{id}':\n{}", .errors.join("\n"))]
    ResourceSyntax { id: String, errors: Vec<String> },

    /// An edit was requested at an offset that is past the end of the text or
    /// inside a multi-byte character.
    #[error("Cannot insert at offset {pos} of a {len} byte module")]
    InvalidSplicePosition { pos: usize, len: usize },

    #[error("Failed to write source map: {0}")]
    SourceMap(#[from] sourcemap::Error),

    #[error(transparent)]
    Config(#[from] fluent_vue_config::ConfigError),
}
