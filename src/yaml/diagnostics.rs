//! YAML error diagnostics
//!
//! Wraps serde_yml failures in miette diagnostics so syntax errors point
//! at the offending spot in the scenario file.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Error reading, parsing, or writing a scenario file
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error("failed to read file")]
    #[diagnostic(code(odt::yaml::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("failed to serialize scenario")]
    #[diagnostic(code(odt::yaml::serialize))]
    Serialize(#[source] serde_yml::Error),
}

/// A YAML syntax or shape error with source context
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(odt::yaml::syntax))]
pub struct YamlSyntaxError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,
}

impl YamlSyntaxError {
    /// Build a located diagnostic from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let offset = err
            .location()
            .map(|loc| loc.index().min(content.len().saturating_sub(1)))
            .unwrap_or(0);
        let len = usize::from(!content.is_empty());
        Self {
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span: SourceSpan::from(offset..offset + len),
        }
    }
}
