use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for rpcgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the descriptor content and filename so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown message type error.
    pub fn unknown_message_error(
        &self,
        name: impl Into<String>,
        location: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownMessage {
            src: self.named_source(),
            span,
            name: name.into(),
            location: location.into(),
        })
    }

    /// Create a duplicate message error.
    pub fn duplicate_message_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateMessage {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the schema descriptor with '--schema <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema descriptor")]
    #[diagnostic(code(rpcgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown message type '{name}' in {location}")]
    #[diagnostic(
        code(rpcgen::unknown_message),
        help("declare it with a [[message]] table or use its fully-qualified name")
    )]
    UnknownMessage {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in this schema")]
        span: Option<SourceSpan>,
        name: String,
        location: String,
    },

    #[error("duplicate message '{name}'")]
    #[diagnostic(
        code(rpcgen::duplicate_message),
        help("message names must be unique within one schema file")
    )]
    DuplicateMessage {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },
}
