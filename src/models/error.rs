use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A persisted source (company directory, document registry, ...) does not exist.
    #[error("Source unavailable: {}", .path.display())]
    SourceUnavailable { path: PathBuf },

    /// A persisted source exists but could not be parsed.
    #[error("Source corrupt: {}: {reason}", .path.display())]
    SourceCorrupt { path: PathBuf, reason: String },

    /// A lookup (search term, company symbol) had no match.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template Error: {0}")]
    TemplateError(String),
}

impl Error {
    /// Stable tag attached to structured log events as the `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::SourceUnavailable { .. } => "source_unavailable",
            Error::SourceCorrupt { .. } => "source_corrupt",
            Error::NotFound(_) => "not_found",
            Error::ParserError(_) => "parser_error",
            Error::IoError(_) => "io_error",
            Error::TemplateError(_) => "template_error",
        }
    }

    /// Maps a parser failure on `path` to `SourceCorrupt`, leaving other errors untouched.
    pub(crate) fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::ParserError(reason) => Error::SourceCorrupt {
                path: path.into(),
                reason,
            },
            other => other,
        }
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Error {
        Error::TemplateError(err.to_string())
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Error {
        Error::TemplateError(err.to_string())
    }
}
