use std::io;

use thiserror::Error;

/// Library-wide error type for medipost operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// URL failed validation against the expected episode link patterns.
    #[error("Invalid {kind} URL: {url}")]
    InvalidUrl { kind: UrlKind, url: String },

    /// Hook text failed formatting validation.
    #[error("Invalid hook text: {0}")]
    InvalidHook(String),

    /// Art or comic style id not present in the configured list.
    #[error("Unknown style '{id}'. Available: {available}")]
    UnknownStyle { id: String, available: String },

    /// LLM provider name not recognized.
    #[error("Unknown LLM provider '{0}': must be one of gemini, claude, codex")]
    UnknownProvider(String),

    /// Transcript fetch failed after all retry attempts.
    #[error("Failed to fetch {url}: {details}")]
    FetchFailed { url: String, details: String },

    /// Transcript page contained no extractable paragraph text.
    #[error("No readable content found at {0}")]
    EmptyTranscript(String),

    /// External tool binary could not be found.
    #[error("{tool} not found. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// External tool exited non-zero.
    #[error("{tool} error: {details}")]
    ToolFailed { tool: String, details: String },

    /// External tool exceeded its time budget and was killed.
    #[error("{tool} timed out after {secs}s")]
    ToolTimeout { tool: String, secs: u64 },

    /// The style rotation list is empty.
    #[error("No art styles configured in rotation")]
    EmptyStyleRotation,

    /// Prompt template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateError { template: String, reason: String },

    /// JSON (de)serialization error for a config or state file.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Which episode link a URL was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Apple,
    Spotify,
    Transcript,
}

impl std::fmt::Display for UrlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlKind::Apple => write!(f, "Apple Podcasts"),
            UrlKind::Spotify => write!(f, "Spotify"),
            UrlKind::Transcript => write!(f, "transcript"),
        }
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
