//! Shared error types for the services crate.

use thiserror::Error;

use lernpartner_core::model::{ArticleError, ImageError, QuizError, TranslationError};

/// Errors raised while loading `GenerationConfig`. Fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("API key is not set; export LERNPARTNER_API_KEY (or API_KEY)")]
    MissingApiKey,
    #[error("invalid quiz length {raw:?}: expected a number from 1 to {max}")]
    InvalidQuizLength { raw: String, max: usize },
    #[error("invalid request timeout {raw:?}: expected whole seconds from 1 to {max}")]
    InvalidRequestTimeout { raw: String, max: u64 },
}

/// Transport-level failures talking to the generation service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("generation service returned an empty response")]
    EmptyResponse,
    #[error("generation service returned no image")]
    MissingImage,
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// A response arrived but does not fit the expected shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResponseError {
    #[error("response does not match the expected JSON shape: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Article(#[from] ArticleError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Underlying cause of a failed content operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentFailure {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Errors emitted by `ContentService`. The display text is shown to the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("Failed to generate content. Please try a different topic.")]
    Article(#[source] ContentFailure),
    #[error("Failed to create a quiz for this article.")]
    Quiz(#[source] ContentFailure),
    #[error("Could not translate the selected word.")]
    Translation(#[source] ContentFailure),
}

impl ContentError {
    /// The underlying cause, for logs.
    #[must_use]
    pub fn cause(&self) -> &ContentFailure {
        match self {
            Self::Article(cause) | Self::Quiz(cause) | Self::Translation(cause) => cause,
        }
    }
}
