use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";
pub const DEFAULT_QUIZ_LENGTH: usize = 5;
pub const MAX_QUIZ_LENGTH: usize = 20;
/// Upper bound for one HTTP request, image generation included.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Connection and model settings for the generation service.
#[derive(Clone)]
pub struct GenerationConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub quiz_length: usize,
    pub request_timeout: Duration,
}

impl GenerationConfig {
    /// Defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            quiz_length: DEFAULT_QUIZ_LENGTH,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read settings from `LERNPARTNER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when no key is set, or an
    /// `Invalid*` variant for an unusable quiz length or request timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank("LERNPARTNER_API_KEY")
            .or_else(|| non_blank("API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());

        if let Some(base_url) = non_blank("LERNPARTNER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(model) = non_blank("LERNPARTNER_TEXT_MODEL") {
            config.text_model = model;
        }
        if let Some(model) = non_blank("LERNPARTNER_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Some(raw) = non_blank("LERNPARTNER_QUIZ_LENGTH") {
            config.quiz_length = parse_quiz_length(&raw)?;
        }
        if let Some(raw) = non_blank("LERNPARTNER_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = parse_request_timeout(&raw)?;
        }
        Ok(config)
    }
}

/// Parse a quiz length in `1..=MAX_QUIZ_LENGTH`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidQuizLength` for anything else.
pub fn parse_quiz_length(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if (1..=MAX_QUIZ_LENGTH).contains(&value) => Ok(value),
        _ => Err(ConfigError::InvalidQuizLength {
            raw: raw.to_string(),
            max: MAX_QUIZ_LENGTH,
        }),
    }
}

/// Parse a timeout in whole seconds, `1..=MAX_REQUEST_TIMEOUT_SECS`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidRequestTimeout` for anything else.
pub fn parse_request_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if (1..=MAX_REQUEST_TIMEOUT_SECS).contains(&secs) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidRequestTimeout {
            raw: raw.to_string(),
            max: MAX_REQUEST_TIMEOUT_SECS,
        }),
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("quiz_length", &self.quiz_length)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
