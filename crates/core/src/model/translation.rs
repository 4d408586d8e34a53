use thiserror::Error;

/// On-demand translation of a single clicked word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTranslation {
    translation: String,
    explanation: String,
}

impl WordTranslation {
    /// # Errors
    ///
    /// Returns `TranslationError::MissingTranslation` if the translation is blank.
    pub fn new(
        translation: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let translation = translation.into().trim().to_string();
        if translation.is_empty() {
            return Err(TranslationError::MissingTranslation);
        }
        Ok(Self {
            translation,
            explanation: explanation.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranslationError {
    #[error("translation is empty")]
    MissingTranslation,
}
