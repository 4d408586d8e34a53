use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

//
// ─── ARTICLE ───────────────────────────────────────────────────────────────────
//

/// A short generated reading passage in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    content: String,
}

impl Article {
    /// Build an article from generated fields.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError` if the title or content is empty after trimming.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, ArticleError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(ArticleError::MissingTitle);
        }
        if content.trim().is_empty() {
            return Err(ArticleError::MissingContent);
        }
        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whitespace-separated word count of the content.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArticleError {
    #[error("generated article is missing a title")]
    MissingTitle,
    #[error("generated article is missing content")]
    MissingContent,
}

//
// ─── IMAGE ─────────────────────────────────────────────────────────────────────
//

/// Base64-encoded JPEG illustrating an article.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    base64: String,
}

impl GeneratedImage {
    pub const MIME_TYPE: &'static str = "image/jpeg";

    /// Wrap base64 image bytes returned by the image model.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Empty` for blank payloads and `ImageError::InvalidBase64`
    /// when the payload does not decode.
    pub fn from_base64(value: impl Into<String>) -> Result<Self, ImageError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ImageError::Empty);
        }
        let bytes = BASE64
            .decode(trimmed)
            .map_err(|err| ImageError::InvalidBase64(err.to_string()))?;
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        Ok(Self {
            base64: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// `data:` URL suitable for an `img` element.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, self.base64)
    }
}

// Image payloads are large; keep them out of debug output.
impl std::fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("base64_len", &self.base64.len())
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageError {
    #[error("generated image is empty")]
    Empty,
    #[error("generated image is not valid base64: {0}")]
    InvalidBase64(String),
}

/// An article together with its illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArticle {
    pub article: Article,
    pub image: GeneratedImage,
}
