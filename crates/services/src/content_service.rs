use std::sync::Arc;

use lernpartner_core::model::{GeneratedArticle, GeneratedImage, Quiz, Topic, WordTranslation};
use lernpartner_core::text::clean_word;

use crate::error::{ContentError, ContentFailure, ResponseError};
use crate::generation::{GenerationBackend, ResponseSchema, parse};
use crate::prompts;

/// The three content operations the lesson needs.
#[derive(Clone)]
pub struct ContentService {
    backend: Arc<dyn GenerationBackend>,
    quiz_length: usize,
}

impl ContentService {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>, quiz_length: usize) -> Self {
        Self {
            backend,
            quiz_length,
        }
    }

    /// Number of questions requested per quiz.
    #[must_use]
    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    /// Generate an article and its illustration concurrently.
    ///
    /// Fails as a whole if either request fails or the article is incomplete.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Article`.
    pub async fn generate_article(&self, topic: &Topic) -> Result<GeneratedArticle, ContentError> {
        self.try_generate_article(topic)
            .await
            .map_err(ContentError::Article)
    }

    async fn try_generate_article(&self, topic: &Topic) -> Result<GeneratedArticle, ContentFailure> {
        let article_prompt = prompts::article(topic);
        let image_prompt = prompts::image(topic);
        let schema = ResponseSchema::article();

        let (text, image) = futures::try_join!(
            self.backend.generate_json(&article_prompt, &schema),
            self.backend.generate_image(&image_prompt),
        )?;

        let article = parse::article(&text)?;
        let image = GeneratedImage::from_base64(image).map_err(ResponseError::from)?;
        tracing::debug!(
            title = article.title(),
            words = article.word_count(),
            "article generated"
        );
        Ok(GeneratedArticle { article, image })
    }

    /// Generate a vocabulary quiz for an article.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Quiz`.
    pub async fn generate_quiz(&self, article_content: &str) -> Result<Quiz, ContentError> {
        self.try_generate_quiz(article_content)
            .await
            .map_err(ContentError::Quiz)
    }

    async fn try_generate_quiz(&self, article_content: &str) -> Result<Quiz, ContentFailure> {
        let prompt = prompts::quiz(article_content, self.quiz_length);
        let text = self
            .backend
            .generate_json(&prompt, &ResponseSchema::quiz())
            .await?;
        let quiz = parse::quiz(&text)?;
        if quiz.len() != self.quiz_length {
            tracing::warn!(
                requested = self.quiz_length,
                received = quiz.len(),
                "quiz length differs from request"
            );
        }
        Ok(quiz)
    }

    /// Translate a clicked word in the context of the article.
    ///
    /// Returns `Ok(None)` without a request when nothing is left after
    /// punctuation is stripped.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Translation`.
    pub async fn translate_word(
        &self,
        word: &str,
        context: &str,
    ) -> Result<Option<WordTranslation>, ContentError> {
        let Some(word) = clean_word(word) else {
            tracing::debug!(raw = word, "nothing to translate");
            return Ok(None);
        };
        self.try_translate(&word, context)
            .await
            .map(Some)
            .map_err(ContentError::Translation)
    }

    async fn try_translate(
        &self,
        word: &str,
        context: &str,
    ) -> Result<WordTranslation, ContentFailure> {
        let prompt = prompts::translation(word, context);
        let text = self
            .backend
            .generate_json(&prompt, &ResponseSchema::translation())
            .await?;
        Ok(parse::translation(&text)?)
    }
}
