use std::sync::Arc;

use crate::config::GenerationConfig;
use crate::content_service::ContentService;
use crate::error::GenerationError;
use crate::generation::{GeminiBackend, GenerationBackend};
use crate::lesson_loop::LessonLoopService;

/// Assembles app-facing services around one generation backend.
#[derive(Clone)]
pub struct AppServices {
    content: Arc<ContentService>,
    lesson_loop: Arc<LessonLoopService>,
}

impl AppServices {
    /// Build services backed by the Gemini REST API.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` if the HTTP client cannot be built.
    pub fn from_config(config: GenerationConfig) -> Result<Self, GenerationError> {
        let quiz_length = config.quiz_length;
        let backend = GeminiBackend::new(config)?;
        Ok(Self::with_backend(Arc::new(backend), quiz_length))
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn GenerationBackend>, quiz_length: usize) -> Self {
        let content = Arc::new(ContentService::new(backend, quiz_length));
        let lesson_loop = Arc::new(LessonLoopService::new(Arc::clone(&content)));
        Self {
            content,
            lesson_loop,
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn lesson_loop(&self) -> Arc<LessonLoopService> {
        Arc::clone(&self.lesson_loop)
    }

    #[must_use]
    pub fn quiz_length(&self) -> usize {
        self.content.quiz_length()
    }
}
