use std::sync::Arc;

use services::LessonLoopService;

pub trait UiApp: Send + Sync {
    fn lesson_loop(&self) -> Arc<LessonLoopService>;
    fn quiz_length(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    lesson_loop: Arc<LessonLoopService>,
    quiz_length: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_loop: app.lesson_loop(),
            quiz_length: app.quiz_length(),
        }
    }

    #[must_use]
    pub fn lesson_loop(&self) -> Arc<LessonLoopService> {
        Arc::clone(&self.lesson_loop)
    }

    /// Questions requested per quiz, for display before the quiz exists.
    #[must_use]
    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
