use std::sync::Arc;

use lernpartner_core::Clock;
use lernpartner_core::lesson::{Effect, LessonEvent, LessonState, transition};

use crate::content_service::ContentService;
use crate::error::ContentError;

const NOTHING_TO_TRANSLATE: &str = "Nothing to translate in the selected text.";

/// Executes lesson effects against the content service.
#[derive(Clone)]
pub struct LessonLoopService {
    content: Arc<ContentService>,
    clock: Clock,
}

impl LessonLoopService {
    #[must_use]
    pub fn new(content: Arc<ContentService>) -> Self {
        Self {
            content,
            clock: Clock::default(),
        }
    }

    /// Override the clock used to date saved articles.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn content(&self) -> &ContentService {
        &self.content
    }

    /// Perform one effect and report its outcome as a completion event.
    ///
    /// Never fails: service errors become `*Failed` events carrying the
    /// user-facing message, and the cause is logged here.
    pub async fn run(&self, effect: Effect) -> LessonEvent {
        let request = effect.request();
        match effect {
            Effect::GenerateArticle { topic, .. } => {
                tracing::info!(%request, %topic, "generating article");
                match self.content.generate_article(&topic).await {
                    Ok(generated) => LessonEvent::ArticleGenerated {
                        request,
                        generated,
                        created_at: self.clock.now(),
                    },
                    Err(err) => LessonEvent::ArticleFailed {
                        request,
                        message: report(&err),
                    },
                }
            }
            Effect::GenerateQuiz {
                article_content, ..
            } => {
                tracing::info!(%request, "generating quiz");
                match self.content.generate_quiz(&article_content).await {
                    Ok(quiz) => LessonEvent::QuizGenerated { request, quiz },
                    Err(err) => LessonEvent::QuizFailed {
                        request,
                        message: report(&err),
                    },
                }
            }
            Effect::TranslateWord { word, context, .. } => {
                tracing::debug!(%request, %word, "translating word");
                match self.content.translate_word(&word, &context).await {
                    Ok(Some(translation)) => LessonEvent::TranslationReady {
                        request,
                        translation,
                    },
                    Ok(None) => LessonEvent::TranslationFailed {
                        request,
                        message: NOTHING_TO_TRANSLATE.to_string(),
                    },
                    Err(err) => LessonEvent::TranslationFailed {
                        request,
                        message: report(&err),
                    },
                }
            }
        }
    }

    /// Apply `event` and run any resulting effect to completion.
    ///
    /// Completion events never request further work, so at most one effect
    /// runs per call.
    pub async fn drive(&self, state: &LessonState, event: LessonEvent) -> LessonState {
        let step = transition(state, event);
        let Some(effect) = step.effect else {
            return step.state;
        };
        let completion = self.run(effect).await;
        transition(&step.state, completion).state
    }
}

fn report(err: &ContentError) -> String {
    tracing::warn!(error = %err, cause = %err.cause(), "content request failed");
    err.to_string()
}
