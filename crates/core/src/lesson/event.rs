use chrono::{DateTime, Utc};

use crate::model::{ArticleId, GeneratedArticle, Quiz, RequestId, WordTranslation};

/// Everything that can happen to a lesson: user intents and request completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonEvent {
    /// Raw topic input; blank input is ignored.
    SubmitTopic(String),
    /// `created_at` is stamped by the runtime and stored with the library entry.
    ArticleGenerated {
        request: RequestId,
        generated: GeneratedArticle,
        created_at: DateTime<Utc>,
    },
    ArticleFailed {
        request: RequestId,
        message: String,
    },
    BackToTopics,
    StartQuiz,
    QuizGenerated {
        request: RequestId,
        quiz: Quiz,
    },
    QuizFailed {
        request: RequestId,
        message: String,
    },
    /// Raw word as rendered, punctuation included.
    WordClicked(String),
    TranslationReady {
        request: RequestId,
        translation: WordTranslation,
    },
    TranslationFailed {
        request: RequestId,
        message: String,
    },
    DismissTranslation,
    SelectAnswer(String),
    NextQuestion,
    Restart,
    OpenLibrary,
    ReadArticle(ArticleId),
    DeleteArticle(ArticleId),
    /// Leave the library for topic selection.
    NewArticle,
}

impl LessonEvent {
    /// Completion events answer an earlier `Effect`.
    #[must_use]
    pub fn completes(&self) -> Option<RequestId> {
        match self {
            Self::ArticleGenerated { request, .. }
            | Self::ArticleFailed { request, .. }
            | Self::QuizGenerated { request, .. }
            | Self::QuizFailed { request, .. }
            | Self::TranslationReady { request, .. }
            | Self::TranslationFailed { request, .. } => Some(*request),
            _ => None,
        }
    }
}
