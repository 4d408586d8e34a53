use super::library::Library;
use crate::model::{
    Article, GeneratedArticle, GeneratedImage, Quiz, QuizQuestion, QuizResult, RequestId, Topic,
    WordTranslation,
};

/// Flat tag for the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    TopicSelection,
    GeneratingArticle,
    Reading,
    GeneratingQuiz,
    Quizzing,
    Finished,
    Library,
}

impl ScreenKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopicSelection => "topic_selection",
            Self::GeneratingArticle => "generating_article",
            Self::Reading => "reading",
            Self::GeneratingQuiz => "generating_quiz",
            Self::Quizzing => "quizzing",
            Self::Finished => "finished",
            Self::Library => "library",
        }
    }

    /// Message for the loading indicator, if this screen waits on the service.
    #[must_use]
    pub fn loading_message(self) -> Option<&'static str> {
        match self {
            Self::GeneratingArticle => Some("Generating your article and image..."),
            Self::GeneratingQuiz => Some("Creating your custom quiz..."),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The generated material a lesson is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub topic: Topic,
    pub article: Article,
    pub image: GeneratedImage,
}

impl Lesson {
    #[must_use]
    pub fn new(topic: Topic, generated: GeneratedArticle) -> Self {
        Self {
            topic,
            article: generated.article,
            image: generated.image,
        }
    }
}

/// Word lookup overlay on the reading screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TranslationPanel {
    #[default]
    Closed,
    Pending {
        word: String,
        request: RequestId,
    },
    Shown {
        word: String,
        translation: WordTranslation,
    },
    Failed {
        word: String,
        message: String,
    },
}

impl TranslationPanel {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The word currently being looked up, if any.
    #[must_use]
    pub fn pending_word(&self) -> Option<&str> {
        match self {
            Self::Pending { word, .. } => Some(word),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lesson: Lesson,
    pub error: Option<String>,
    pub translation: TranslationPanel,
}

/// The answer given for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSelection {
    pub answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub lesson: Lesson,
    pub quiz: Quiz,
    pub index: usize,
    pub score: u32,
    pub selection: Option<AnswerSelection>,
}

impl QuizSession {
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.get(self.index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.quiz.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finished {
    pub lesson: Lesson,
    pub result: QuizResult,
}

/// Screen plus the data that screen owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    TopicSelection {
        error: Option<String>,
    },
    GeneratingArticle {
        topic: Topic,
        request: RequestId,
    },
    Reading(Reading),
    GeneratingQuiz {
        reading: Reading,
        request: RequestId,
    },
    Quizzing(QuizSession),
    Finished(Finished),
    Library,
}

impl Screen {
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::TopicSelection { .. } => ScreenKind::TopicSelection,
            Self::GeneratingArticle { .. } => ScreenKind::GeneratingArticle,
            Self::Reading(_) => ScreenKind::Reading,
            Self::GeneratingQuiz { .. } => ScreenKind::GeneratingQuiz,
            Self::Quizzing(_) => ScreenKind::Quizzing,
            Self::Finished(_) => ScreenKind::Finished,
            Self::Library => ScreenKind::Library,
        }
    }
}

/// Whole-session state. Replaced, never mutated in place, by `transition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonState {
    pub(crate) screen: Screen,
    pub(crate) next_request: RequestId,
    pub(crate) library: Library,
}

impl Default for LessonState {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::TopicSelection { error: None },
            next_request: RequestId::new(1),
            library: Library::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Articles generated so far; kept across every screen.
    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    fn lesson(&self) -> Option<&Lesson> {
        match &self.screen {
            Screen::Reading(reading) | Screen::GeneratingQuiz { reading, .. } => {
                Some(&reading.lesson)
            }
            Screen::Quizzing(session) => Some(&session.lesson),
            Screen::Finished(finished) => Some(&finished.lesson),
            Screen::TopicSelection { .. } | Screen::GeneratingArticle { .. } | Screen::Library => {
                None
            }
        }
    }

    #[must_use]
    pub fn topic(&self) -> Option<&Topic> {
        match &self.screen {
            Screen::GeneratingArticle { topic, .. } => Some(topic),
            _ => self.lesson().map(|lesson| &lesson.topic),
        }
    }

    #[must_use]
    pub fn article(&self) -> Option<&Article> {
        self.lesson().map(|lesson| &lesson.article)
    }

    #[must_use]
    pub fn image(&self) -> Option<&GeneratedImage> {
        self.lesson().map(|lesson| &lesson.image)
    }

    /// Last error surfaced on a recoverable screen.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.screen {
            Screen::TopicSelection { error } => error.as_deref(),
            Screen::Reading(reading) => reading.error.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn reading(&self) -> Option<&Reading> {
        match &self.screen {
            Screen::Reading(reading) => Some(reading),
            _ => None,
        }
    }

    #[must_use]
    pub fn quiz_session(&self) -> Option<&QuizSession> {
        match &self.screen {
            Screen::Quizzing(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn question_index(&self) -> Option<usize> {
        self.quiz_session().map(|session| session.index)
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match &self.screen {
            Screen::Quizzing(session) => Some(session.score),
            Screen::Finished(finished) => Some(finished.result.score()),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.quiz_session()
            .and_then(|session| session.selection.as_ref())
            .map(|selection| selection.answer.as_str())
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.quiz_session()
            .and_then(|session| session.selection.as_ref())
            .map(|selection| selection.correct)
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        match &self.screen {
            Screen::Finished(finished) => Some(finished.result),
            _ => None,
        }
    }

    /// The request the current screen is waiting on.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        match &self.screen {
            Screen::GeneratingArticle { request, .. } | Screen::GeneratingQuiz { request, .. } => {
                Some(*request)
            }
            Screen::Reading(Reading {
                translation: TranslationPanel::Pending { request, .. },
                ..
            }) => Some(*request),
            _ => None,
        }
    }
}
