use crate::model::{QuizResult, RequestId, Topic};
use crate::text::clean_word;

use super::effect::Effect;
use super::event::LessonEvent;
use super::state::{
    AnswerSelection, Finished, Lesson, LessonState, QuizSession, Reading, Screen,
    TranslationPanel,
};

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: LessonState,
    pub effect: Option<Effect>,
}

/// Screen-level outcome; the library is threaded through separately.
struct Step {
    screen: Screen,
    next_request: RequestId,
    effect: Option<Effect>,
}

impl Step {
    fn to(screen: Screen, next_request: RequestId) -> Self {
        Self {
            screen,
            next_request,
            effect: None,
        }
    }

    fn with_effect(screen: Screen, next_request: RequestId, effect: Effect) -> Self {
        Self {
            screen,
            next_request,
            effect: Some(effect),
        }
    }
}

/// Apply `event` to `state`.
///
/// Events that do not apply to the current screen, and completions whose
/// request id the screen is no longer waiting on, leave the state unchanged.
/// Completion events never produce an effect.
#[must_use]
pub fn transition(state: &LessonState, event: LessonEvent) -> Transition {
    let LessonState {
        screen,
        next_request,
        mut library,
    } = state.clone();
    let issued = next_request;
    let after = next_request.next();

    let step = match (screen, event) {
        (Screen::TopicSelection { error }, LessonEvent::SubmitTopic(raw)) => {
            match Topic::new(raw) {
                Ok(topic) => Step::with_effect(
                    Screen::GeneratingArticle {
                        topic: topic.clone(),
                        request: issued,
                    },
                    after,
                    Effect::GenerateArticle {
                        request: issued,
                        topic,
                    },
                ),
                Err(_) => Step::to(Screen::TopicSelection { error }, next_request),
            }
        }

        (
            Screen::GeneratingArticle { topic, request },
            LessonEvent::ArticleGenerated {
                request: done,
                generated,
                created_at,
            },
        ) if request == done => {
            let lesson = Lesson::new(topic, generated);
            library.add(lesson.clone(), created_at);
            Step::to(Screen::Reading(Reading::open(lesson)), next_request)
        }

        (
            Screen::GeneratingArticle { request, .. },
            LessonEvent::ArticleFailed {
                request: done,
                message,
            },
        ) if request == done => Step::to(
            Screen::TopicSelection {
                error: Some(message),
            },
            next_request,
        ),

        (Screen::Reading(_), LessonEvent::BackToTopics) => {
            Step::to(Screen::TopicSelection { error: None }, next_request)
        }

        (Screen::Reading(reading), LessonEvent::StartQuiz) => {
            let article_content = reading.lesson.article.content().to_string();
            Step::with_effect(
                Screen::GeneratingQuiz {
                    reading: Reading {
                        error: None,
                        translation: TranslationPanel::Closed,
                        ..reading
                    },
                    request: issued,
                },
                after,
                Effect::GenerateQuiz {
                    request: issued,
                    article_content,
                },
            )
        }

        (
            Screen::GeneratingQuiz { reading, request },
            LessonEvent::QuizGenerated { request: done, quiz },
        ) if request == done => Step::to(
            Screen::Quizzing(QuizSession {
                lesson: reading.lesson,
                quiz,
                index: 0,
                score: 0,
                selection: None,
            }),
            next_request,
        ),

        (
            Screen::GeneratingQuiz { reading, request },
            LessonEvent::QuizFailed {
                request: done,
                message,
            },
        ) if request == done => Step::to(
            Screen::Reading(Reading {
                error: Some(message),
                ..reading
            }),
            next_request,
        ),

        (Screen::Reading(reading), LessonEvent::WordClicked(raw)) => {
            let word = clean_word(&raw).filter(|_| !reading.translation.is_pending());
            match word {
                Some(word) => {
                    let context = reading.lesson.article.content().to_string();
                    Step::with_effect(
                        Screen::Reading(Reading {
                            translation: TranslationPanel::Pending {
                                word: word.clone(),
                                request: issued,
                            },
                            ..reading
                        }),
                        after,
                        Effect::TranslateWord {
                            request: issued,
                            word,
                            context,
                        },
                    )
                }
                None => Step::to(Screen::Reading(reading), next_request),
            }
        }

        (
            Screen::Reading(reading),
            LessonEvent::TranslationReady {
                request: done,
                translation,
            },
        ) if reading.translation_request() == Some(done) => {
            let word = reading.pending_word_owned();
            Step::to(
                Screen::Reading(Reading {
                    translation: TranslationPanel::Shown { word, translation },
                    ..reading
                }),
                next_request,
            )
        }

        (
            Screen::Reading(reading),
            LessonEvent::TranslationFailed {
                request: done,
                message,
            },
        ) if reading.translation_request() == Some(done) => {
            let word = reading.pending_word_owned();
            Step::to(
                Screen::Reading(Reading {
                    translation: TranslationPanel::Failed { word, message },
                    ..reading
                }),
                next_request,
            )
        }

        (Screen::Reading(reading), LessonEvent::DismissTranslation)
            if !reading.translation.is_pending() =>
        {
            Step::to(
                Screen::Reading(Reading {
                    translation: TranslationPanel::Closed,
                    ..reading
                }),
                next_request,
            )
        }

        (Screen::Quizzing(session), LessonEvent::SelectAnswer(answer)) => {
            Step::to(Screen::Quizzing(select_answer(session, answer)), next_request)
        }

        (Screen::Quizzing(session), LessonEvent::NextQuestion) => {
            Step::to(next_question(session), next_request)
        }

        (Screen::Finished(_), LessonEvent::Restart) => {
            Step::to(Screen::TopicSelection { error: None }, next_request)
        }

        (
            Screen::TopicSelection { .. } | Screen::Reading(_) | Screen::Finished(_),
            LessonEvent::OpenLibrary,
        ) => Step::to(Screen::Library, next_request),

        (Screen::Library, LessonEvent::ReadArticle(id)) => match library.get(id) {
            Some(saved) => Step::to(
                Screen::Reading(Reading::open(saved.lesson.clone())),
                next_request,
            ),
            None => Step::to(Screen::Library, next_request),
        },

        (Screen::Library, LessonEvent::DeleteArticle(id)) => {
            library.remove(id);
            Step::to(Screen::Library, next_request)
        }

        (Screen::Library, LessonEvent::NewArticle) => {
            Step::to(Screen::TopicSelection { error: None }, next_request)
        }

        (screen, _) => Step::to(screen, next_request),
    };

    Transition {
        state: LessonState {
            screen: step.screen,
            next_request: step.next_request,
            library,
        },
        effect: step.effect,
    }
}

fn select_answer(session: QuizSession, answer: String) -> QuizSession {
    if session.selection.is_some() {
        return session;
    }
    let Some(question) = session.current_question() else {
        return session;
    };
    if !question.options().contains(&answer) {
        return session;
    }
    let correct = question.is_correct(&answer);
    QuizSession {
        score: if correct {
            session.score.saturating_add(1)
        } else {
            session.score
        },
        selection: Some(AnswerSelection { answer, correct }),
        ..session
    }
}

fn next_question(session: QuizSession) -> Screen {
    if session.selection.is_none() {
        return Screen::Quizzing(session);
    }
    if session.is_last_question() {
        let total = u32::try_from(session.quiz.len()).unwrap_or(u32::MAX);
        return Screen::Finished(Finished {
            result: QuizResult::new(session.score, total),
            lesson: session.lesson,
        });
    }
    Screen::Quizzing(QuizSession {
        index: session.index + 1,
        selection: None,
        ..session
    })
}

impl Reading {
    fn open(lesson: Lesson) -> Self {
        Self {
            lesson,
            error: None,
            translation: TranslationPanel::Closed,
        }
    }

    fn translation_request(&self) -> Option<RequestId> {
        match &self.translation {
            TranslationPanel::Pending { request, .. } => Some(*request),
            _ => None,
        }
    }

    fn pending_word_owned(&self) -> String {
        self.translation.pending_word().unwrap_or_default().to_string()
    }
}
