use std::sync::Arc;

use dioxus::prelude::*;
use lernpartner_core::lesson::{LessonEvent, LessonState, Screen, transition};
use services::LessonLoopService;

use crate::context::AppContext;

use super::{ArticleView, DashboardView, EndView, LoadingView, QuizView, TopicView};

#[component]
pub fn LessonView() -> Element {
    let lesson = use_signal(LessonState::new);
    rsx! { LessonScreens { lesson } }
}

/// Feed `event` through the state machine and run any effect it asks for.
///
/// The completion is fed back through `transition` once the effect resolves;
/// if the lesson moved on in the meantime the completion is dropped there.
pub(crate) fn dispatch(
    mut lesson: Signal<LessonState>,
    lesson_loop: &Arc<LessonLoopService>,
    event: LessonEvent,
) {
    let step = transition(&lesson.peek(), event);
    tracing::debug!(screen = %step.state.screen_kind(), "lesson event applied");
    lesson.set(step.state);

    let Some(effect) = step.effect else {
        return;
    };
    let lesson_loop = Arc::clone(lesson_loop);
    spawn(async move {
        let completion = lesson_loop.run(effect).await;
        let step = transition(&lesson.peek(), completion);
        tracing::debug!(screen = %step.state.screen_kind(), "lesson request completed");
        lesson.set(step.state);
    });
}

#[component]
pub(crate) fn LessonScreens(lesson: Signal<LessonState>) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_length = ctx.quiz_length();
    let lesson_loop = ctx.lesson_loop();
    let on_event = use_callback(move |event: LessonEvent| dispatch(lesson, &lesson_loop, event));

    let state = lesson.read();
    let loading = state
        .screen_kind()
        .loading_message()
        .unwrap_or_default()
        .to_string();

    match state.screen() {
        Screen::TopicSelection { error } => rsx! {
            TopicView { error: error.clone(), on_event }
        },
        Screen::GeneratingArticle { topic, .. } => rsx! {
            LoadingView { message: loading, detail: Some(topic.to_string()) }
        },
        Screen::Reading(reading) => rsx! {
            ArticleView { reading: reading.clone(), quiz_length, on_event }
        },
        Screen::GeneratingQuiz { reading, .. } => rsx! {
            LoadingView {
                message: loading,
                detail: Some(reading.lesson.article.title().to_string()),
            }
        },
        Screen::Quizzing(session) => rsx! {
            QuizView { session: session.clone(), on_event }
        },
        Screen::Finished(finished) => rsx! {
            EndView { result: finished.result, on_event }
        },
        Screen::Library => rsx! {
            DashboardView { library: state.library().clone(), on_event }
        },
    }
}
