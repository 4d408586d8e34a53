use lernpartner_core::lesson::{LessonEvent, LessonState, ScreenKind};
use lernpartner_core::model::{RequestId, WordTranslation};
use lernpartner_core::time::fixed_now;

use super::test_harness::{generated_article, quiz, setup_lesson_harness, state_after};

fn reading_events() -> Vec<LessonEvent> {
    vec![
        LessonEvent::SubmitTopic("Die Alpen".into()),
        LessonEvent::ArticleGenerated {
            request: RequestId::new(1),
            generated: generated_article(),
            created_at: fixed_now(),
        },
    ]
}

fn quizzing_events() -> Vec<LessonEvent> {
    let mut events = reading_events();
    events.push(LessonEvent::StartQuiz);
    events.push(LessonEvent::QuizGenerated {
        request: RequestId::new(2),
        quiz: quiz(5),
    });
    events
}

fn render(state: LessonState) -> String {
    let mut harness = setup_lesson_harness(state, Vec::new());
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_form_and_error() {
    let html = render(LessonState::new());
    assert!(html.contains("AI Deutsch-Lernpartner"), "missing heading in {html}");
    assert!(html.contains("Generate Article"), "missing submit in {html}");
    assert!(html.contains("disabled"), "blank topic should disable submit in {html}");

    let failed = state_after(vec![
        LessonEvent::SubmitTopic("Die Alpen".into()),
        LessonEvent::ArticleFailed {
            request: RequestId::new(1),
            message: "Failed to generate content. Please try a different topic.".into(),
        },
    ]);
    let html = render(failed);
    assert!(
        html.contains("Please try a different topic."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn loading_view_smoke_renders_phase_message() {
    let html = render(state_after(vec![LessonEvent::SubmitTopic("Die Alpen".into())]));
    assert!(
        html.contains("Generating your article and image..."),
        "missing loading message in {html}"
    );
    assert!(html.contains("Die Alpen"), "missing topic in {html}");

    let mut events = reading_events();
    events.push(LessonEvent::StartQuiz);
    let html = render(state_after(events));
    assert!(
        html.contains("Creating your custom quiz..."),
        "missing quiz loading message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn article_view_smoke_renders_clickable_words() {
    let html = render(state_after(reading_events()));
    assert!(html.contains("Die Alpen"), "missing title in {html}");
    assert!(
        html.contains("data:image/jpeg;base64,/9j/4AAQ"),
        "missing image in {html}"
    );
    assert!(html.contains("class=\"word\""), "missing word spans in {html}");
    assert!(html.contains("Tälern"), "missing article text in {html}");
    assert!(html.contains("Start the Quiz"), "missing quiz button in {html}");
    assert!(html.contains("5 vocabulary questions"), "missing quiz length in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn article_view_smoke_renders_translation_tooltip() {
    let mut events = reading_events();
    events.push(LessonEvent::WordClicked("Häuser.".into()));
    events.push(LessonEvent::TranslationReady {
        request: RequestId::new(2),
        translation: WordTranslation::new("houses", "Plural of Haus.").unwrap(),
    });
    let html = render(state_after(events));
    assert!(html.contains("tooltip"), "missing tooltip in {html}");
    assert!(html.contains("houses"), "missing translation in {html}");
    assert!(html.contains("Plural of Haus."), "missing explanation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_progress_and_feedback() {
    let html = render(state_after(quizzing_events()));
    assert!(html.contains("Question 1 / 5"), "missing progress in {html}");
    assert!(html.contains("Wort0"), "missing question in {html}");
    assert!(!html.contains("Explanation"), "explanation shown too early in {html}");

    let mut events = quizzing_events();
    events.push(LessonEvent::SelectAnswer("wrong0a".into()));
    let html = render(state_after(events));
    assert!(html.contains("quiz-option--correct"), "missing correct styling in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing incorrect styling in {html}");
    assert!(html.contains("Erklärung 0"), "missing explanation in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn end_view_smoke_renders_score() {
    let mut events = quizzing_events();
    for n in 0..5 {
        let answer = if n < 4 {
            format!("right{n}")
        } else {
            format!("wrong{n}a")
        };
        events.push(LessonEvent::SelectAnswer(answer));
        events.push(LessonEvent::NextQuestion);
    }
    let state = state_after(events);
    assert_eq!(state.screen_kind(), ScreenKind::Finished);

    let html = render(state);
    assert!(html.contains("Quiz Complete!"), "missing heading in {html}");
    assert!(html.contains("4 / 5"), "missing score in {html}");
    assert!(html.contains("(80%)"), "missing percentage in {html}");
    assert!(html.contains("Sehr gut! Excellent work!"), "missing message in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_runs_article_request() {
    let mut harness = setup_lesson_harness(
        LessonState::new(),
        vec![LessonEvent::SubmitTopic("Die Alpen".into())],
    );
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Start the Quiz"), "article not shown in {html}");
    assert!(html.contains("Tälern"), "missing article text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reports_quiz_failure() {
    let mut harness =
        setup_lesson_harness(state_after(reading_events()), vec![LessonEvent::StartQuiz]);
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Failed to create a quiz for this article."),
        "missing quiz error in {html}"
    );
    assert!(html.contains("Tälern"), "article should be kept in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn library_view_smoke_renders_empty_state() {
    let html = render(state_after(vec![LessonEvent::OpenLibrary]));
    assert!(html.contains("My Article Library"), "missing heading in {html}");
    assert!(html.contains("Your library is empty."), "missing empty state in {html}");
    assert!(html.contains("New Article"), "missing new article button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn library_view_smoke_renders_saved_article_card() {
    let mut events = reading_events();
    events.push(LessonEvent::OpenLibrary);
    let state = state_after(events);
    assert_eq!(state.screen_kind(), ScreenKind::Library);

    let html = render(state);
    assert!(!html.contains("Your library is empty."), "unexpected empty state in {html}");
    assert!(html.contains("Topic: "), "missing topic label in {html}");
    assert!(html.contains("Die Alpen"), "missing topic in {html}");
    assert!(html.contains("14.11.2023"), "missing created date in {html}");
    assert!(
        html.contains("Delete article titled Die Alpen"),
        "missing delete label in {html}"
    );
    assert!(html.contains("Read"), "missing read button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_and_article_views_link_to_library() {
    let html = render(LessonState::new());
    assert!(html.contains("My Articles"), "missing library link in {html}");
    let html = render(state_after(reading_events()));
    assert!(html.contains("My Articles"), "missing library link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reopens_article_from_library() {
    let mut events = reading_events();
    events.push(LessonEvent::OpenLibrary);
    let library = state_after(events);
    let id = library.library().iter().next().unwrap().id;

    let mut harness = setup_lesson_harness(library, vec![LessonEvent::ReadArticle(id)]);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Start the Quiz"), "article not reopened in {html}");
    assert!(html.contains("Tälern"), "missing article text in {html}");
}
