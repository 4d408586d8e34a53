use dioxus::prelude::*;
use lernpartner_core::lesson::{LessonEvent, QuizSession};

use crate::vm::{OptionVm, QuizCardVm, map_quiz_card};

#[component]
pub fn QuizView(session: QuizSession, on_event: EventHandler<LessonEvent>) -> Element {
    let Some(QuizCardVm {
        progress_label,
        progress_percent,
        question,
        options,
        answered,
        explanation,
        next_label,
    }) = map_quiz_card(&session)
    else {
        return rsx! {};
    };

    rsx! {
        section { class: "screen quiz-screen",
            div { class: "quiz-progress",
                span { "{progress_label}" }
                div { class: "progress-track",
                    div { class: "progress-bar", style: "width: {progress_percent}%" }
                }
            }

            p { class: "hint", "Translate this word:" }
            h2 { class: "quiz-question", "{question}" }

            div { class: "quiz-options",
                for (idx, option) in options.into_iter().enumerate() {
                    QuizOption { key: "{idx}", option, answered, on_event }
                }
            }

            if let Some(explanation) = explanation {
                div { class: "quiz-feedback",
                    h3 { "Explanation" }
                    p { "{explanation}" }
                    button {
                        id: "quiz-next",
                        class: "primary",
                        onclick: move |_| on_event.call(LessonEvent::NextQuestion),
                        "{next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuizOption(option: OptionVm, answered: bool, on_event: EventHandler<LessonEvent>) -> Element {
    let answer = option.text.clone();
    rsx! {
        button {
            class: option.state.class(),
            disabled: answered,
            onclick: move |_| on_event.call(LessonEvent::SelectAnswer(answer.clone())),
            "{option.text}"
        }
    }
}
