use dioxus::prelude::*;
use lernpartner_core::lesson::LessonEvent;
use lernpartner_core::model::QuizResult;

use crate::vm::map_end_screen;

#[component]
pub fn EndView(result: QuizResult, on_event: EventHandler<LessonEvent>) -> Element {
    let vm = map_end_screen(result);
    rsx! {
        section { class: "screen end-screen",
            h2 { "Quiz Complete!" }
            p { class: "lead", "{vm.message}" }
            div { class: "score",
                p { class: "score-value", "{vm.score_label}" }
                p { class: "score-percentage", "{vm.percentage_label}" }
            }
            button {
                id: "end-restart",
                class: "primary",
                onclick: move |_| on_event.call(LessonEvent::Restart),
                "Play Again"
            }
            button {
                id: "end-library",
                class: "library-link",
                onclick: move |_| on_event.call(LessonEvent::OpenLibrary),
                "My Articles"
            }
        }
    }
}
