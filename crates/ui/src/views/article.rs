use dioxus::prelude::*;
use lernpartner_core::lesson::{LessonEvent, Reading};

use crate::vm::{ArticleVm, TooltipVm, WordVm, map_article};

#[component]
pub fn ArticleView(reading: Reading, quiz_length: usize, on_event: EventHandler<LessonEvent>) -> Element {
    let ArticleVm {
        title,
        image_src,
        words,
        tooltip,
        translating,
        error,
    } = map_article(&reading);

    rsx! {
        article { class: "screen article-screen",
            button {
                id: "article-back",
                class: "link-button",
                onclick: move |_| on_event.call(LessonEvent::BackToTopics),
                "← Back to topics"
            }
            button {
                id: "article-library",
                class: "library-link",
                onclick: move |_| on_event.call(LessonEvent::OpenLibrary),
                "My Articles"
            }

            img { class: "article-image", src: "{image_src}", alt: "{title}" }
            h1 { class: "article-title", "{title}" }

            if let Some(tooltip) = tooltip {
                WordTooltip { tooltip, on_event }
            }

            p { class: "article-body",
                for (idx, word) in words.into_iter().enumerate() {
                    WordSpan { key: "{idx}", word, on_event }
                }
            }

            if translating {
                p { class: "hint", "Translating..." }
            }
            if let Some(error) = error {
                p { class: "error", "{error}" }
            }

            div { class: "actions",
                button {
                    id: "article-start-quiz",
                    class: "primary",
                    onclick: move |_| on_event.call(LessonEvent::StartQuiz),
                    "I'm Ready! Start the Quiz"
                }
                p { class: "hint", "{quiz_length} vocabulary questions" }
            }
        }
    }
}

#[component]
fn WordSpan(word: WordVm, on_event: EventHandler<LessonEvent>) -> Element {
    if !word.clickable {
        return rsx! { span { "{word.text}" } };
    }
    let class = if word.pending { "word word--pending" } else { "word" };
    let text = word.text.clone();
    rsx! {
        span {
            class,
            onclick: move |_| on_event.call(LessonEvent::WordClicked(text.clone())),
            "{word.text}"
        }
    }
}

#[component]
fn WordTooltip(tooltip: TooltipVm, on_event: EventHandler<LessonEvent>) -> Element {
    let close = move |_: MouseEvent| on_event.call(LessonEvent::DismissTranslation);
    match tooltip {
        TooltipVm::Translation {
            word,
            translation,
            explanation,
        } => rsx! {
            div { class: "tooltip", "role": "tooltip",
                button { class: "tooltip-close", "aria-label": "Close tooltip", onclick: close, "×" }
                p { class: "tooltip-word", "{word}" }
                p { class: "tooltip-translation", "{translation}" }
                p { class: "tooltip-explanation", "{explanation}" }
            }
        },
        TooltipVm::Failure { word, message } => rsx! {
            div { class: "tooltip tooltip--failed", "role": "tooltip",
                button { class: "tooltip-close", "aria-label": "Close tooltip", onclick: close, "×" }
                p { class: "tooltip-word", "{word}" }
                p { class: "error", "{message}" }
            }
        },
    }
}
