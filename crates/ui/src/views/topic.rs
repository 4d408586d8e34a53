use dioxus::prelude::*;
use lernpartner_core::lesson::LessonEvent;

#[component]
pub fn TopicView(
    #[props(!optional)] error: Option<String>,
    on_event: EventHandler<LessonEvent>,
) -> Element {
    let mut topic = use_signal(String::new);
    let blank = topic.read().trim().is_empty();

    rsx! {
        section { class: "screen topic-screen",
            h1 { class: "brand", "AI Deutsch-Lernpartner" }
            p { class: "lead", "What topic would you like to read about in German today?" }
            p { class: "hint", "(e.g., \"Die Alpen\", \"Berliner Mauer\", \"Deutsche Autos\")" }

            form {
                class: "topic-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let value = topic.peek().trim().to_string();
                    if !value.is_empty() {
                        on_event.call(LessonEvent::SubmitTopic(value));
                    }
                },
                input {
                    id: "topic-input",
                    r#type: "text",
                    value: "{topic}",
                    placeholder: "Enter a topic...",
                    "aria-label": "Article topic",
                    oninput: move |evt: FormEvent| topic.set(evt.value()),
                }
                button {
                    id: "topic-submit",
                    class: "primary",
                    r#type: "submit",
                    disabled: blank,
                    "Generate Article"
                }
            }

            button {
                id: "topic-library",
                class: "library-link",
                onclick: move |_| on_event.call(LessonEvent::OpenLibrary),
                "My Articles"
            }

            if let Some(error) = error {
                p { class: "error", "{error}" }
            }
        }
    }
}
