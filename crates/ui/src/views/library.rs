use dioxus::prelude::*;
use lernpartner_core::lesson::{LessonEvent, Library};

use crate::vm::{ArticleCardVm, map_library};

#[component]
pub fn DashboardView(library: Library, on_event: EventHandler<LessonEvent>) -> Element {
    let vm = map_library(&library);

    rsx! {
        section { class: "screen library-screen",
            div { class: "library-header",
                h1 { "My Article Library" }
                button {
                    id: "library-new",
                    class: "primary",
                    onclick: move |_| on_event.call(LessonEvent::NewArticle),
                    "New Article"
                }
            }

            if vm.is_empty() {
                div { class: "library-empty",
                    h2 { "Your library is empty." }
                    p { class: "hint", "Generate your first article to start learning!" }
                }
            } else {
                div { class: "library-grid",
                    for card in vm.cards {
                        ArticleCard { key: "{card.id.value()}", card: card.clone(), on_event }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(card: ArticleCardVm, on_event: EventHandler<LessonEvent>) -> Element {
    let id = card.id;
    rsx! {
        div { class: "article-card",
            img { class: "card-image", src: "{card.image_src}", alt: "{card.title}" }
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-meta", "Topic: " span { "{card.topic}" } }
            p { class: "card-meta", "Created: " span { "{card.created}" } }
            div { class: "card-actions",
                button {
                    class: "card-delete",
                    "aria-label": "Delete article titled {card.title}",
                    onclick: move |_| on_event.call(LessonEvent::DeleteArticle(id)),
                    "Delete"
                }
                button {
                    class: "primary card-read",
                    "aria-label": "Read article titled {card.title}",
                    onclick: move |_| on_event.call(LessonEvent::ReadArticle(id)),
                    "Read"
                }
            }
        }
    }
}
