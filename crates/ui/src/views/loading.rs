use dioxus::prelude::*;

#[component]
pub fn LoadingView(message: String, #[props(!optional)] detail: Option<String>) -> Element {
    rsx! {
        section { class: "screen loading-screen",
            div { class: "spinner", "aria-hidden": "true" }
            p { class: "loading-message", "{message}" }
            if let Some(detail) = detail {
                p { class: "hint", "{detail}" }
            }
        }
    }
}
