use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lernpartner_core::lesson::{LessonEvent, LessonState, transition};
use lernpartner_core::model::{Article, GeneratedArticle, GeneratedImage, Quiz, QuizQuestion};
use services::{
    AppServices, GenerationBackend, GenerationError, LessonLoopService, ResponseSchema,
};

use crate::context::{UiApp, build_app_context};

use super::lesson::{LessonScreens, dispatch};

pub const ARTICLE_CONTENT: &str = "Die Alpen sind hoch. Viele Häuser stehen in den Tälern.";

struct ScriptedBackend;

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_json(
        &self,
        _prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, GenerationError> {
        if *schema == ResponseSchema::article() {
            Ok(format!(
                r#"{{"title":"Die Alpen","content":"{ARTICLE_CONTENT}"}}"#
            ))
        } else if *schema == ResponseSchema::translation() {
            Ok(r#"{"translation":"houses","explanation":"Plural of Haus."}"#.to_string())
        } else {
            Err(GenerationError::EmptyResponse)
        }
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok("/9j/4AAQ".to_string())
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn lesson_loop(&self) -> Arc<LessonLoopService> {
        self.services.lesson_loop()
    }

    fn quiz_length(&self) -> usize {
        self.services.quiz_length()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    initial: LessonState,
    events: Vec<LessonEvent>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn LessonHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let lesson = use_signal(|| props.initial.clone());
    use_hook(|| {
        let lesson_loop = ctx.lesson_loop();
        let events = props.events.clone();
        spawn(async move {
            for event in events {
                dispatch(lesson, &lesson_loop, event);
            }
        });
    });
    rsx! { LessonScreens { lesson } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render the lesson starting from `initial`, then dispatch `events` once mounted.
pub fn setup_lesson_harness(initial: LessonState, events: Vec<LessonEvent>) -> ViewHarness {
    let services = AppServices::with_backend(Arc::new(ScriptedBackend), 5);
    let dom = VirtualDom::new_with_props(
        LessonHarness,
        HarnessProps {
            app: Arc::new(TestApp { services }),
            initial,
            events,
        },
    );
    ViewHarness { dom }
}

/// Apply events without running effects; completions are passed explicitly.
pub fn state_after(events: Vec<LessonEvent>) -> LessonState {
    events
        .into_iter()
        .fold(LessonState::new(), |state, event| transition(&state, event).state)
}

pub fn generated_article() -> GeneratedArticle {
    GeneratedArticle {
        article: Article::new("Die Alpen", ARTICLE_CONTENT).unwrap(),
        image: GeneratedImage::from_base64("/9j/4AAQ").unwrap(),
    }
}

pub fn quiz(len: usize) -> Quiz {
    let questions = (0..len)
        .map(|n| {
            QuizQuestion::new(
                format!("Wort{n}"),
                vec![
                    format!("right{n}"),
                    format!("wrong{n}a"),
                    format!("wrong{n}b"),
                    format!("wrong{n}c"),
                ],
                format!("right{n}"),
                format!("Erklärung {n}"),
            )
            .unwrap()
        })
        .collect();
    Quiz::new(questions).unwrap()
}
