#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use services::{GenerationBackend, GenerationError, ResponseSchema};

pub const IMAGE: &str = "/9j/4AAQSkZJRgABAQ==";

pub const ARTICLE_JSON: &str = r#"{
    "title": "Die Alpen",
    "content": "Die Alpen sind hoch. Viele Häuser stehen in den Tälern."
}"#;

pub const TRANSLATION_JSON: &str =
    r#"{"translation":"houses","explanation":"Plural of Haus, meaning buildings people live in."}"#;

pub fn quiz_json(count: usize) -> String {
    let questions: Vec<String> = (0..count)
        .map(|n| {
            format!(
                r#"{{"question":"Wort{n}","options":["a{n}","b{n}","c{n}","d{n}"],"correctAnswer":"a{n}","explanation":"Erklärung {n}"}}"#
            )
        })
        .collect();
    format!("[{}]", questions.join(","))
}

/// Backend double answering each schema with a fixed reply.
///
/// `None` makes the request fail with `EmptyResponse`.
pub struct ScriptedBackend {
    pub article: Option<String>,
    pub quiz: Option<String>,
    pub translation: Option<String>,
    pub image: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn happy(quiz_len: usize) -> Self {
        Self {
            article: Some(ARTICLE_JSON.to_string()),
            quiz: Some(quiz_json(quiz_len)),
            translation: Some(TRANSLATION_JSON.to_string()),
            image: Some(IMAGE.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn record(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, GenerationError> {
        self.record(prompt);
        let reply = if *schema == ResponseSchema::article() {
            &self.article
        } else if *schema == ResponseSchema::quiz() {
            &self.quiz
        } else {
            &self.translation
        };
        reply.clone().ok_or(GenerationError::EmptyResponse)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        self.record(prompt);
        self.image.clone().ok_or(GenerationError::MissingImage)
    }
}
