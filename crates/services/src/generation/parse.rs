//! Validating parse step for structured responses.

use serde::Deserialize;

use lernpartner_core::model::{Article, Quiz, QuizQuestion, WordTranslation};

use crate::error::ResponseError;

#[derive(Debug, Deserialize)]
struct ArticlePayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionPayload {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct TranslationPayload {
    translation: String,
    explanation: String,
}

/// Parse an article response.
///
/// # Errors
///
/// Returns `ResponseError` for malformed JSON or a missing title/content.
pub fn article(text: &str) -> Result<Article, ResponseError> {
    let payload: ArticlePayload = serde_json::from_str(json_body(text))?;
    Ok(Article::new(payload.title, payload.content)?)
}

/// Parse a quiz response.
///
/// # Errors
///
/// Returns `ResponseError` unless the response is a non-empty array of valid
/// questions.
pub fn quiz(text: &str) -> Result<Quiz, ResponseError> {
    let payload: Vec<QuestionPayload> = serde_json::from_str(json_body(text))?;
    let questions = payload
        .into_iter()
        .map(|q| QuizQuestion::new(q.question, q.options, q.correct_answer, q.explanation))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Quiz::new(questions)?)
}

/// Parse a word translation response.
///
/// # Errors
///
/// Returns `ResponseError` for malformed JSON or a blank translation.
pub fn translation(text: &str) -> Result<WordTranslation, ResponseError> {
    let payload: TranslationPayload = serde_json::from_str(json_body(text))?;
    Ok(WordTranslation::new(payload.translation, payload.explanation)?)
}

/// Trim the response and drop a Markdown code fence if the model added one.
fn json_body(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
