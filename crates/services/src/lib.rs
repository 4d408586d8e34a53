#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod content_service;
pub mod error;
pub mod generation;
pub mod lesson_loop;
pub mod prompts;

pub use app_services::AppServices;
pub use config::GenerationConfig;
pub use content_service::ContentService;
pub use error::{ConfigError, ContentError, ContentFailure, GenerationError, ResponseError};
pub use generation::{GeminiBackend, GenerationBackend, ResponseSchema};
pub use lesson_loop::LessonLoopService;
