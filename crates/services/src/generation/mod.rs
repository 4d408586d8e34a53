mod gemini;
pub mod parse;
pub mod schema;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use gemini::GeminiBackend;
pub use schema::ResponseSchema;

/// Contract for the external text/image generation service.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text constrained to `schema` and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` if the request fails or the response is empty.
    async fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, GenerationError>;

    /// Generate one image and return it base64-encoded.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` if the request fails or no image comes back.
    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError>;
}
