use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::GenerationError;

use super::{GenerationBackend, ResponseSchema};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// `GenerationBackend` over the Gemini (`generateContent`) and Imagen
/// (`predict`) REST endpoints.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    config: GenerationConfig,
}

impl GeminiBackend {
    /// Build a backend whose requests give up after `config.request_timeout`.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Http` if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: Client, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn post<T, R>(&self, url: String, payload: &T) -> Result<R, GenerationError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, GenerationError> {
        let url = self.endpoint(&self.config.text_model, "generateContent");
        tracing::debug!(model = %self.config.text_model, "generateContent");
        let payload = GenerateContentRequest::json(prompt, schema);
        let body: GenerateContentResponse = self.post(url, &payload).await?;
        body.into_text().ok_or(GenerationError::EmptyResponse)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.endpoint(&self.config.image_model, "predict");
        tracing::debug!(model = %self.config.image_model, "predict");
        let payload = PredictRequest::single_jpeg(prompt);
        let body: PredictResponse = self.post(url, &payload).await?;
        body.into_image().ok_or(GenerationError::MissingImage)
    }
}

//
// ─── generateContent ───────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationSettings<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    fn json(prompt: &'a str, schema: &'a ResponseSchema) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings<'a> {
    response_mime_type: &'static str,
    response_schema: &'a ResponseSchema,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

//
// ─── predict (images) ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters,
}

impl<'a> PredictRequest<'a> {
    fn single_jpeg(prompt: &'a str) -> Self {
        Self {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: "16:9",
                output_options: OutputOptions {
                    mime_type: "image/jpeg",
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u8,
    aspect_ratio: &'static str,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

impl PredictResponse {
    fn into_image(self) -> Option<String> {
        self.predictions
            .into_iter()
            .find_map(|prediction| prediction.bytes_base64_encoded)
            .filter(|bytes| !bytes.trim().is_empty())
    }
}
