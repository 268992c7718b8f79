pub mod openai;
pub mod provider;

use crate::{
    config::ImageConfig,
    error::{ImageError, Result},
    models::{GenerationRequest, GenerationResponse, ImageModel},
};
use std::sync::Arc;

pub use openai::OpenAiImageProvider;
pub use provider::ImageProvider;

#[derive(Clone)]
pub struct ImageClient {
    provider: Arc<dyn ImageProvider>,
}

impl ImageClient {
    /// Builds a client backed by the OpenAI provider. A missing API key fails
    /// here with `ImageError::Authentication`, before anything touches the network.
    pub fn new(config: ImageConfig) -> Result<Self> {
        let provider = OpenAiImageProvider::new(&config)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn with_provider(provider: Arc<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        ImageModel::ALL
            .iter()
            .map(|model| (model.id(), model.display_name(), model.provider()))
            .collect()
    }

    pub async fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        if request.prompt.is_empty() {
            return Err(ImageError::InvalidRequest("prompt must not be empty".into()));
        }

        self.provider.generate(request).await
    }

    /// Requests one image and returns the URL of the first result.
    pub async fn generate(&self, prompt: &str, model: &str, size: &str) -> Result<String> {
        let request = GenerationRequest::new(prompt)
            .with_model(model)
            .with_size(size);

        let response = self.generate_request(&request).await?;
        first_url(response)
    }
}

fn first_url(response: GenerationResponse) -> Result<String> {
    let first = response
        .data
        .into_iter()
        .next()
        .ok_or(ImageError::EmptyResponse)?;

    first
        .url
        .ok_or_else(|| ImageError::Response("first image has no url".into()))
}
