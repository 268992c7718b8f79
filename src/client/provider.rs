use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResponse},
};
use async_trait::async_trait;

/// Anything that can turn a [`GenerationRequest`] into provider results.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;

    fn name(&self) -> &'static str;
}
