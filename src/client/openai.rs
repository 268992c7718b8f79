use crate::{
    client::provider::ImageProvider,
    config::ImageConfig,
    error::{ImageError, Result},
    models::{GenerationRequest, GenerationResponse, ProviderErrorBody},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};

const GENERATIONS_PATH: &str = "/images/generations";

pub struct OpenAiImageProvider {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiImageProvider {
    /// Fails with `ImageError::Authentication` when the config carries no API key.
    pub fn new(config: &ImageConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let endpoint = format!("{}{}", config.base_url(), GENERATIONS_PATH);

        Ok(Self {
            client: Client::new(),
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|_| {
            ImageError::Config("API key contains characters not allowed in a header".into())
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn parse_error(status: StatusCode, body: &str) -> ImageError {
        let (message, code) = match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(parsed) => (parsed.error.message, parsed.error.code),
            Err(_) => (body.trim().to_string(), None),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ImageError::Authentication(message)
            }
            _ => ImageError::Request {
                status: status.as_u16(),
                message,
                code,
            },
        }
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        log::info!(
            "Generating {} image(s) with model: {} ({})",
            request.n,
            request.model,
            request.size
        );

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.build_headers()?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Provider answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        let parsed: GenerationResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenAiImageProvider {
        let config = ImageConfig::new()
            .with_api_key("sk-test")
            .with_base_url(format!("{}/v1", server.uri()));
        OpenAiImageProvider::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bearer_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "model": "dall-e-3",
                "prompt": "a starry sky",
                "n": 1,
                "size": "1024x1024"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1,
                "data": [{"url": "https://example.test/img.png"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider_for(&server)
            .generate(&GenerationRequest::new("a starry sky"))
            .await
            .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(
            response.data[0].url.as_deref(),
            Some("https://example.test/img.png")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        match err {
            ImageError::Authentication(message) => {
                assert_eq!(message, "Incorrect API key provided")
            }
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_request_keeps_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"message": "Invalid size 7x7", "type": "invalid_request_error", "code": "invalid_size"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate(&GenerationRequest::new("cat").with_size("7x7"))
            .await
            .unwrap_err();

        match err {
            ImageError::Request {
                status,
                message,
                code,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid size 7x7");
                assert_eq!(code.as_deref(), Some("invalid_size"));
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down\n"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ImageError::Request { status: 429, ref message, code: None } if message == "slow down"
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        assert!(matches!(err, ImageError::Response(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = ImageConfig::new()
            .with_api_key("sk-test")
            .with_base_url("http://127.0.0.1:1");
        let provider = OpenAiImageProvider::new(&config).unwrap();

        let err = provider
            .generate(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        assert!(matches!(err, ImageError::Transport(_)));
    }

    #[test]
    fn test_missing_key_fails_construction() {
        let result = OpenAiImageProvider::new(&ImageConfig::new());
        assert!(matches!(result, Err(ImageError::Authentication(_))));
    }

    #[test]
    fn test_endpoint_uses_default_base_url() {
        let provider = OpenAiImageProvider::new(&ImageConfig::new().with_api_key("sk")).unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://api.openai.com/v1/images/generations"
        );
    }
}
