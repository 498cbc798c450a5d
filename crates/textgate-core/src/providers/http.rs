//! HTTP connection handle for OpenAI-compatible backends

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatClient, ChatCompletion, CompletionOptions};
use super::BackendId;
use crate::logging::SharedLogger;
use crate::types::ChatMessage;

/// Request body for the `/chat/completions` endpoint
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

/// Connection handle bound to one backend's endpoint and credential
///
/// All configured backends speak the same OpenAI-compatible wire format;
/// only the base endpoint and bearer credential differ. One request per
/// call, no retry, reqwest's default timeout behavior.
pub struct HttpChatClient {
    provider: BackendId,
    api_base: String,
    api_key: String,
    client: reqwest::Client,
    logger: SharedLogger,
}

impl HttpChatClient {
    /// Create a handle for `provider` using its default endpoint
    pub fn new(provider: BackendId, api_key: impl Into<String>, logger: SharedLogger) -> Self {
        Self {
            provider,
            api_base: provider.api_base().to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            logger,
        }
    }

    /// Override the base endpoint (proxies, self-hosted gateways, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

/// Pull the upstream `error.message` out of an error body, if it has one
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl ChatClient for HttpChatClient {
    fn provider(&self) -> BackendId {
        self.provider
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> ProviderResult<ChatCompletion> {
        let url = self.endpoint();
        self.logger.debug(&format!(
            "[HttpChatClient] POST {} provider={} model={} messages={}",
            url,
            self.provider,
            model,
            messages.len()
        ));

        let body = ChatCompletionRequest {
            model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            self.logger.warn(&format!(
                "[HttpChatClient] {} returned {}: {}",
                self.provider, status, message
            ));
            return Err(ProviderError::api_error(
                self.provider.as_str(),
                status.as_u16(),
                message,
            ));
        }

        let completion = response.json::<ChatCompletion>().await?;
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use std::sync::Arc;

    fn client(provider: BackendId) -> HttpChatClient {
        HttpChatClient::new(provider, "sk-test", Arc::new(NoOpLogger))
    }

    #[test]
    fn test_endpoint_per_backend() {
        assert_eq!(
            client(BackendId::OpenAi).endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            client(BackendId::Groq).endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            client(BackendId::OpenRouter).endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_with_custom_base() {
        let client = client(BackendId::OpenAi).with_api_base("http://localhost:8080/v1/");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_extract_error_message_structured() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(extract_error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn test_extract_error_message_raw_body() {
        assert_eq!(extract_error_message("  bad gateway\n"), "bad gateway");
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), r#"{"detail": "nope"}"#);
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::user("hi")];
        let body = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            max_tokens: 1024,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["max_tokens"], 1024);
    }
}
