use crate::chat::{ChatApiResponse, ChatReply};
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::utils::{build_chat_request, build_headers, build_models_headers, parse_chat_request};
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt::Display;

/// Forwards caller requests to OpenRouter and classifies whatever comes back.
///
/// The relay keeps no state between calls apart from the pooled HTTP client.
/// Bounds are applied per request so chat and model listing can differ.
pub struct Relay {
    client: Client,
    config: RelayConfig,
}

impl Relay {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Validates `body`, forwards it with fixed sampling parameters and
    /// extracts the first choice's content.
    pub async fn submit_chat(&self, body: &[u8]) -> Result<ChatReply, RelayError> {
        let request = parse_chat_request(body)?;
        let headers = build_headers(&self.config)?;
        debug!(
            "forwarding {} message(s) to model {}",
            request.messages.len(),
            request.model
        );

        let response = self
            .client
            .post(self.config.chat_url())
            .headers(headers)
            .json(&build_chat_request(request))
            .timeout(self.config.chat_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await?;
            return Err(RelayError::UpstreamError {
                status: status.as_u16(),
                details,
            });
        }

        let body = response.bytes().await?;
        let api_response: ChatApiResponse = serde_json::from_slice(&body)?;
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or(RelayError::UpstreamEmpty)?;

        Ok(ChatReply {
            content: choice.message.content,
        })
    }

    /// Relays the upstream model listing as-is.
    pub async fn list_models(&self) -> Result<Value, RelayError> {
        let headers = build_models_headers(&self.config).map_err(|err| match err {
            RelayError::Internal(cause) => RelayError::ModelsUnavailable(cause),
            other => other,
        })?;

        let response = self
            .client
            .get(self.config.models_url())
            .headers(headers)
            .timeout(self.config.models_timeout)
            .send()
            .await
            .map_err(models_unavailable)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::ModelsRejected {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(models_unavailable)
    }
}

fn models_unavailable(err: impl Display) -> RelayError {
    RelayError::ModelsUnavailable(err.to_string())
}
