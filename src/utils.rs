use crate::chat::{ChatRequest, OpenRouterChatRequestBody};
use crate::config::RelayConfig;
use crate::constants::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE, HEADER_REFERER, HEADER_TITLE};
use crate::error::RelayError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

fn bearer(config: &RelayConfig) -> Result<HeaderValue, RelayError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
    value.set_sensitive(true);
    Ok(value)
}

pub fn build_headers(config: &RelayConfig) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer(config)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(HEADER_REFERER),
        HeaderValue::from_str(&config.referer)?,
    );
    headers.insert(
        HeaderName::from_static(HEADER_TITLE),
        HeaderValue::from_str(&config.title)?,
    );
    Ok(headers)
}

pub fn build_models_headers(config: &RelayConfig) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer(config)?);
    Ok(headers)
}

/// Validates a raw caller body. Checks run in order: data, messages, model.
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, RelayError> {
    let data: Value = match serde_json::from_slice(body) {
        Ok(value) if !is_empty_value(&value) => value,
        _ => return Err(RelayError::BadRequest("No data provided")),
    };

    let messages = match data.get("messages") {
        Some(Value::Array(messages)) if !messages.is_empty() => messages.clone(),
        _ => return Err(RelayError::BadRequest("No messages provided")),
    };

    let model = match data.get("model") {
        Some(Value::String(model)) if !model.is_empty() => model.clone(),
        _ => return Err(RelayError::BadRequest("No model specified")),
    };

    Ok(ChatRequest { model, messages })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

pub fn build_chat_request(request: ChatRequest) -> OpenRouterChatRequestBody {
    OpenRouterChatRequestBody {
        model: request.model,
        messages: request.messages,
        temperature: CHAT_TEMPERATURE,
        max_tokens: CHAT_MAX_TOKENS,
        stream: false,
    }
}
