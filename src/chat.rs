use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller request after validation. Messages are forwarded untouched.
#[derive(Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChatReply {
    pub content: Value,
}

#[derive(Deserialize, Debug)]
pub struct ChatApiResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoiceMessage {
    pub content: Value,
}

#[derive(Debug, Serialize)]
pub struct OpenRouterChatRequestBody {
    pub model: String,
    pub messages: Vec<Value>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}
