//! Wire types for the Suggestion Service endpoint.

use serde::{Deserialize, Serialize};

/// Request body: `{"goal": "<text>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub goal: String,
}

/// Response body. The service answers with a capitalised `Message` field;
/// lower-case `message` is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(rename = "Message", alias = "message")]
    pub message: String,
}
