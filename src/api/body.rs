//! Response Body Decoding
//!
//! Bodies are JSON only when the content type says so; anything else is kept
//! as plain text. Error messages are pulled from either shape.

use serde::de::DeserializeOwned;

use super::transport::HttpResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Classify a response body by its content type
    pub fn parse(content_type: Option<&str>, raw: &str) -> Self {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);

        if is_json {
            match serde_json::from_str(raw) {
                Ok(value) => return ResponseBody::Json(value),
                Err(e) => {
                    tracing::debug!(error = %e, "body declared as JSON failed to parse");
                }
            }
        }

        ResponseBody::Text(raw.to_string())
    }

    pub fn from_response(response: &HttpResponse) -> Self {
        Self::parse(response.content_type.as_deref(), &response.body)
    }

    /// Server-supplied error text: JSON `error`, then JSON `text`, then the
    /// plain body if it is not blank.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ResponseBody::Json(value) => ["error", "text"]
                .iter()
                .filter_map(|key| value.get(*key))
                .filter_map(|v| v.as_str())
                .find(|s| !s.trim().is_empty())
                .map(str::to_string),
            ResponseBody::Text(text) if text.trim().is_empty() => None,
            ResponseBody::Text(text) => Some(text.clone()),
        }
    }

    /// Decode a JSON body into a typed value
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, String> {
        match self {
            ResponseBody::Json(value) => serde_json::from_value(value).map_err(|e| e.to_string()),
            ResponseBody::Text(text) => Err(format!(
                "expected JSON body, got text ({} bytes)",
                text.len()
            )),
        }
    }
}
