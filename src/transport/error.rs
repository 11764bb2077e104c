use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing field: {field}")]
    MissingField { field: &'static str },

    #[error("response field {field} is not a valid amount: {value}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("response contains an invalid Jalali date: {value}")]
    InvalidDate { value: String },
}

#[derive(Debug, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Extract the `message` field of an error body, if there is a usable one.
pub fn decode_error_message(body: &str) -> Option<String> {
    let parsed: ErrorJsonBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        serde_json::Value::Null => return None,
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    };
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}
