use serde::Deserialize;
use serde_json::json;

use super::error::TransportError;
use crate::domain::{SendAt, SendMessage, SentMessageStatus, StatusCode};

#[derive(Debug, Clone, Deserialize)]
struct SentStatusJson {
    id: i64,
    status: i32,
}

pub fn encode_send_message_body(request: &SendMessage) -> serde_json::Value {
    json!({
        "from": request.from(),
        "to": request.to(),
        "text": request.text(),
        "isFlash": request.is_flash(),
        "sendAt": request.send_at().map(SendAt::as_str),
    })
}

/// Decode `[{"id": .., "status": ..}, ..]`, keeping the order returned by the API.
///
/// Shared by `messages` and `messages/p2p`.
pub fn decode_sent_statuses_json_response(
    json: &str,
) -> Result<Vec<SentMessageStatus>, TransportError> {
    let parsed: Vec<SentStatusJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|item| SentMessageStatus {
            id: item.id,
            status: StatusCode::new(item.status),
        })
        .collect())
}
