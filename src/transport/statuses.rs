use serde::Deserialize;

use super::error::TransportError;
use crate::domain::{SentMessageStatus, StatusCode, StatusQuery};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageStatusJson {
    message_id: i64,
    status: i32,
}

pub fn encode_statuses_body(request: &StatusQuery) -> serde_json::Value {
    serde_json::Value::Array(request.ids().iter().map(|&id| id.into()).collect())
}

/// Decode `[{"messageId": .., "status": ..}, ..]`; `messageId` becomes [`SentMessageStatus::id`].
pub fn decode_statuses_json_response(
    json: &str,
) -> Result<Vec<SentMessageStatus>, TransportError> {
    let parsed: Vec<MessageStatusJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|item| SentMessageStatus {
            id: item.message_id,
            status: StatusCode::new(item.status),
        })
        .collect())
}
