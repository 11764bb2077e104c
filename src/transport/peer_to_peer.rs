use serde_json::json;

use crate::domain::{PeerToPeerBatch, SendAt, SendPeerToPeer};

pub fn encode_peer_to_peer_item(item: &SendPeerToPeer) -> serde_json::Value {
    json!({
        "sender": item.sender(),
        "recipient": item.recipient(),
        "message": item.message(),
        "sendAt": item.send_at().map(SendAt::as_str),
    })
}

pub fn encode_peer_to_peer_body(batch: &PeerToPeerBatch) -> serde_json::Value {
    serde_json::Value::Array(
        batch
            .messages()
            .iter()
            .map(encode_peer_to_peer_item)
            .collect(),
    )
}
