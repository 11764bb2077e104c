//! Transport layer: wire-format details (JSON bodies, query pairs, Jalali date strings).

mod credit;
mod error;
mod find_messages;
mod peer_to_peer;
mod send_message;
mod statuses;

pub use credit::decode_credit_json_response;
pub use error::decode_error_message;
pub use find_messages::{decode_find_messages_json_response, encode_find_messages_query};
pub use peer_to_peer::{encode_peer_to_peer_body, encode_peer_to_peer_item};
pub use send_message::{decode_sent_statuses_json_response, encode_send_message_body};
pub use statuses::{decode_statuses_json_response, encode_statuses_body};
