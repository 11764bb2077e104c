//! Domain layer: strong types with validation and invariants (no I/O).

mod calendar;
mod request;
mod response;
mod schedule;
mod validation;
mod value;

pub use calendar::{JalaliDateTime, is_leap_year};
pub use request::{
    FIND_MESSAGES_MAX_PAGE_SIZE, FindMessagesOptions, FindMessagesQuery,
    PEER_TO_PEER_MAX_MESSAGES, PeerToPeerBatch, SEND_MESSAGE_MAX_RECIPIENTS,
    STATUS_QUERY_MAX_IDS, SendMessage, SendOptions, SendPeerToPeer, StatusQuery,
};
pub use response::{AccountCredit, ReceivedMessage, SentMessageStatus};
pub use schedule::SendAt;
pub use validation::ValidationError;
pub use value::{ApiKey, KnownStatusCode, StatusCode};
