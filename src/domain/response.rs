use chrono::NaiveDateTime;

use crate::domain::value::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Account balance returned by `users/me/credit`.
pub struct AccountCredit {
    /// Remaining credit; always finite and non-negative.
    pub credit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery state of one message, as returned by the send and status endpoints.
pub struct SentMessageStatus {
    pub id: i64,
    pub status: StatusCode,
}

impl SentMessageStatus {
    /// Human-readable status; never fails, see [`StatusCode::label`].
    pub fn status_text(&self) -> &'static str {
        self.status.label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inbound message returned by `messages/find`.
pub struct ReceivedMessage {
    pub id: i64,
    /// Gregorian wall-clock time, converted from the API's Jalali timestamp.
    pub received_at: NaiveDateTime,
    pub body: String,
    pub from_number: String,
    pub to_number: String,
}
