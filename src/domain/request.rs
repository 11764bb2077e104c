use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::calendar::JalaliDateTime;
use crate::domain::schedule::SendAt;
use crate::domain::validation::ValidationError;

pub const SEND_MESSAGE_MAX_RECIPIENTS: usize = 100;
pub const PEER_TO_PEER_MAX_MESSAGES: usize = 100;
pub const STATUS_QUERY_MAX_IDS: usize = 100;
pub const FIND_MESSAGES_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub is_flash: bool,
    /// RFC3339 timestamp for a scheduled send.
    pub send_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One-to-many message (`POST messages`).
pub struct SendMessage {
    from: String,
    to: Vec<String>,
    text: String,
    is_flash: bool,
    send_at: Option<SendAt>,
}

impl SendMessage {
    pub const FROM_FIELD: &'static str = "from";
    pub const TO_FIELD: &'static str = "to";
    pub const TEXT_FIELD: &'static str = "text";

    /// Validate and build a message; `send_at` is checked against the current time.
    pub fn new<I>(
        from: impl Into<String>,
        to: I,
        text: impl Into<String>,
        options: SendOptions,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new_at(from, to, text, options, Utc::now())
    }

    /// Same as [`SendMessage::new`] with an explicit clock.
    pub fn new_at<I>(
        from: impl Into<String>,
        to: I,
        text: impl Into<String>,
        options: SendOptions,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let from = required_trimmed(from.into(), Self::FROM_FIELD)?;

        let to = to.into_iter().map(Into::into).collect::<Vec<String>>();
        if to.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::TO_FIELD,
            });
        }
        if to.len() > SEND_MESSAGE_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MESSAGE_MAX_RECIPIENTS,
                actual: to.len(),
            });
        }
        let to = to
            .into_iter()
            .enumerate()
            .map(|(index, recipient)| {
                let trimmed = recipient.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyItem {
                        field: Self::TO_FIELD,
                        index,
                    });
                }
                Ok(trimmed.to_owned())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let text = required_text(text.into(), Self::TEXT_FIELD)?;
        let send_at = SendAt::validate_optional(options.send_at, now)?;

        Ok(Self {
            from,
            to,
            text,
            is_flash: options.is_flash,
            send_at,
        })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_flash(&self) -> bool {
        self.is_flash
    }

    pub fn send_at(&self) -> Option<&SendAt> {
        self.send_at.as_ref()
    }

    /// JSON body as sent to the API.
    pub fn to_json(&self) -> serde_json::Value {
        crate::transport::encode_send_message_body(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single peer-to-peer item (`POST messages/p2p`); see [`PeerToPeerBatch`].
pub struct SendPeerToPeer {
    sender: String,
    recipient: String,
    message: String,
    send_at: Option<SendAt>,
}

impl SendPeerToPeer {
    pub const SENDER_FIELD: &'static str = "sender";
    pub const RECIPIENT_FIELD: &'static str = "recipient";
    pub const MESSAGE_FIELD: &'static str = "message";

    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
        send_at: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::new_at(sender, recipient, message, send_at, Utc::now())
    }

    pub fn new_at(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
        send_at: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let sender = required_trimmed(sender.into(), Self::SENDER_FIELD)?;
        let recipient = required_trimmed(recipient.into(), Self::RECIPIENT_FIELD)?;
        let message = required_text(message.into(), Self::MESSAGE_FIELD)?;
        let send_at = SendAt::validate_optional(send_at, now)?;

        Ok(Self {
            sender,
            recipient,
            message,
            send_at,
        })
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn send_at(&self) -> Option<&SendAt> {
        self.send_at.as_ref()
    }

    /// JSON object for this item inside the batch array.
    pub fn to_json(&self) -> serde_json::Value {
        crate::transport::encode_peer_to_peer_item(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Batch of peer-to-peer messages.
///
/// Invariant: `1..=PEER_TO_PEER_MAX_MESSAGES` items.
pub struct PeerToPeerBatch {
    messages: Vec<SendPeerToPeer>,
}

impl PeerToPeerBatch {
    pub const FIELD: &'static str = "messages";

    pub fn new(messages: Vec<SendPeerToPeer>) -> Result<Self, ValidationError> {
        check_batch_len(messages.len(), Self::FIELD, PEER_TO_PEER_MAX_MESSAGES)?;
        Ok(Self { messages })
    }

    pub fn messages(&self) -> &[SendPeerToPeer] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        crate::transport::encode_peer_to_peer_body(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message ids whose delivery status should be fetched (`POST messages/statuses`).
///
/// Invariant: `1..=STATUS_QUERY_MAX_IDS` ids.
pub struct StatusQuery {
    ids: Vec<i64>,
}

impl StatusQuery {
    pub const FIELD: &'static str = "ids";

    pub fn new(ids: Vec<i64>) -> Result<Self, ValidationError> {
        check_batch_len(ids.len(), Self::FIELD, STATUS_QUERY_MAX_IDS)?;
        Ok(Self { ids })
    }

    pub fn one(id: i64) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn to_json(&self) -> serde_json::Value {
        crate::transport::encode_statuses_body(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindMessagesOptions {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    /// Receiving number to filter by; blank values are ignored.
    pub phone_number: Option<String>,
    /// Lower bound, Gregorian wall-clock time in the API's time zone.
    pub from_date: Option<NaiveDateTime>,
    /// Upper bound, Gregorian wall-clock time in the API's time zone.
    pub to_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for received messages (`GET messages/find`).
///
/// Dates are converted to the Jalali calendar when the query is built.
pub struct FindMessagesQuery {
    page_number: Option<u32>,
    page_size: Option<u32>,
    phone_number: Option<String>,
    from_date: Option<JalaliDateTime>,
    to_date: Option<JalaliDateTime>,
}

impl FindMessagesQuery {
    pub const PAGE_NUMBER_FIELD: &'static str = "pageNumber";
    pub const PAGE_SIZE_FIELD: &'static str = "pageSize";
    pub const PHONE_NUMBER_FIELD: &'static str = "smsNumber";
    pub const FROM_DATE_FIELD: &'static str = "fromDate";
    pub const TO_DATE_FIELD: &'static str = "toDate";

    pub fn new(options: FindMessagesOptions) -> Result<Self, ValidationError> {
        if options.page_number == Some(0) {
            return Err(ValidationError::NotPositive {
                field: Self::PAGE_NUMBER_FIELD,
            });
        }
        match options.page_size {
            Some(0) => {
                return Err(ValidationError::NotPositive {
                    field: Self::PAGE_SIZE_FIELD,
                });
            }
            Some(size) if size > FIND_MESSAGES_MAX_PAGE_SIZE => {
                return Err(ValidationError::PageSizeExceeded {
                    max: FIND_MESSAGES_MAX_PAGE_SIZE,
                    actual: size,
                });
            }
            _ => {}
        }

        let phone_number = options
            .phone_number
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self {
            page_number: options.page_number,
            page_size: options.page_size,
            phone_number,
            from_date: to_jalali(options.from_date, Self::FROM_DATE_FIELD)?,
            to_date: to_jalali(options.to_date, Self::TO_DATE_FIELD)?,
        })
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn from_date(&self) -> Option<&JalaliDateTime> {
        self.from_date.as_ref()
    }

    pub fn to_date(&self) -> Option<&JalaliDateTime> {
        self.to_date.as_ref()
    }

    /// Query parameters as sent to the API; absent filters produce no pair at all.
    pub fn to_query(&self) -> Vec<(String, String)> {
        crate::transport::encode_find_messages_query(self)
    }
}

fn to_jalali(
    value: Option<NaiveDateTime>,
    field: &'static str,
) -> Result<Option<JalaliDateTime>, ValidationError> {
    value
        .map(|date| {
            JalaliDateTime::from_gregorian(date).ok_or(ValidationError::DateOutOfRange { field })
        })
        .transpose()
}

fn required_trimmed(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn required_text(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

fn check_batch_len(len: usize, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if len == 0 {
        return Err(ValidationError::Empty { field });
    }
    if len > max {
        return Err(ValidationError::TooManyItems {
            field,
            max,
            actual: len,
        });
    }
    Ok(())
}
