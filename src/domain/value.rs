use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Sapak API key, sent in the `X-API-KEY` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by the API (`X-API-KEY`).
    pub const HEADER: &'static str = "X-API-KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status code reported for a sent message.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Label returned by [`StatusCode::label`] for codes outside the known set.
    pub const UNDEFINED_LABEL: &'static str = "Undefined Status Code";

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the API.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Human-readable label. Total: unknown codes yield [`StatusCode::UNDEFINED_LABEL`].
    pub fn label(self) -> &'static str {
        self.known()
            .map_or(Self::UNDEFINED_LABEL, KnownStatusCode::label)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery statuses documented by the API.
pub enum KnownStatusCode {
    Delivered,
    Undelivered,
    NotReachedOperator,
    PendingInOperator,
    DeliveredToOperator,
    Unknown,
    Sent,
    Blacklisted,
    Queued,
    NotSent,
    Sending,
    AwaitingConfirmation,
    InvalidRecipient,
    RecipientBlocked,
    Halted,
    RejectedByOperator,
    Unsubscribed,
    OutsideHours,
}

impl KnownStatusCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::Delivered,
            2 => Self::Undelivered,
            3 => Self::NotReachedOperator,
            4 => Self::PendingInOperator,
            5 => Self::DeliveredToOperator,
            6 => Self::Unknown,
            7 => Self::Sent,
            8 => Self::Blacklisted,
            9 => Self::Queued,
            10 => Self::NotSent,
            11 => Self::Sending,
            12 => Self::AwaitingConfirmation,
            13 => Self::InvalidRecipient,
            14 => Self::RecipientBlocked,
            15 => Self::Halted,
            16 => Self::RejectedByOperator,
            17 => Self::Unsubscribed,
            18 => Self::OutsideHours,
            _ => return None,
        })
    }

    /// Integer code used on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::Delivered => 1,
            Self::Undelivered => 2,
            Self::NotReachedOperator => 3,
            Self::PendingInOperator => 4,
            Self::DeliveredToOperator => 5,
            Self::Unknown => 6,
            Self::Sent => 7,
            Self::Blacklisted => 8,
            Self::Queued => 9,
            Self::NotSent => 10,
            Self::Sending => 11,
            Self::AwaitingConfirmation => 12,
            Self::InvalidRecipient => 13,
            Self::RecipientBlocked => 14,
            Self::Halted => 15,
            Self::RejectedByOperator => 16,
            Self::Unsubscribed => 17,
            Self::OutsideHours => 18,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered to handset",
            Self::Undelivered => "Not delivered to handset",
            Self::NotReachedOperator => "Did not reach operator",
            Self::PendingInOperator => "Pending in operator",
            Self::DeliveredToOperator => "Delivered to operator",
            Self::Unknown => "Unknown",
            Self::Sent => "Sent",
            Self::Blacklisted => "Blacklisted by operator",
            Self::Queued => "Queued for sending",
            Self::NotSent => "Not sent",
            Self::Sending => "Sending",
            Self::AwaitingConfirmation => "Awaiting confirmation",
            Self::InvalidRecipient => "Invalid recipient",
            Self::RecipientBlocked => "Recipient blocked",
            Self::Halted => "Halted",
            Self::RejectedByOperator => "Rejected by operator",
            Self::Unsubscribed => "Recipient unsubscribed",
            Self::OutsideHours => "Outside allowed sending hours",
        }
    }
}
