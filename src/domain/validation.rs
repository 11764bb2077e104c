use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    EmptyItem {
        field: &'static str,
        index: usize,
    },
    TooManyRecipients {
        max: usize,
        actual: usize,
    },
    TooManyItems {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    PageSizeExceeded {
        max: u32,
        actual: u32,
    },
    NotPositive {
        field: &'static str,
    },
    DateOutOfRange {
        field: &'static str,
    },
    InvalidSendAtFormat {
        input: String,
    },
    SendAtInPast {
        input: String,
    },
    SendAtTooFarInFuture {
        input: String,
    },
    InvalidBaseUrl {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::EmptyItem { field, index } => {
                write!(f, "{field}[{index}] must not be empty")
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::TooManyItems { field, max, actual } => {
                write!(f, "too many {field}: {actual} (max {max})")
            }
            Self::PageSizeExceeded { max, actual } => {
                write!(f, "page size cannot exceed {max}: {actual}")
            }
            Self::NotPositive { field } => write!(f, "{field} must be greater than zero"),
            Self::DateOutOfRange { field } => {
                write!(f, "{field} is outside the supported calendar range")
            }
            Self::InvalidSendAtFormat { input } => write!(
                f,
                "invalid sendAt format: {input} (expected RFC3339, e.g. 2024-10-25T10:30:00+03:30)"
            ),
            Self::SendAtInPast { input } => write!(f, "sendAt cannot be in the past: {input}"),
            Self::SendAtTooFarInFuture { input } => write!(
                f,
                "sendAt cannot be more than one year in the future: {input}"
            ),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
