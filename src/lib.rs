//! Typed Rust client for the Sapak SMS HTTP API.
//!
//! The crate is split into a domain layer of validated request/response types, a
//! private transport layer for wire-format quirks (camelCase keys, Jalali dates),
//! and a small client layer that issues requests and maps HTTP failures to
//! [`SapakError`].
//!
//! ```rust,no_run
//! use sapak::{ApiKey, SapakClient, SendMessage, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sapak::SapakError> {
//!     let client = SapakClient::new(ApiKey::new("...")?)?;
//!     let message = SendMessage::new("985000", ["98912..."], "hello", SendOptions::default())?;
//!     for status in client.messages().send(message).await? {
//!         println!("{}: {}", status.id, status.status_text());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AccountResource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ErrorKind, HttpMethod, HttpRequest,
    HttpResponse, HttpTransport, MessageResource, ReqwestTransport, SapakClient,
    SapakClientBuilder, SapakError,
};
pub use domain::{
    AccountCredit, ApiKey, FindMessagesOptions, FindMessagesQuery, JalaliDateTime,
    KnownStatusCode, PeerToPeerBatch, ReceivedMessage, SendAt, SendMessage, SendOptions,
    SendPeerToPeer, SentMessageStatus, StatusCode, StatusQuery, ValidationError,
};
