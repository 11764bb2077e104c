use tracing::debug;

use super::{HttpMethod, SapakClient, SapakError};
use crate::domain::{
    FindMessagesQuery, PeerToPeerBatch, ReceivedMessage, SendMessage, SendPeerToPeer,
    SentMessageStatus, StatusQuery,
};

const SEND_PATH: &str = "messages";
const PEER_TO_PEER_PATH: &str = "messages/p2p";
const STATUSES_PATH: &str = "messages/statuses";
const FIND_PATH: &str = "messages/find";

#[derive(Debug, Clone, Copy)]
/// Message endpoints.
///
/// Every method issues exactly one HTTP request. Batch limits are checked before
/// anything is serialized, so [`SapakError::InvalidInput`] never reaches the network.
pub struct MessageResource<'a> {
    client: &'a SapakClient,
}

impl<'a> MessageResource<'a> {
    pub(crate) fn new(client: &'a SapakClient) -> Self {
        Self { client }
    }

    /// Send one text to many recipients (`POST messages`).
    ///
    /// Returns one status per recipient, in the order returned by the API.
    pub async fn send(&self, message: SendMessage) -> Result<Vec<SentMessageStatus>, SapakError> {
        let body = self
            .client
            .execute(HttpMethod::Post, SEND_PATH, Vec::new(), Some(message.to_json()))
            .await?;

        let statuses = crate::transport::decode_sent_statuses_json_response(&body)
            .map_err(|err| SapakError::MalformedResponse(Box::new(err)))?;
        debug!(
            recipients = message.to().len(),
            statuses = statuses.len(),
            "sent message"
        );
        Ok(statuses)
    }

    /// Send a batch of individual messages (`POST messages/p2p`).
    ///
    /// Errors:
    /// - [`SapakError::InvalidInput`] when the batch is empty or holds more than 100 items.
    pub async fn send_peer_to_peer(
        &self,
        messages: Vec<SendPeerToPeer>,
    ) -> Result<Vec<SentMessageStatus>, SapakError> {
        let batch = PeerToPeerBatch::new(messages)?;
        self.send_peer_to_peer_batch(&batch).await
    }

    /// Send an already validated peer-to-peer batch.
    pub async fn send_peer_to_peer_batch(
        &self,
        batch: &PeerToPeerBatch,
    ) -> Result<Vec<SentMessageStatus>, SapakError> {
        let body = self
            .client
            .execute(
                HttpMethod::Post,
                PEER_TO_PEER_PATH,
                Vec::new(),
                Some(batch.to_json()),
            )
            .await?;

        let statuses = crate::transport::decode_sent_statuses_json_response(&body)
            .map_err(|err| SapakError::MalformedResponse(Box::new(err)))?;
        debug!(
            items = batch.len(),
            statuses = statuses.len(),
            "sent peer-to-peer batch"
        );
        Ok(statuses)
    }

    /// Fetch delivery statuses for up to 100 message ids (`POST messages/statuses`).
    ///
    /// Errors:
    /// - [`SapakError::InvalidInput`] when `ids` is empty or longer than 100.
    pub async fn get_statuses(
        &self,
        ids: Vec<i64>,
    ) -> Result<Vec<SentMessageStatus>, SapakError> {
        let query = StatusQuery::new(ids)?;
        self.get_statuses_for(&query).await
    }

    /// Fetch delivery statuses for an already validated query.
    pub async fn get_statuses_for(
        &self,
        query: &StatusQuery,
    ) -> Result<Vec<SentMessageStatus>, SapakError> {
        let body = self
            .client
            .execute(
                HttpMethod::Post,
                STATUSES_PATH,
                Vec::new(),
                Some(query.to_json()),
            )
            .await?;

        let statuses = crate::transport::decode_statuses_json_response(&body)
            .map_err(|err| SapakError::MalformedResponse(Box::new(err)))?;
        debug!(
            ids = query.ids().len(),
            statuses = statuses.len(),
            "fetched message statuses"
        );
        Ok(statuses)
    }

    /// Find received messages (`GET messages/find`).
    ///
    /// Errors:
    /// - [`SapakError::MalformedResponse`] when a message date is not a valid Jalali timestamp.
    pub async fn find(
        &self,
        query: &FindMessagesQuery,
    ) -> Result<Vec<ReceivedMessage>, SapakError> {
        let body = self
            .client
            .execute(HttpMethod::Get, FIND_PATH, query.to_query(), None)
            .await?;

        let messages = crate::transport::decode_find_messages_json_response(&body)
            .map_err(|err| SapakError::MalformedResponse(Box::new(err)))?;
        debug!(messages = messages.len(), "found received messages");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::client::ErrorKind;
    use crate::client::fake::FakeTransport;
    use crate::domain::{FindMessagesOptions, SendOptions, StatusCode, ValidationError};

    use super::*;

    fn message() -> SendMessage {
        SendMessage::new("985000", ["98912..."], "Test Body", SendOptions::default()).unwrap()
    }

    #[tokio::test]
    async fn send_posts_body_and_maps_statuses() {
        let transport = FakeTransport::new(200, r#"[{"id":12345,"status":1}]"#);
        let client = transport.client("TEST_API_KEY");

        let statuses = client.messages().send(message()).await.unwrap();
        assert_eq!(
            statuses,
            vec![SentMessageStatus {
                id: 12345,
                status: StatusCode::new(1)
            }]
        );
        assert_eq!(statuses[0].status_text(), "Delivered to handset");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/messages");
        assert_eq!(request.header("X-API-KEY"), Some("TEST_API_KEY"));
        assert_eq!(
            request.json,
            Some(json!({
                "from": "985000",
                "to": ["98912..."],
                "text": "Test Body",
                "isFlash": false,
                "sendAt": null,
            }))
        );
    }

    #[tokio::test]
    async fn send_maps_unauthorized_to_authentication_error() {
        let transport = FakeTransport::new(401, r#"{"message":"Invalid API Key"}"#);
        let client = transport.client("INVALID_KEY");

        let err = client.messages().send(message()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.api_message(), Some("Invalid API Key"));
    }

    #[tokio::test]
    async fn send_maps_bad_request_and_unprocessable_to_validation_error() {
        for status in [400, 422] {
            let transport = FakeTransport::new(status, r#"{"message":"\"text\" is required"}"#);
            let client = transport.client("TEST_API_KEY");

            let err = client.messages().send(message()).await.unwrap_err();
            match err {
                SapakError::Validation {
                    status: got,
                    message,
                } => {
                    assert_eq!(got, status);
                    assert_eq!(message, "\"text\" is required");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn send_maps_server_error_to_api_error() {
        let transport = FakeTransport::new(500, r#"{"message":"Internal Server Error"}"#);
        let client = transport.client("TEST_API_KEY");

        let err = client.messages().send(message()).await.unwrap_err();
        assert!(matches!(
            &err,
            SapakError::Api { status: 500, message } if message == "Internal Server Error"
        ));
    }

    #[tokio::test]
    async fn send_defaults_message_for_non_json_error_body() {
        let transport = FakeTransport::new(502, "<html>Bad Gateway</html>");
        let client = transport.client("TEST_API_KEY");

        let err = client.messages().send(message()).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.api_message(), Some("Unknown API Error"));
    }

    #[tokio::test]
    async fn send_maps_invalid_json_to_malformed_response() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = transport.client("TEST_API_KEY");

        let err = client.messages().send(message()).await.unwrap_err();
        assert!(matches!(err, SapakError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn send_peer_to_peer_posts_array_of_items() {
        let transport = FakeTransport::new(
            200,
            r#"[{"id":98765,"status":1},{"id":98766,"status":2}]"#,
        );
        let client = transport.client("TEST_API_KEY");

        let statuses = client
            .messages()
            .send_peer_to_peer(vec![
                SendPeerToPeer::new("985000", "98912111", "Hello 1", None).unwrap(),
                SendPeerToPeer::new("985000", "98912222", "Hello 2", None).unwrap(),
            ])
            .await
            .unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].id, 98765);
        assert_eq!(statuses[1].status, StatusCode::new(2));

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/v1/messages/p2p");
        assert_eq!(
            request.json,
            Some(json!([
                {"sender": "985000", "recipient": "98912111", "message": "Hello 1", "sendAt": null},
                {"sender": "985000", "recipient": "98912222", "message": "Hello 2", "sendAt": null}
            ]))
        );
    }

    #[tokio::test]
    async fn send_peer_to_peer_checks_batch_size_before_network() {
        let transport = FakeTransport::new(200, "[]");
        let client = transport.client("TEST_API_KEY");
        let item = SendPeerToPeer::new("985000", "98912111", "Hello", None).unwrap();

        let err = client
            .messages()
            .send_peer_to_peer(Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);

        let err = client
            .messages()
            .send_peer_to_peer(vec![item; 101])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SapakError::InvalidInput(ValidationError::TooManyItems { actual: 101, .. })
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn get_statuses_validates_ids_and_posts_bare_array() {
        let transport = FakeTransport::new(
            200,
            r#"[{"messageId":1,"status":1},{"messageId":2,"status":9},{"messageId":3,"status":99}]"#,
        );
        let client = transport.client("TEST_API_KEY");

        let err = client.messages().get_statuses(Vec::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        let err = client
            .messages()
            .get_statuses((1..=101).collect())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(transport.request_count(), 0);

        let statuses = client.messages().get_statuses(vec![1, 2, 3]).await.unwrap();
        assert_eq!(transport.request_count(), 1);
        assert_eq!(
            statuses.iter().map(|it| it.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(statuses[1].status_text(), "Queued for sending");
        assert_eq!(statuses[2].status_text(), "Undefined Status Code");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/messages/statuses");
        assert_eq!(request.json, Some(json!([1, 2, 3])));
    }

    #[tokio::test]
    async fn find_sends_jalali_query_and_converts_dates() {
        let json = r#"
        [
          {
            "id": 123,
            "date": "1404/08/16 01:14:40",
            "body": "Hello",
            "fromNumber": "98912...",
            "toNumber": "985000"
          }
        ]
        "#;
        let transport = FakeTransport::new(200, json);
        let client = transport.client("TEST_API_KEY");

        let from_date = NaiveDate::from_ymd_opt(2023, 10, 30)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let query = FindMessagesQuery::new(FindMessagesOptions {
            from_date: Some(from_date),
            ..Default::default()
        })
        .unwrap();

        let messages = client.messages().find(&query).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 123);
        assert_eq!(
            messages[0].received_at,
            NaiveDate::from_ymd_opt(2025, 11, 7)
                .unwrap()
                .and_hms_opt(1, 14, 40)
                .unwrap()
        );

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/v1/messages/find");
        assert_eq!(
            request.query,
            vec![("fromDate".to_owned(), "1402-08-08 10:00:00".to_owned())]
        );
        assert!(request.json.is_none());
    }

    #[tokio::test]
    async fn find_maps_bad_date_to_malformed_response() {
        let json = r#"[{"id":1,"date":"yesterday","body":"x","fromNumber":"1","toNumber":"2"}]"#;
        let transport = FakeTransport::new(200, json);
        let client = transport.client("TEST_API_KEY");

        let err = client
            .messages()
            .find(&FindMessagesQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SapakError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn find_maps_not_found_without_message() {
        let transport = FakeTransport::new(404, "");
        let client = transport.client("TEST_API_KEY");

        let err = client
            .messages()
            .find(&FindMessagesQuery::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.api_message(), Some("endpoint not found: messages/find"));
    }
}
