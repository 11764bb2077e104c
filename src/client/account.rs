use tracing::debug;

use super::{HttpMethod, SapakClient, SapakError};
use crate::domain::AccountCredit;

const CREDIT_PATH: &str = "users/me/credit";

#[derive(Debug, Clone, Copy)]
/// Account endpoints.
pub struct AccountResource<'a> {
    client: &'a SapakClient,
}

impl<'a> AccountResource<'a> {
    pub(crate) fn new(client: &'a SapakClient) -> Self {
        Self { client }
    }

    /// Fetch the current account credit (`GET users/me/credit`).
    ///
    /// Errors:
    /// - [`SapakError::Authentication`] for 401/403,
    /// - [`SapakError::MalformedResponse`] when `credit` is missing or not a non-negative number.
    pub async fn get_credit(&self) -> Result<AccountCredit, SapakError> {
        let body = self
            .client
            .execute(HttpMethod::Get, CREDIT_PATH, Vec::new(), None)
            .await?;

        let credit = crate::transport::decode_credit_json_response(&body)
            .map_err(|err| SapakError::MalformedResponse(Box::new(err)))?;
        debug!(credit = credit.credit, "fetched account credit");
        Ok(credit)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ErrorKind;
    use crate::client::fake::FakeTransport;

    use super::*;

    #[tokio::test]
    async fn get_credit_uses_credit_endpoint() {
        let transport = FakeTransport::new(200, r#"{"credit": 15000.75}"#);
        let client = transport.client("test_key");

        let credit = client.account().get_credit().await.unwrap();
        assert_eq!(credit.credit, 15000.75);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/v1/users/me/credit"
        );
        assert!(request.query.is_empty());
        assert!(request.json.is_none());
    }

    #[tokio::test]
    async fn get_credit_maps_missing_field_to_malformed_response() {
        let transport = FakeTransport::new(200, r#"{"balance": 10}"#);
        let client = transport.client("test_key");

        let err = client.account().get_credit().await.unwrap_err();
        assert!(matches!(err, SapakError::MalformedResponse(_)));
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[tokio::test]
    async fn get_credit_maps_forbidden_to_authentication_error() {
        let transport = FakeTransport::new(403, r#"{"message": "Forbidden"}"#);
        let client = transport.client("test_key");

        let err = client.account().get_credit().await.unwrap_err();
        match err {
            SapakError::Authentication { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
