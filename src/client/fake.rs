use std::io;
use std::sync::{Arc, Mutex};

use super::{
    BoxFuture, HttpRequest, HttpResponse, HttpTransport, SapakClient, SapakClientBuilder,
    TransportFailure,
};
use crate::domain::ApiKey;

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response,
            })),
        }
    }

    pub(crate) fn client(&self, api_key: &str) -> SapakClient {
        SapakClientBuilder::new(ApiKey::new(api_key).unwrap())
            .base_url("https://example.invalid/v1/")
            .transport(Arc::new(self.clone()))
            .build()
            .unwrap()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.response.clone()
            };
            response.map_err(|message| {
                Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, message))
                    as TransportFailure
            })
        })
    }
}
