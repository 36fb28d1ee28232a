use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};

/// Replays one scripted outcome and records every request it receives.
pub(crate) struct ScriptedTransport {
    outcome: Result<HttpResponse, TransportError>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse::new(status, body)),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail(message: &str) -> Self {
        Self {
            outcome: Err(TransportError::new(message)),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.outcome.clone()
    }
}
