//! Result of a single request, before any domain interpretation.

use crate::error::RequestFailure;

use serde::de::DeserializeOwned;

/// Unread successful response.
///
/// The body is only pulled off the wire when a caller asks for it.
#[derive(Debug)]
pub struct ResponsePayload {
    response: reqwest::Response,
}

impl ResponsePayload {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// Read the whole body as text.
    pub async fn text(self) -> Result<String, reqwest::Error> {
        self.response.text().await
    }

    /// Read the body and parse it as JSON.
    ///
    /// Transport errors while reading and parse errors are both reported as
    /// a plain message; the caller decides how to classify them.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, String> {
        let body = self.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }
}

/// Tagged outcome of one request.
#[derive(Debug)]
pub enum RequestOutcome {
    Success(ResponsePayload),
    Failure(RequestFailure),
}

impl RequestOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    /// Empty on success, non-empty on failure.
    pub fn message(&self) -> &str {
        match self {
            RequestOutcome::Success(_) => "",
            RequestOutcome::Failure(failure) => &failure.message,
        }
    }

    pub fn payload(&self) -> Option<&ResponsePayload> {
        match self {
            RequestOutcome::Success(payload) => Some(payload),
            RequestOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<ResponsePayload, RequestFailure> {
        match self {
            RequestOutcome::Success(payload) => Ok(payload),
            RequestOutcome::Failure(failure) => Err(failure),
        }
    }
}
