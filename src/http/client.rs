//! Low-level HTTP client: `BoardHttp`.
//!
//! Issues one GET per call and folds every result into a `RequestOutcome`.
//! Conversion to domain types happens in the accessor layer.

use crate::error::RequestFailure;
use crate::http::outcome::{RequestOutcome, ResponsePayload};

use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for the board REST API.
#[derive(Clone)]
pub struct BoardHttp {
    base_url: String,
    client: Client,
}

impl BoardHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base_url><path>`.
    ///
    /// Never returns an error: transport failures and non-success statuses
    /// both come back as `RequestOutcome::Failure`. The body of a failed
    /// response is not read.
    pub async fn perform_get(&self, path: &str) -> RequestOutcome {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Requesting GET {}", path);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(error = %e, "Transport failure for GET {}", path);
                return RequestOutcome::Failure(RequestFailure::transport(e.to_string()));
            }
        };

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "Response for GET {}", path);

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            return RequestOutcome::Failure(RequestFailure::protocol(status.as_u16(), reason));
        }

        RequestOutcome::Success(ResponsePayload::new(resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let http = BoardHttp::new("http://localhost:3333/", Duration::from_secs(1)).unwrap();
        assert_eq!(http.base_url(), "http://localhost:3333");
    }

    #[test]
    fn test_clone_keeps_base_url() {
        let http = BoardHttp::new("http://localhost:3333", Duration::from_secs(1)).unwrap();
        assert_eq!(http.clone().base_url(), http.base_url());
    }

    #[tokio::test]
    async fn test_unparseable_url_is_transport_failure() {
        let http = BoardHttp::new("not a url", Duration::from_secs(1)).unwrap();
        let outcome = http.perform_get("/api/user").await;
        assert!(!outcome.is_ok());
        assert!(!outcome.message().is_empty());
    }
}
