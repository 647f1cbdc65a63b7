//! HTTP transport for inquiry submission.

use async_trait::async_trait;
use ms_core::{InquiryPayload, InquiryTransport, TransportError};

/// reqwest-backed transport. One JSON POST per submission, no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl InquiryTransport for HttpTransport {
    async fn post_inquiry(
        &self,
        url: &str,
        payload: &InquiryPayload,
    ) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(response.status().as_u16())
    }
}
