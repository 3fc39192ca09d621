use std::time::Duration;

use futures_core::future::BoxFuture;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::FeedConfig;
use crate::fetch::error::FetchError;
use crate::fetch::SectionSource;
use crate::model::{Payload, Section};

/// Section source backed by a single HTTP GET per fetch.
///
/// No headers, auth or retries. Each call is one request.
#[derive(Debug, Clone)]
pub struct HttpSectionSource {
    client: Client,
    request_timeout: Option<Duration>,
}

impl HttpSectionSource {
    /// Build a source from feed settings.
    ///
    /// `timeout_seconds = 0` leaves requests without an overall timeout.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FetchError> {
        let request_timeout = match config.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(
            Duration::from_secs(config.connect_timeout_seconds),
            request_timeout,
        )
    }

    pub fn new(
        connect_timeout: Duration,
        request_timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            request_timeout,
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Section>, FetchError> {
        // Reject before touching the network.
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match self.request_timeout {
            Some(limit) => match timeout(limit, self.do_fetch(parsed)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout {
                    duration_ms: limit.as_millis() as u64,
                }),
            },
            None => self.do_fetch(parsed).await,
        }
    }

    async fn do_fetch(&self, url: Url) -> Result<Vec<Section>, FetchError> {
        let url_str = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url_str.clone(),
            source: e,
        })?;

        let payload = Payload::from_slice(&body).map_err(FetchError::Decode)?;

        tracing::debug!(
            url = %url_str,
            bytes = body.len(),
            sections = payload.sections.len(),
            "Decoded sections payload"
        );

        Ok(payload.into_sections())
    }
}

impl SectionSource for HttpSectionSource {
    fn fetch_sections<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Section>, FetchError>> {
        Box::pin(self.fetch(url))
    }
}
