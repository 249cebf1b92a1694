mod bare;
mod error;
mod reqwest;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::StubHttpClient;
pub use self::{
    bare::{BareHttpClient, BareResponse},
    error::HttpClientError,
    reqwest::ReqwestHttpClient,
};
use crate::config::HttpConfig;
use http::{StatusCode, header::CONTENT_TYPE};
use log::debug;
use tokio::time::timeout;
use url::Url;

const HTML_CONTENT_TYPE: &str = "text/html";

/// An HTTP client fetching HTML documents.
///
/// The client only fetches documents. Their bodies are handed over to the
/// parser as they are.
pub struct HttpClient {
    client: Box<dyn BareHttpClient>,
    config: HttpConfig,
}

impl HttpClient {
    /// Creates an HTTP client.
    pub fn new(client: impl BareHttpClient + 'static, config: HttpConfig) -> Self {
        Self {
            client: Box::new(client),
            config,
        }
    }

    /// Fetches a body of a document.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, HttpClientError> {
        let response = if let Some(duration) = self.config.timeout() {
            timeout(duration, self.client.get(url)).await??
        } else {
            self.client.get(url).await?
        };

        if response.status != StatusCode::OK {
            return Err(HttpClientError::InvalidStatus(response.status));
        }

        if self.config.accept_html_only() {
            let content_type = response
                .headers
                .get(CONTENT_TYPE)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .unwrap_or_default();

            if !content_type.starts_with(HTML_CONTENT_TYPE) {
                return Err(HttpClientError::InvalidContentType(content_type.into()));
            }
        }

        debug!("fetched {} bytes from {}", response.body.len(), response.url);

        Ok(response.body)
    }
}
