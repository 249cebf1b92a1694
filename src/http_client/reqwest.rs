use super::{BareHttpClient, BareResponse, HttpClientError};
use crate::config::HttpConfig;
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder, Proxy};
use url::Url;

/// An HTTP client based on [`reqwest`].
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let mut builder = ClientBuilder::new()
            .user_agent(config.user_agent())
            .default_headers(config.headers().clone());

        if let Some(url) = config.proxy() {
            builder = builder.proxy(Proxy::all(url.clone())?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl BareHttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<BareResponse, HttpClientError> {
        trace!("sending a request to {url}");

        let response = self.client.get(url.clone()).send().await?;

        trace!("got {} response from {url}", response.status());

        Ok(BareResponse {
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
            body: response.bytes().await?.to_vec(),
        })
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}
