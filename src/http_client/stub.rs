use super::{BareHttpClient, BareResponse, HttpClientError};
use async_trait::async_trait;
use core::time::Duration;
use std::collections::HashMap;
use tokio::time::sleep;
use url::Url;

#[derive(Debug, Default)]
pub struct StubHttpClient {
    results: HashMap<String, Result<BareResponse, HttpClientError>>,
    delay: Duration,
}

impl StubHttpClient {
    pub fn new(results: HashMap<String, Result<BareResponse, HttpClientError>>) -> Self {
        Self {
            results,
            delay: Default::default(),
        }
    }

    pub const fn set_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl BareHttpClient for StubHttpClient {
    async fn get(&self, url: &Url) -> Result<BareResponse, HttpClientError> {
        sleep(self.delay).await;

        self.results
            .get(url.as_str())
            .expect("stub response")
            .clone()
    }
}
