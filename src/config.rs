mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::{parse_config, read_config},
};
use crate::html_parser::ParserOptions;
use core::time::Duration;
use http::HeaderMap;
use url::Url;

/// A default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// A default user agent.
pub const DEFAULT_USER_AGENT: &str = "fitchner";

/// A configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    parser: ParserOptions,
    http: HttpConfig,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(parser: ParserOptions, http: HttpConfig) -> Self {
        Self { parser, http }
    }

    /// Returns parser options.
    pub const fn parser(&self) -> &ParserOptions {
        &self.parser
    }

    /// Returns an HTTP configuration.
    pub const fn http(&self) -> &HttpConfig {
        &self.http
    }
}

/// An HTTP configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpConfig {
    accept_html_only: bool,
    headers: HeaderMap,
    proxy: Option<Url>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl HttpConfig {
    /// Creates an HTTP configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether only HTML documents are accepted.
    pub const fn accept_html_only(&self) -> bool {
        self.accept_html_only
    }

    /// Returns headers attached to HTTP requests.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a proxy URL.
    pub const fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    /// Returns a timeout.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns a user agent.
    #[allow(clippy::missing_const_for_fn)]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sets whether only HTML documents are accepted.
    pub const fn set_accept_html_only(mut self, accept: bool) -> Self {
        self.accept_html_only = accept;
        self
    }

    /// Sets request headers.
    pub fn set_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a proxy URL.
    pub fn set_proxy(mut self, proxy: Option<Url>) -> Self {
        self.proxy = proxy;
        self
    }

    /// Sets a timeout.
    pub const fn set_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// Sets a user agent.
    pub fn set_user_agent(mut self, agent: String) -> Self {
        self.user_agent = agent;
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            accept_html_only: true,
            headers: Default::default(),
            proxy: None,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default() {
        let config = Config::default();

        assert_eq!(config.parser().max_input_size(), None);
        assert!(config.http().accept_html_only());
        assert!(config.http().headers().is_empty());
        assert_eq!(config.http().proxy(), None);
        assert_eq!(config.http().timeout(), Some(DEFAULT_TIMEOUT));
        assert_eq!(config.http().user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn set_http_options() {
        let proxy = Url::parse("http://localhost:8080").unwrap();
        let config = HttpConfig::new()
            .set_accept_html_only(false)
            .set_proxy(Some(proxy.clone()))
            .set_timeout(None)
            .set_user_agent("foo".into());

        assert!(!config.accept_html_only());
        assert_eq!(config.proxy(), Some(&proxy));
        assert_eq!(config.timeout(), None);
        assert_eq!(config.user_agent(), "foo");
    }
}
