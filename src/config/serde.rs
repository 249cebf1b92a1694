use super::{ConfigError, HttpConfig as CompiledHttpConfig};
use crate::html_parser::ParserOptions;
use alloc::collections::BTreeMap;
use duration_string::DurationString;
use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

/// A serializable configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    parser: Option<ParserConfig>,
    http: Option<HttpConfig>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParserConfig {
    max_input_size: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct HttpConfig {
    accept_html_only: Option<bool>,
    headers: Option<BTreeMap<String, String>>,
    proxy: Option<Url>,
    timeout: Option<DurationString>,
    user_agent: Option<String>,
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<super::Config, ConfigError> {
    let parser = config.parser.unwrap_or_default();
    let http = config.http.unwrap_or_default();
    let default = CompiledHttpConfig::default();

    Ok(super::Config::new(
        ParserOptions::new().set_max_input_size(parser.max_input_size),
        CompiledHttpConfig::new()
            .set_accept_html_only(
                http.accept_html_only
                    .unwrap_or(default.accept_html_only()),
            )
            .set_headers(
                http.headers
                    .iter()
                    .flatten()
                    .map(|(key, value)| {
                        Ok((HeaderName::try_from(key)?, HeaderValue::try_from(value)?))
                    })
                    .collect::<Result<_, ConfigError>>()?,
            )
            .set_proxy(http.proxy)
            .set_timeout(http.timeout.as_deref().copied().or(default.timeout()))
            .set_user_agent(
                http.user_agent
                    .unwrap_or_else(|| default.user_agent().into()),
            ),
    ))
}
