use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use std::io;

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An invalid header name.
    HttpInvalidHeaderName(http::header::InvalidHeaderName),
    /// An invalid header value.
    HttpInvalidHeaderValue(http::header::InvalidHeaderValue),
    /// An I/O error while reading configuration.
    Io(io::Error),
    /// A TOML deserialization error.
    TomlDeserialize(::toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpInvalidHeaderName(error) => write!(formatter, "{error}"),
            Self::HttpInvalidHeaderValue(error) => write!(formatter, "{error}"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::TomlDeserialize(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for ConfigError {}

impl From<http::header::InvalidHeaderName> for ConfigError {
    fn from(error: http::header::InvalidHeaderName) -> Self {
        Self::HttpInvalidHeaderName(error)
    }
}

impl From<http::header::InvalidHeaderValue> for ConfigError {
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        Self::HttpInvalidHeaderValue(error)
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(error: ::toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
