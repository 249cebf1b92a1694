use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use http::StatusCode;

/// An HTTP client error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// An HTTP error.
    Http(Arc<str>),
    /// A content type other than HTML.
    InvalidContentType(Arc<str>),
    /// A status code other than OK.
    InvalidStatus(StatusCode),
    /// A timeout.
    Timeout(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::InvalidContentType(content_type) => {
                write!(formatter, "invalid content type \"{content_type}\"")
            }
            Self::InvalidStatus(status) => write!(formatter, "invalid status {status}"),
            Self::Timeout(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<tokio::time::error::Elapsed> for HttpClientError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        Self::Timeout(error.to_string().into())
    }
}
