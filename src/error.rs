//! Error handling

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Failures that can happen while building a profile card.
///
/// Every variant ends the request with an HTTP error response rather than a
/// partially drawn image.
#[derive(Debug)]
pub enum CardError {
    /// The provider or picture host could not be reached, answered with a
    /// non-success status, or no usable URL could be built.
    UpstreamFetch(String),
    /// An upstream response body could not be read.
    BodyRead(String),
    /// The provider response was not valid JSON.
    JsonDecode(serde_json::Error),
    /// The picture had an unsupported content type or could not be decoded.
    ImageDecode(String),
    /// A label font could not be read or parsed.
    Font(String),
    /// The finished card could not be encoded or sent.
    Encode(String),
}

impl CardError {
    /// The HTTP status returned to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardError::UpstreamFetch(_)
            | CardError::BodyRead(_)
            | CardError::JsonDecode(_)
            | CardError::ImageDecode(_) => StatusCode::BAD_GATEWAY,
            CardError::Font(_) | CardError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            CardError::UpstreamFetch(_) => "Failed to fetch from upstream provider",
            CardError::BodyRead(_) => "Failed to read upstream response",
            CardError::JsonDecode(_) => "Provider returned an unexpected response",
            CardError::ImageDecode(_) => "Profile picture could not be decoded",
            CardError::Font(_) => "Failed to load label font",
            CardError::Encode(_) => "Failed to encode image",
        }
    }
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpstreamFetch(reason) => write!(f, "Upstream fetch failed: {reason}"),
            Self::BodyRead(reason) => write!(f, "Failed to read response body: {reason}"),
            Self::JsonDecode(err) => write!(f, "Failed to parse provider JSON: {err}"),
            Self::ImageDecode(reason) => write!(f, "Failed to decode picture: {reason}"),
            Self::Font(reason) => write!(f, "Font error: {reason}"),
            Self::Encode(reason) => write!(f, "Failed to encode card: {reason}"),
        }
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonDecode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::JsonDecode(err)
    }
}

impl From<url::ParseError> for CardError {
    fn from(err: url::ParseError) -> Self {
        CardError::UpstreamFetch(err.to_string())
    }
}

impl From<axum::http::Error> for CardError {
    fn from(err: axum::http::Error) -> Self {
        CardError::Encode(err.to_string())
    }
}

impl IntoResponse for CardError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        tracing::error!("{}", self);
        let mut response =
            axum::response::Response::new(axum::body::Body::from(self.public_message()));
        *response.status_mut() = status;
        response
    }
}
