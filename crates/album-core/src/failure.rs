//! Failure values produced by rejected API calls.
//!
//! A call to the album API can fail in several shapes: the server answers
//! with an error status and some body, the request never reaches the
//! server, or an upstream layer has already reported the problem. All of
//! them are represented by the closed [`Failure`] enum so that consumers
//! dispatch on a discriminant instead of probing fields.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorKind;

/// HTTP status used by the API when a client exceeds its request budget.
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Message carried by transport errors when the server is unreachable.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Substring found in messages of failed `fetch` calls.
pub const FETCH_FAILURE_MARKER: &str = "fetch";

/// Marker field set by the response interceptor once it has notified the user.
pub const HANDLED_MARKER_FIELD: &str = "_rateLimitHandled";

/// An error response received from the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseFailure {
    /// HTTP status, when the transport reported one.
    status: Option<u16>,
    /// Response headers keyed by lowercase name.
    headers: BTreeMap<String, String>,
    /// Decoded response body.
    body: Option<Value>,
    /// Message of the transport error that wrapped the response.
    message: Option<String>,
}

impl ResponseFailure {
    /// Creates a response failure with the given status and no body.
    pub fn new(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Adds a response header. Names are matched case-insensitively.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Sets the decoded response body.
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the message of the wrapping transport error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// HTTP status of the response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Looks up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Raw `Retry-After` header value.
    pub fn retry_after(&self) -> Option<&str> {
        self.header("retry-after")
    }

    /// Response body, if the server sent one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Message of the wrapping transport error.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the server rejected the request for exceeding its rate limit.
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(RATE_LIMIT_STATUS)
    }
}

impl fmt::Display for ResponseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "status {status}"),
            None => write!(f, "unknown status"),
        }
    }
}

/// Any value a failed API call hands back to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    /// No failure value at all.
    #[error("no failure value")]
    Absent,
    /// The server answered with an error response.
    #[error("request failed with {0}")]
    Response(ResponseFailure),
    /// A native error raised before any response was received.
    #[error("{message}")]
    Native {
        /// Error message.
        message: String,
    },
    /// A project-defined error object exposing a top-level message.
    #[error("{}", .message.as_deref().unwrap_or("API error"))]
    Api {
        /// Top-level message, when the object carries a string one.
        message: Option<String>,
    },
    /// A bare string.
    #[error("{0}")]
    Text(String),
    /// A failure that an upstream layer already reported to the user.
    #[error("{0} (already reported)")]
    Handled(Box<Failure>),
}

impl Failure {
    /// Creates a native error failure.
    pub fn native(message: impl Into<String>) -> Self {
        Self::Native {
            message: message.into(),
        }
    }

    /// Creates a project-defined API error failure.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: Some(message.into()),
        }
    }

    /// Marks this failure as already reported.
    pub fn into_handled(self) -> Self {
        match self {
            Self::Handled(_) => self,
            other => Self::Handled(Box::new(other)),
        }
    }

    /// Whether an upstream layer already reported this failure.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// The response this failure wraps, looking through the handled marker.
    pub fn response(&self) -> Option<&ResponseFailure> {
        match self {
            Self::Response(response) => Some(response),
            Self::Handled(inner) => inner.response(),
            _ => None,
        }
    }

    /// Whether this failure is a rate-limit rejection.
    pub fn is_rate_limited(&self) -> bool {
        self.response().is_some_and(ResponseFailure::is_rate_limited)
    }

    /// Whether this is a native error signalling that the server was unreachable.
    pub fn is_network_failure(&self) -> bool {
        match self {
            Self::Native { message } => is_network_message(message),
            Self::Handled(inner) => inner.is_network_failure(),
            _ => false,
        }
    }

    /// Classifies the failure into an application [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Absent => ErrorKind::Internal,
            Self::Response(response) => response
                .status
                .map_or(ErrorKind::ExternalService, ErrorKind::from_status),
            Self::Native { message } if is_network_message(message) => ErrorKind::Network,
            Self::Native { .. } => ErrorKind::Internal,
            Self::Api { .. } | Self::Text(_) => ErrorKind::ExternalService,
            Self::Handled(inner) => inner.kind(),
        }
    }

    /// Converts a serialized JavaScript-style error object into a failure.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) become [`Failure::Absent`].
    /// Objects with a `response` object become [`Failure::Response`];
    /// objects whose `name` ends in `Error` become [`Failure::Native`];
    /// every other object is a [`Failure::Api`]. A `_rateLimitHandled: true`
    /// field wraps the result in [`Failure::Handled`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Self::Absent,
            Value::Number(n) if n.as_f64() == Some(0.0) => Self::Absent,
            Value::String(s) if s.is_empty() => Self::Absent,
            Value::String(s) => Self::Text(s.clone()),
            Value::Object(obj) => {
                let message = obj
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned);

                let failure = if let Some(Value::Object(resp)) = obj.get("response") {
                    let mut response = ResponseFailure {
                        status: resp
                            .get("status")
                            .and_then(Value::as_u64)
                            .and_then(|s| u16::try_from(s).ok()),
                        body: resp.get("data").filter(|d| !d.is_null()).cloned(),
                        message,
                        ..ResponseFailure::default()
                    };
                    if let Some(Value::Object(headers)) = resp.get("headers") {
                        for (name, value) in headers {
                            let value = match value {
                                Value::String(s) => s.clone(),
                                Value::Null => continue,
                                other => other.to_string(),
                            };
                            response = response.with_header(name, value);
                        }
                    }
                    Self::Response(response)
                } else if obj
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.ends_with("Error"))
                {
                    Self::Native {
                        message: message.unwrap_or_default(),
                    }
                } else {
                    Self::Api { message }
                };

                if obj.get(HANDLED_MARKER_FIELD) == Some(&Value::Bool(true)) {
                    failure.into_handled()
                } else {
                    failure
                }
            }
            _ => Self::Api { message: None },
        }
    }
}

impl From<ResponseFailure> for Failure {
    fn from(response: ResponseFailure) -> Self {
        Self::Response(response)
    }
}

fn is_network_message(message: &str) -> bool {
    message == NETWORK_ERROR_MESSAGE || message.contains(FETCH_FAILURE_MARKER)
}
