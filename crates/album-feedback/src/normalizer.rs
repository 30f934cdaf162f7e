//! Reduces a [`Failure`] to the single message shown to the user.
//!
//! Branches are tried in a fixed priority order and the first match wins:
//!
//! 1. no failure value: the caller's fallback;
//! 2. rate-limit response (429): a wait notice, body ignored;
//! 3. string body: returned verbatim;
//! 4. object body: `message`, `error`, `detail`, then `errors[0]`;
//! 5. native error without response: connectivity notice or its message;
//! 6. top-level message that is not blank;
//! 7. message of the native error wrapping a response;
//! 8. the caller's fallback.

use serde_json::{Map, Value};

use album_core::config::MessageCatalog;
use album_core::failure::{Failure, ResponseFailure};

/// Wait time announced when a rate-limit response has no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 6;

/// Body fields probed for a message, in priority order.
const MESSAGE_FIELDS: [&str; 3] = ["message", "error", "detail"];

/// Resolve the message to display for `failure`.
///
/// The handled marker is looked through: suppressing already reported
/// failures is the job of [`notify_failure`](crate::reporter::notify_failure).
pub fn resolve_message(failure: &Failure, fallback: &str, catalog: &MessageCatalog) -> String {
    match failure {
        Failure::Absent => fallback.to_string(),
        Failure::Handled(inner) => resolve_message(inner, fallback, catalog),
        Failure::Response(response) => resolve_response(response, fallback, catalog),
        Failure::Native { .. } if failure.is_network_failure() => {
            catalog.connection_error.clone()
        }
        Failure::Native { message } => message.clone(),
        Failure::Api { message } => message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string(),
        Failure::Text(_) => fallback.to_string(),
    }
}

fn resolve_response(
    response: &ResponseFailure,
    fallback: &str,
    catalog: &MessageCatalog,
) -> String {
    if response.is_rate_limited() {
        return catalog.rate_limited(retry_after_seconds(response.retry_after()));
    }

    match response.body() {
        Some(Value::String(body)) => return body.clone(),
        Some(Value::Object(fields)) => {
            if let Some(message) = probe_body(fields) {
                return message.to_string();
            }
        }
        _ => {}
    }

    // The wrapping transport error is itself a native error, so its message
    // is returned even when blank.
    response
        .message()
        .map_or_else(|| fallback.to_string(), str::to_string)
}

fn probe_body(fields: &Map<String, Value>) -> Option<&str> {
    MESSAGE_FIELDS
        .iter()
        .filter_map(|name| fields.get(*name).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
        .or_else(|| match fields.get("errors") {
            Some(Value::Array(errors)) => errors.first().and_then(Value::as_str),
            _ => None,
        })
}

/// Seconds to wait before retrying, parsed from a raw `Retry-After` value.
///
/// Leading decimal digits are used (`"30s"` is 30); anything without them,
/// including HTTP dates and negative numbers, yields
/// [`DEFAULT_RETRY_AFTER_SECS`].
pub fn retry_after_seconds(raw: Option<&str>) -> u64 {
    raw.and_then(parse_leading_integer)
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn parse_leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
