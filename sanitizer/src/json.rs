//! Hand-off to `serde_json`.
//!
//! Both functions sanitize first and serialize second, so the original values
//! of sensitive fields never reach the serializer.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::engine::{sanitize, Sanitize, SanitizeOptions};

/// Sanitizes `value` in place, then converts it to a `serde_json::Value`.
pub fn to_sanitized_json<T>(value: &mut T, options: &SanitizeOptions) -> serde_json::Result<JsonValue>
where
    T: Sanitize + Serialize + ?Sized,
{
    sanitize(value, options);
    serde_json::to_value(&*value)
}

/// Sanitizes `value` in place, then serializes it to a JSON string.
pub fn to_sanitized_string<T>(value: &mut T, options: &SanitizeOptions) -> serde_json::Result<String>
where
    T: Sanitize + Serialize + ?Sized,
{
    sanitize(value, options);
    serde_json::to_string(&*value)
}
