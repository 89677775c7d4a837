//! `slog` integration.
//!
//! [`IntoSanitizedJson`] sanitizes a value, converts it to JSON and hands the
//! result to `slog` as a nested value. The original value is never what gets
//! logged. Logging cannot fail here: a value that does not convert to JSON is
//! logged as a placeholder string.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::engine::{sanitize, Sanitize, SanitizeOptions};

/// A `slog::Value` that emits an owned, already sanitized payload as structured
/// JSON.
///
/// If converting the sanitized value into JSON failed, the payload is a JSON
/// string describing the failure.
pub struct SanitizedJson {
    value: JsonValue,
}

impl SanitizedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for SanitizedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their sanitized form as JSON.
///
/// ## Example
/// ```ignore
/// use sanitizer::slog::IntoSanitizedJson;
///
/// info!(logger, "event"; "data" => event.into_sanitized_json());
/// ```
pub trait IntoSanitizedJson: Sanitize + Serialize + Sized {
    /// Sanitizes `self` with the default options and wraps the result.
    ///
    /// If converting to `serde_json::Value` fails, the returned value stores a
    /// JSON string with the message `"Failed to serialize sanitized value"`.
    fn into_sanitized_json(self) -> SanitizedJson {
        self.into_sanitized_json_with(&SanitizeOptions::default())
    }

    /// Sanitizes `self` with explicit options and wraps the result.
    fn into_sanitized_json_with(mut self, options: &SanitizeOptions) -> SanitizedJson {
        sanitize(&mut self, options);
        let json_value = serde_json::to_value(&self).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize sanitized value".to_string())
        });
        SanitizedJson::new(json_value)
    }
}

impl<T> IntoSanitizedJson for T where T: Sanitize + Serialize {}
