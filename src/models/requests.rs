//! Request models for the relay API
//!
//! A creation body is percent-encoded JSON text. It is accepted when it
//! decodes to a JSON object holding an `errors` field; everything else in
//! the object is carried through untouched.

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::error::{RelayError, Result};

/// The one field every report must carry.
pub const REQUIRED_FIELD: &str = "errors";

/// A validated diagnostic report.
///
/// `text` is the decoded JSON exactly as the client sent it; it is what
/// gets stored.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub text: String,
}

impl DiagnosticReport {
    /// Decodes and validates a raw creation body.
    ///
    /// # Errors
    /// - `EmptyBody` if `body` is empty
    /// - `Decode` if percent-decoding or JSON parsing fails
    /// - `MissingField` if the JSON is not an object with an `errors` key
    ///
    /// JSON follows `serde_json`: nesting past 128 levels, lone surrogate
    /// escapes and numbers outside the `f64` range are `Decode` errors.
    pub fn parse(body: &str) -> Result<Self> {
        if body.is_empty() {
            return Err(RelayError::EmptyBody);
        }

        let text = percent_decode(body).ok_or(RelayError::Decode)?;
        let value: Value = serde_json::from_str(&text).map_err(|_| RelayError::Decode)?;

        let has_field = value
            .as_object()
            .is_some_and(|obj| obj.contains_key(REQUIRED_FIELD));
        if !has_field {
            return Err(RelayError::MissingField);
        }

        Ok(Self { text })
    }
}

/// Strict URI-component decoding.
///
/// Every `%` must start a two-hex-digit escape and the result must be UTF-8.
/// `+` is left alone.
pub fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
