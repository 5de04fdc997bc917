//! JSON encoding and decoding of request and response bodies.
//!
//! Both directions are plain functions; serialization options are passed in
//! explicitly on every call.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::Error;

/// Options applied when encoding a request body.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    /// Drop object members whose value is `null`, at any depth.
    pub omit_nulls: bool,
}

impl EncodeOptions {
    /// Options used for every request body the SDK sends.
    pub const REQUEST: EncodeOptions = EncodeOptions { omit_nulls: true };
}

/// Decodes a JSON response body into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(body));
        Error::decode(e, body)
    })
}

/// Encodes `value` as a JSON request body.
pub fn encode<T: Serialize + ?Sized>(value: &T, options: EncodeOptions) -> Result<String, Error> {
    let mut json = serde_json::to_value(value).map_err(|e| {
        tracing::error!("Failed to encode request: {}", e);
        Error::Encode {
            message: format!("Failed to encode request: {}", e),
        }
    })?;
    if options.omit_nulls {
        strip_nulls(&mut json);
    }
    Ok(json.to_string())
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
