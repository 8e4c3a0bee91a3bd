//! The `{code, data, msg}` envelope every Kaiascan response is wrapped in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::error::{KaiascanError, KaiascanResult};

/// The only `code` value that means success.
pub const SUCCESS_CODE: i64 = 0;

/// Uniform response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub data: T,
    pub msg: String,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Decode a response body and unwrap `data`.
///
/// The body is parsed once into raw JSON and the envelope fields are read
/// from it, so a rejected envelope (`code != 0`, typically with
/// `data: null`) surfaces as [`KaiascanError::Api`] carrying the body
/// exactly as received, rather than as a decode failure of `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> KaiascanResult<T> {
    let raw: serde_json::Value = serde_json::from_slice(body)?;
    let envelope = ApiEnvelope::<serde_json::Value>::deserialize(&raw)?;

    if !envelope.is_success() {
        let ApiEnvelope { code, msg, .. } = envelope;
        tracing::warn!(code, msg = %msg, "API rejected request");
        return Err(KaiascanError::Api {
            code,
            msg,
            envelope: raw,
        });
    }

    Ok(serde_json::from_value(envelope.data)?)
}
