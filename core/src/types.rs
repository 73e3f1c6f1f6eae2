//! Response envelope and payload types.
//!
//! # Design
//! Every reply is `{"status": ..., "message": ...}` where the shape of
//! `message` depends on the endpoint, except on failure where it is always
//! the service's error text. The envelope is therefore decoded in two steps:
//! first with `message` left as a raw JSON value, then, once `status` says
//! `"success"`, `message` is decoded into the endpoint's payload type.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{DogApiError, Result};

/// The `status` value the service uses for a successful reply.
pub const STATUS_SUCCESS: &str = "success";

/// Breed name to its sub-breed names, as returned by `breeds/list/all`.
pub type BreedMap = BTreeMap<String, Vec<String>>;

/// Top-level reply with the payload still undecoded. Extra fields such as
/// the `code` the service adds on errors are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnvelope {
    pub status: String,
    pub message: Value,
}

impl RawEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The `message` as error text: strings verbatim, anything else as
    /// compact JSON.
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    /// Check `status`, then decode `message` into `T`.
    pub fn into_payload<T: DeserializeOwned>(self) -> Result<T> {
        if !self.is_success() {
            let message = self.message_text();
            warn!(status = %self.status, %message, "dog api reported failure");
            return Err(DogApiError::Api(message));
        }
        Ok(serde_json::from_value(self.message)?)
    }
}

/// Decode a response body into the payload type `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: RawEnvelope = serde_json::from_slice(body)?;
    envelope.into_payload()
}
