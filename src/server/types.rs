use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller origin carried by every inbound request.
///
/// Wire values follow the Infernet convention: `0` for on-chain
/// subscriptions, `1` for off-chain REST callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum RequestSource {
    Onchain,
    Offchain,
}

impl TryFrom<u8> for RequestSource {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Onchain),
            1 => Ok(Self::Offchain),
            other => Err(format!("unknown request source: {}", other)),
        }
    }
}

/// Inbound request shape shared by both caller kinds.
///
/// `data` is a JSON object for off-chain callers and a hex string for
/// on-chain callers; the handler branches on `source` to interpret it.
#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub source: RequestSource,
    pub data: Value,
}

/// Envelope for off-chain callers: the provider result, verbatim.
#[derive(Debug, Serialize)]
pub struct OffchainResponse {
    pub message: Value,
}

/// Envelope for on-chain callers.
///
/// Only `raw_output` carries data; the node contract expects the remaining
/// fields to be present as empty strings.
#[derive(Debug, Serialize)]
pub struct OnchainResponse {
    pub raw_input: String,
    pub processed_input: String,
    pub raw_output: String,
    pub processed_output: String,
    pub proof: String,
}

impl OnchainResponse {
    pub fn from_raw_output(raw_output: String) -> Self {
        Self {
            raw_input: String::new(),
            processed_input: String::new(),
            raw_output,
            processed_output: String::new(),
            proof: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServiceResponse {
    Offchain(OffchainResponse),
    Onchain(OnchainResponse),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
