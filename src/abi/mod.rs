//! Codec for on-chain request and response payloads.
//!
//! On-chain callers exchange ABI-encoded blobs rather than JSON. A request's
//! `data` is the hex encoding (no `0x` prefix) of two dynamic strings,
//! `(endpoint_id, body)`, and the `raw_output` field of the response envelope
//! is the hex encoding of a single dynamic string holding the stringified
//! inference result.

use crate::Result;
use alloy::{hex, sol_types::SolValue};

/// Decodes an on-chain payload into its `(endpoint_id, body)` pair.
pub fn decode_request(payload: &str) -> Result<(String, String)> {
    let bytes = hex::decode(payload)?;
    let decoded = <(String, String)>::abi_decode_params(&bytes)?;
    Ok(decoded)
}

/// Encodes an `(endpoint_id, body)` pair the way on-chain callers do.
///
/// The service itself only decodes requests; this is the caller-side inverse,
/// kept alongside the decoder for constructing payloads in tests and tooling.
pub fn encode_request(endpoint_id: &str, body: &str) -> String {
    hex::encode((endpoint_id, body).abi_encode_params())
}

/// Encodes an inference result for the `raw_output` field of the on-chain
/// response envelope.
pub fn encode_output(result: &str) -> String {
    hex::encode(result.abi_encode())
}
