//! Normalization of raw hex payloads.

use ethbed_eth::Bytes;

use crate::{error::UnrecognizedFormatError, shape::decode_bytes};

/// Decodes a raw signed transaction from its hex encoding.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn normalize_raw_transaction(
    raw_transaction: &str,
) -> Result<Bytes, UnrecognizedFormatError> {
    decode_bytes("raw_transaction", raw_transaction)
}

/// Decodes a private key from its hex encoding.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn normalize_private_key(private_key: &str) -> Result<Bytes, UnrecognizedFormatError> {
    decode_bytes("private_key", private_key)
}
