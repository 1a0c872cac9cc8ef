//! Hex-shape predicates and decoding shared by the inbound normalizers.

use ethbed_eth::{B256, Bytes};

use crate::error::UnrecognizedFormatError;

/// Strips the conventional `0x` prefix, if present.
pub(crate) fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Whether `value` is a hex string encoding exactly `len` bytes, with or
/// without the `0x` prefix.
pub(crate) fn is_hex_of_length(value: &str, len: usize) -> bool {
    let digits = strip_hex_prefix(value);
    digits.len() == len * 2 && digits.bytes().all(|digit| digit.is_ascii_hexdigit())
}

/// Decodes an arbitrary-length hex string, tagging rejections with
/// `field`. The empty string and a bare `0x` decode to empty bytes.
pub(crate) fn decode_bytes(
    field: &'static str,
    value: &str,
) -> Result<Bytes, UnrecognizedFormatError> {
    hex::decode(value)
        .map(Bytes::from)
        .map_err(|_error| UnrecognizedFormatError::new(field, &value))
}

/// Decodes a hex string that must encode exactly 32 bytes.
pub(crate) fn decode_hash(
    field: &'static str,
    value: &str,
) -> Result<B256, UnrecognizedFormatError> {
    if !is_hex_of_length(value, B256::len_bytes()) {
        return Err(UnrecognizedFormatError::new(field, &value));
    }

    value
        .parse()
        .map_err(|_error| UnrecognizedFormatError::new(field, &value))
}
