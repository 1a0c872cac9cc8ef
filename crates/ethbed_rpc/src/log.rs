//! Log entry normalization.

use ethbed_eth::{B256, log::LogEntry};

use crate::{
    address::{AddressInput, normalize_address},
    container::{normalize_field, normalize_sequence},
    error::UnrecognizedFormatError,
    shape::{decode_bytes, decode_hash},
};

/// An inbound block hash: hex-encoded, or already canonical. Log entries
/// may arrive partially canonical when the backend re-normalizes its own
/// output.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum BlockHashInput {
    /// Hex-encoded 32 bytes.
    Hex(String),
    /// Already in canonical 32-byte form.
    Raw(B256),
}

/// An inbound log entry, prior to normalization.
///
/// Every field is optional; fields absent here stay absent from the
/// canonical entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryInput {
    /// Whether the log comes from a mined or a pending transaction.
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    /// Index of the log within the block.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub log_index: Option<u64>,
    /// Index of the emitting transaction within the block.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub transaction_index: Option<u64>,
    /// Hex-encoded hash of the emitting transaction.
    pub transaction_hash: Option<String>,
    /// Hash of the containing block; `null` while pending.
    pub block_hash: Option<BlockHashInput>,
    /// Number of the containing block.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub block_number: Option<u64>,
    /// Address that emitted the log.
    pub address: Option<AddressInput>,
    /// Hex-encoded payload.
    pub data: Option<String>,
    /// Hex-encoded indexed topics.
    pub topics: Option<Vec<String>>,
}

/// Normalizes an inbound log entry into its canonical form.
///
/// Fails with [`UnrecognizedFormatError`] on the first field whose value
/// does not match an accepted shape; nothing partial is ever produced.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn normalize_log_entry(log: LogEntryInput) -> Result<LogEntry, UnrecognizedFormatError> {
    Ok(LogEntry {
        log_type: log.log_type,
        log_index: log.log_index,
        transaction_index: log.transaction_index,
        transaction_hash: normalize_field("transaction_hash", log.transaction_hash, |hash| {
            decode_hash("transaction_hash", &hash)
        })?,
        block_hash: normalize_field("block_hash", log.block_hash, normalize_block_hash)?,
        block_number: log.block_number,
        address: normalize_field("address", log.address, normalize_address)?,
        data: normalize_field("data", log.data, |data| decode_bytes("data", &data))?,
        topics: normalize_field("topics", log.topics, |topics| {
            normalize_sequence(topics, |topic| decode_hash("topics", &topic))
        })?,
    })
}

/// Decodes a block hash that may already be canonical: hex strings are
/// decoded, raw bytes pass through.
fn normalize_block_hash(hash: BlockHashInput) -> Result<B256, UnrecognizedFormatError> {
    match hash {
        BlockHashInput::Hex(value) => decode_hash("block_hash", &value),
        BlockHashInput::Raw(hash) => Ok(hash),
    }
}
