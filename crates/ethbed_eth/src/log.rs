use alloy_primitives::{Address, B256, Bytes};

/// A canonical log entry.
///
/// Byte-typed fields have been decoded from their inbound hex forms;
/// everything else is carried exactly as supplied. Fields absent from the
/// input stay absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogEntry {
    /// Whether the log comes from a mined or a pending transaction.
    pub log_type: Option<String>,
    /// Index of the log within the block.
    pub log_index: Option<u64>,
    /// Index of the emitting transaction within the block.
    pub transaction_index: Option<u64>,
    /// Hash of the emitting transaction.
    pub transaction_hash: Option<B256>,
    /// Hash of the containing block; `None` while pending.
    pub block_hash: Option<B256>,
    /// Number of the containing block.
    pub block_number: Option<u64>,
    /// Address that emitted the log.
    pub address: Option<Address>,
    /// Payload of the log.
    pub data: Option<Bytes>,
    /// Indexed topics of the log.
    pub topics: Option<Vec<B256>>,
}
