use alloy_primitives::{Address, U256};

/// A single entry of a transaction's access list: an address and the
/// storage slots the transaction intends to touch there.
///
/// Storage keys are canonicalized to slot indices rather than 32-byte
/// words; the backend's state layer addresses slots by index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListEntry {
    /// The address the transaction plans to access.
    pub address: Address,
    /// The storage slots the transaction plans to touch.
    pub storage_keys: Vec<U256>,
}
