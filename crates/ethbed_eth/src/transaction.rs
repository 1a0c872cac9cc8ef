use alloy_primitives::{Address, Bytes, TxKind, U256};

use crate::{access_list::AccessListEntry, eips::eip7702::AuthorizationEntry};

/// A canonical transaction, as handed to the execution backend.
///
/// Address- and byte-typed fields have been decoded from their inbound
/// forms; numeric and signature fields are carried exactly as supplied and
/// validated upstream. Fields absent from the input stay absent —
/// defaulting is the backend's concern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    /// EIP-2718 type.
    pub transaction_type: Option<u8>,
    /// Chain ID.
    pub chain_id: Option<u64>,
    /// Sender address.
    pub from: Option<Address>,
    /// Recipient, or `TxKind::Create` for contract creation.
    pub to: Option<TxKind>,
    /// Gas limit.
    pub gas: Option<u64>,
    /// Legacy gas price.
    pub gas_price: Option<u128>,
    /// Max base fee per gas the sender is willing to pay.
    pub max_fee_per_gas: Option<u128>,
    /// Miner tip.
    pub max_priority_fee_per_gas: Option<u128>,
    /// Transaction nonce.
    pub nonce: Option<u64>,
    /// Value in wei.
    pub value: Option<U256>,
    /// Call data.
    pub data: Option<Bytes>,
    /// Warm storage access pre-payment.
    pub access_list: Option<Vec<AccessListEntry>>,
    /// EIP-7702 authorizations.
    pub authorization_list: Option<Vec<AuthorizationEntry>>,
    /// Signature R value.
    pub r: Option<U256>,
    /// Signature S value.
    pub s: Option<U256>,
    /// Signature V value.
    pub v: Option<u64>,
}
