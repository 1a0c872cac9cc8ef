//! Transaction normalization.

use ethbed_eth::{U256, transaction::Transaction};

use crate::{
    access_list::{AccessListEntryInput, normalize_access_list},
    address::{AddressInput, normalize_address, normalize_address_or_empty},
    authorization::{AuthorizationEntryInput, normalize_authorization_list},
    container::normalize_field,
    error::UnrecognizedFormatError,
    shape::decode_bytes,
};

/// An inbound transaction in RPC shape, prior to normalization.
///
/// Every field is optional; fields absent here stay absent from the
/// canonical transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// EIP-2718 type.
    #[serde(default, rename = "type", with = "alloy_serde::quantity::opt")]
    pub transaction_type: Option<u8>,
    /// Chain ID.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub chain_id: Option<u64>,
    /// Sender address.
    pub from: Option<AddressInput>,
    /// Recipient address; the empty string requests contract creation.
    pub to: Option<AddressInput>,
    /// Gas limit.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub gas: Option<u64>,
    /// Legacy gas price.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub gas_price: Option<u128>,
    /// Max base fee per gas the sender is willing to pay.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub max_fee_per_gas: Option<u128>,
    /// Miner tip.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub max_priority_fee_per_gas: Option<u128>,
    /// Transaction nonce.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub nonce: Option<u64>,
    /// Value in wei.
    pub value: Option<U256>,
    /// Hex-encoded call data.
    #[serde(alias = "input")]
    pub data: Option<String>,
    /// Warm storage access pre-payment.
    pub access_list: Option<Vec<AccessListEntryInput>>,
    /// EIP-7702 authorizations.
    pub authorization_list: Option<Vec<AuthorizationEntryInput>>,
    /// Signature R value.
    pub r: Option<U256>,
    /// Signature S value.
    pub s: Option<U256>,
    /// Signature V value.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub v: Option<u64>,
}

/// Normalizes an inbound transaction into its canonical form.
///
/// Fails with [`UnrecognizedFormatError`] on the first field whose value
/// does not match an accepted shape; nothing partial is ever produced.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn normalize_transaction(
    transaction: TransactionInput,
) -> Result<Transaction, UnrecognizedFormatError> {
    Ok(Transaction {
        transaction_type: transaction.transaction_type,
        chain_id: transaction.chain_id,
        from: normalize_field("from", transaction.from, normalize_address)?,
        to: normalize_field("to", transaction.to, normalize_address_or_empty)?,
        gas: transaction.gas,
        gas_price: transaction.gas_price,
        max_fee_per_gas: transaction.max_fee_per_gas,
        max_priority_fee_per_gas: transaction.max_priority_fee_per_gas,
        nonce: transaction.nonce,
        value: transaction.value,
        data: normalize_field("data", transaction.data, |data| {
            decode_bytes("data", &data)
        })?,
        // The list normalizers label their own fields, down to the entry
        // member that was rejected.
        access_list: transaction
            .access_list
            .map(normalize_access_list)
            .transpose()?,
        authorization_list: transaction
            .authorization_list
            .map(normalize_authorization_list)
            .transpose()?,
        r: transaction.r,
        s: transaction.s,
        v: transaction.v,
    })
}
