#![warn(missing_docs)]

//! Ethereum types
//!
//! Canonical Ethereum types as produced by ethbed's inbound normalization
//! layer and consumed by the execution backend. They are based on the same
//! primitive types as `alloy`.

/// Ethereum access list types
pub mod access_list;
/// Ethereum block spec
mod block_spec;
/// Types and functions related to EIPs
pub mod eips;
/// Ethereum types for filter-based RPC methods
pub mod filter;
/// Ethereum log types
pub mod log;
/// Ethereum transaction types
pub mod transaction;

pub use alloy_primitives::{
    Address, B256, Bytes, TxKind, U256, address, b256, bytes, hex,
};

pub use self::block_spec::{BlockSpec, BlockTag};
