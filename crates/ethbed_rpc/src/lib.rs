#![warn(missing_docs)]

//! Inbound RPC types and normalization for the ethbed test backend.
//!
//! Requests reach the backend loosely typed: addresses and hashes as hex
//! strings in several formats, filter topics as nested lists, raw payloads
//! as hex blobs. This crate parses those shapes into explicit input types
//! and canonicalizes them into the fixed-width forms of [`ethbed_eth`],
//! rejecting anything it does not recognize with
//! [`UnrecognizedFormatError`].
//!
//! Only representation is handled here. Range and semantic checks (nonce
//! signs, gas bounds, chain IDs) belong to the upstream validation layer,
//! and every pass-through field is carried exactly as supplied.

/// Access list normalization
pub mod access_list;
/// Address normalization
pub mod address;
/// Authorization list normalization
pub mod authorization;
/// Generic container normalization helpers
pub mod container;
mod error;
/// Filter parameter normalization
pub mod filter;
/// Log entry normalization
pub mod log;
/// Raw hex payload normalization
pub mod raw;
mod shape;
/// Topic normalization
pub mod topic;
/// Transaction normalization
pub mod transaction;

pub use self::{
    error::UnrecognizedFormatError,
    filter::normalize_filter_params,
    log::normalize_log_entry,
    raw::{normalize_private_key, normalize_raw_transaction},
    transaction::normalize_transaction,
};
