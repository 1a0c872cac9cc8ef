use alloy_primitives::{TxKind, U256};

/// A single signed authorization from a transaction's authorization list.
///
/// Only the delegation target is canonicalized on the way in; the other
/// fields are carried exactly as supplied and validated upstream. Absent
/// fields stay absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationEntry {
    /// Chain the authorization is scoped to.
    pub chain_id: Option<U256>,
    /// Delegation target. `TxKind::Create` stands for the empty target of
    /// a cleared delegation, which is distinct from the zero address.
    pub address: Option<TxKind>,
    /// Nonce of the authorizing account.
    pub nonce: Option<u64>,
    /// Signature Y parity.
    pub y_parity: Option<u8>,
    /// Signature R value.
    pub r: Option<U256>,
    /// Signature S value.
    pub s: Option<U256>,
}
