//! Authorization list normalization.

use ethbed_eth::{U256, eips::eip7702::AuthorizationEntry};

use crate::{
    address::{AddressInput, normalize_address_or_empty},
    container::{normalize_field, normalize_sequence},
    error::UnrecognizedFormatError,
};

/// An inbound EIP-7702 authorization, prior to normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationEntryInput {
    /// Chain the authorization is scoped to.
    pub chain_id: Option<U256>,
    /// Delegation target; the empty string clears the delegation.
    pub address: Option<AddressInput>,
    /// Nonce of the authorizing account.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub nonce: Option<u64>,
    /// Signature Y parity.
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub y_parity: Option<u8>,
    /// Signature R value.
    pub r: Option<U256>,
    /// Signature S value.
    pub s: Option<U256>,
}

/// Normalizes a transaction's authorization list, entry order preserved.
///
/// Only the delegation target is re-shaped; every other field carries
/// through for the upstream-validated interpretation to consume.
pub fn normalize_authorization_list(
    authorization_list: Vec<AuthorizationEntryInput>,
) -> Result<Vec<AuthorizationEntry>, UnrecognizedFormatError> {
    normalize_sequence(authorization_list, normalize_entry)
}

fn normalize_entry(
    entry: AuthorizationEntryInput,
) -> Result<AuthorizationEntry, UnrecognizedFormatError> {
    Ok(AuthorizationEntry {
        chain_id: entry.chain_id,
        address: normalize_field(
            "authorization_list.address",
            entry.address,
            normalize_address_or_empty,
        )?,
        nonce: entry.nonce,
        y_parity: entry.y_parity,
        r: entry.r,
        s: entry.s,
    })
}

#[cfg(test)]
mod tests {
    use ethbed_eth::{TxKind, address};

    use super::*;

    #[test]
    fn only_the_delegation_target_is_reshaped() -> anyhow::Result<()> {
        let normalized = normalize_authorization_list(vec![AuthorizationEntryInput {
            chain_id: Some(U256::from(1)),
            address: Some(AddressInput::Hex(format!("0x{}", "11".repeat(20)))),
            nonce: Some(7),
            y_parity: Some(1),
            r: Some(U256::from(2)),
            s: Some(U256::from(3)),
        }])?;

        assert_eq!(
            normalized,
            vec![AuthorizationEntry {
                chain_id: Some(U256::from(1)),
                address: Some(TxKind::Call(address!(
                    "0x1111111111111111111111111111111111111111"
                ))),
                nonce: Some(7),
                y_parity: Some(1),
                r: Some(U256::from(2)),
                s: Some(U256::from(3)),
            }]
        );

        Ok(())
    }

    #[test]
    fn empty_target_clears_the_delegation() -> anyhow::Result<()> {
        let normalized = normalize_authorization_list(vec![AuthorizationEntryInput {
            address: Some(AddressInput::Hex(String::new())),
            ..AuthorizationEntryInput::default()
        }])?;

        assert_eq!(normalized[0].address, Some(TxKind::Create));

        Ok(())
    }

    #[test]
    fn malformed_targets_are_rejected() {
        let error = normalize_authorization_list(vec![AuthorizationEntryInput {
            address: Some(AddressInput::Hex("0x12".to_string())),
            ..AuthorizationEntryInput::default()
        }])
        .unwrap_err();

        assert_eq!(error.field, "authorization_list.address");
    }

    #[test]
    fn wire_shape_uses_camel_case() -> anyhow::Result<()> {
        let entry: AuthorizationEntryInput = serde_json::from_value(serde_json::json!({
            "chainId": "0x1",
            "address": format!("0x{}", "11".repeat(20)),
            "nonce": "0x0",
            "yParity": "0x1",
            "r": "0x2",
            "s": "0x3",
        }))?;

        assert_eq!(entry.chain_id, Some(U256::from(1)));
        assert_eq!(entry.nonce, Some(0));
        assert_eq!(entry.y_parity, Some(1));

        Ok(())
    }
}
