//! Access list normalization.

use ethbed_eth::{U256, access_list::AccessListEntry};

use crate::{
    address::{AddressInput, normalize_address},
    container::normalize_sequence,
    error::UnrecognizedFormatError,
    shape::strip_hex_prefix,
};

/// An inbound access-list entry, prior to normalization.
///
/// Both fields are required; they are typed as optional only so that a
/// missing field is reported as an unrecognized format rather than a
/// deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListEntryInput {
    /// The address the transaction plans to access.
    pub address: Option<AddressInput>,
    /// Hex-encoded storage slots the transaction plans to touch.
    pub storage_keys: Option<Vec<String>>,
}

/// Normalizes a transaction's access list. Entry order and the order of
/// storage keys within an entry are both preserved.
pub fn normalize_access_list(
    access_list: Vec<AccessListEntryInput>,
) -> Result<Vec<AccessListEntry>, UnrecognizedFormatError> {
    normalize_sequence(access_list, normalize_entry)
}

fn normalize_entry(
    entry: AccessListEntryInput,
) -> Result<AccessListEntry, UnrecognizedFormatError> {
    let address = entry
        .address
        .ok_or_else(|| UnrecognizedFormatError::missing("access_list.address"))?;
    let storage_keys = entry
        .storage_keys
        .ok_or_else(|| UnrecognizedFormatError::missing("access_list.storage_keys"))?;

    Ok(AccessListEntry {
        address: normalize_address(address)
            .map_err(|error| error.for_field("access_list.address"))?,
        storage_keys: normalize_sequence(storage_keys, normalize_storage_key)?,
    })
}

/// Parses a hex-encoded storage key into its slot index.
fn normalize_storage_key(key: String) -> Result<U256, UnrecognizedFormatError> {
    U256::from_str_radix(strip_hex_prefix(&key), 16)
        .map_err(|_error| UnrecognizedFormatError::new("access_list.storage_keys", &key))
}

#[cfg(test)]
mod tests {
    use ethbed_eth::address;

    use super::*;

    #[test]
    fn entries_normalize_in_order() -> anyhow::Result<()> {
        let normalized = normalize_access_list(vec![AccessListEntryInput {
            address: Some(AddressInput::Hex(format!("0x{}", "11".repeat(20)))),
            storage_keys: Some(vec!["0x01".to_string(), "0x02".to_string()]),
        }])?;

        assert_eq!(
            normalized,
            vec![AccessListEntry {
                address: address!("0x1111111111111111111111111111111111111111"),
                storage_keys: vec![U256::from(1), U256::from(2)],
            }]
        );

        Ok(())
    }

    #[test]
    fn storage_keys_accept_unprefixed_hex() -> anyhow::Result<()> {
        let normalized = normalize_access_list(vec![AccessListEntryInput {
            address: Some(AddressInput::Hex("22".repeat(20))),
            storage_keys: Some(vec!["ff".to_string()]),
        }])?;

        assert_eq!(normalized[0].storage_keys, vec![U256::from(255)]);

        Ok(())
    }

    #[test]
    fn missing_fields_are_rejected() {
        let error = normalize_access_list(vec![AccessListEntryInput {
            address: None,
            storage_keys: Some(Vec::new()),
        }])
        .unwrap_err();
        assert_eq!(error.field, "access_list.address");

        let error = normalize_access_list(vec![AccessListEntryInput {
            address: Some(AddressInput::Hex("11".repeat(20))),
            storage_keys: None,
        }])
        .unwrap_err();
        assert_eq!(error.field, "access_list.storage_keys");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        let error = normalize_access_list(vec![AccessListEntryInput {
            address: Some(AddressInput::Hex("11".repeat(19))),
            storage_keys: Some(Vec::new()),
        }])
        .unwrap_err();
        assert_eq!(error.field, "access_list.address");

        let error = normalize_access_list(vec![AccessListEntryInput {
            address: Some(AddressInput::Hex("11".repeat(20))),
            storage_keys: Some(vec!["0xgg".to_string()]),
        }])
        .unwrap_err();
        assert_eq!(error.field, "access_list.storage_keys");
    }

    #[test]
    fn wire_shape_uses_camel_case() -> anyhow::Result<()> {
        let entry: AccessListEntryInput = serde_json::from_value(serde_json::json!({
            "address": format!("0x{}", "11".repeat(20)),
            "storageKeys": ["0x00"],
        }))?;

        assert_eq!(entry.storage_keys, Some(vec!["0x00".to_string()]));

        Ok(())
    }
}
