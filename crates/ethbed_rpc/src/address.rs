//! Address normalization.
//!
//! Addresses arrive as checksummed or single-case hex strings, with or
//! without the `0x` prefix. Where a sentinel is permitted, the empty
//! string stands for "no address" and canonicalizes to the empty byte
//! string — deliberately distinct from the zero address.

use ethbed_eth::{Address, TxKind, filter::OneOrMore};

use crate::{
    container::normalize_sequence,
    error::UnrecognizedFormatError,
    shape::{is_hex_of_length, strip_hex_prefix},
};

/// An inbound address in any accepted shape.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AddressInput {
    /// Hex-encoded, checksummed or single-case; the empty string stands
    /// for "no address" where a sentinel is permitted.
    Hex(String),
    /// Already in canonical 20-byte form.
    Raw(Address),
}

/// Normalizes an address that must be concrete.
pub fn normalize_address(address: AddressInput) -> Result<Address, UnrecognizedFormatError> {
    match address {
        AddressInput::Hex(value) => parse_address(&value),
        AddressInput::Raw(address) => Ok(address),
    }
}

/// Normalizes an address field that admits the empty sentinel, such as a
/// transaction's `to` or an authorization's delegation target.
pub fn normalize_address_or_empty(
    address: AddressInput,
) -> Result<TxKind, UnrecognizedFormatError> {
    match address {
        AddressInput::Hex(value) if value.is_empty() => Ok(TxKind::Create),
        AddressInput::Hex(value) => parse_address(&value).map(TxKind::Call),
        AddressInput::Raw(address) => Ok(TxKind::Call(address)),
    }
}

/// Normalizes a filter's address constraint: a single address, or each
/// element of a list independently, order preserved.
pub fn normalize_address_filter(
    address: OneOrMore<AddressInput>,
) -> Result<OneOrMore<Address>, UnrecognizedFormatError> {
    match address {
        OneOrMore::One(address) => normalize_address(address).map(OneOrMore::One),
        OneOrMore::Many(addresses) => {
            normalize_sequence(addresses, normalize_address).map(OneOrMore::Many)
        }
    }
}

/// Parses a 40-hex-digit address, verifying the EIP-55 checksum when the
/// digits are mixed-case.
fn parse_address(value: &str) -> Result<Address, UnrecognizedFormatError> {
    if !is_hex_of_length(value, Address::len_bytes()) {
        return Err(UnrecognizedFormatError::new("address", &value));
    }

    let digits = strip_hex_prefix(value);
    let is_mixed_case = digits.bytes().any(|digit| digit.is_ascii_uppercase())
        && digits.bytes().any(|digit| digit.is_ascii_lowercase());

    if is_mixed_case {
        Address::parse_checksummed(format!("0x{digits}"), None)
            .map_err(|_error| UnrecognizedFormatError::new("address", &value))
    } else {
        digits
            .parse()
            .map_err(|_error| UnrecognizedFormatError::new("address", &value))
    }
}

#[cfg(test)]
mod tests {
    use ethbed_eth::address;

    use super::*;

    #[test]
    fn lowercase_hex_decodes() -> anyhow::Result<()> {
        let expected = address!("0x1111111111111111111111111111111111111111");

        let with_prefix = AddressInput::Hex(format!("0x{}", "11".repeat(20)));
        assert_eq!(normalize_address(with_prefix)?, expected);

        let without_prefix = AddressInput::Hex("11".repeat(20));
        assert_eq!(normalize_address(without_prefix)?, expected);

        Ok(())
    }

    #[test]
    fn canonical_input_passes_through() -> anyhow::Result<()> {
        let expected = address!("0x2222222222222222222222222222222222222222");
        assert_eq!(normalize_address(AddressInput::Raw(expected))?, expected);

        Ok(())
    }

    #[test]
    fn checksummed_address_is_verified() -> anyhow::Result<()> {
        // EIP-55 test vector.
        let checksummed = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(
            normalize_address(AddressInput::Hex(checksummed.to_string()))?,
            address!("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
        );

        // Flipping the case of one digit invalidates the checksum.
        let corrupted = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert!(normalize_address(AddressInput::Hex(corrupted.to_string())).is_err());

        Ok(())
    }

    #[test]
    fn wrong_length_is_rejected() {
        let error = normalize_address(AddressInput::Hex(format!("0x{}", "11".repeat(19))))
            .unwrap_err();
        assert_eq!(error.field, "address");
    }

    #[test]
    fn empty_string_is_only_accepted_as_sentinel() -> anyhow::Result<()> {
        assert!(normalize_address(AddressInput::Hex(String::new())).is_err());
        assert_eq!(
            normalize_address_or_empty(AddressInput::Hex(String::new()))?,
            TxKind::Create
        );
        assert_eq!(
            normalize_address_or_empty(AddressInput::Hex(format!("0x{}", "11".repeat(20))))?,
            TxKind::Call(address!("0x1111111111111111111111111111111111111111"))
        );

        Ok(())
    }

    #[test]
    fn address_lists_normalize_element_wise() -> anyhow::Result<()> {
        let normalized = normalize_address_filter(OneOrMore::Many(vec![
            AddressInput::Hex(format!("0x{}", "11".repeat(20))),
            AddressInput::Hex("22".repeat(20)),
        ]))?;

        assert_eq!(
            normalized,
            OneOrMore::Many(vec![
                address!("0x1111111111111111111111111111111111111111"),
                address!("0x2222222222222222222222222222222222222222"),
            ])
        );

        Ok(())
    }
}
