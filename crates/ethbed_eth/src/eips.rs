/// Types and constants related to [EIP-7702](https://eips.ethereum.org/EIPS/eip-7702)
pub mod eip7702;
