//! Topic normalization.

use ethbed_eth::B256;

use crate::{container::normalize_sequence, error::UnrecognizedFormatError, shape::decode_hash};

/// An inbound log topic in any accepted shape.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TopicInput {
    /// Hex-encoded 32 bytes, with or without the `0x` prefix.
    Hex(String),
    /// Already in canonical 32-byte form.
    Raw(B256),
}

/// Normalizes a single topic. `None` means "match any topic at this
/// position" and passes through; canonical input is returned unchanged.
pub fn normalize_topic(
    topic: Option<TopicInput>,
) -> Result<Option<B256>, UnrecognizedFormatError> {
    match topic {
        None => Ok(None),
        Some(TopicInput::Hex(value)) => decode_hash("topic", &value).map(Some),
        Some(TopicInput::Raw(topic)) => Ok(Some(topic)),
    }
}

/// Normalizes an ordered list of topics, preserving order and count.
pub fn normalize_topic_list(
    topics: Vec<Option<TopicInput>>,
) -> Result<Vec<Option<B256>>, UnrecognizedFormatError> {
    normalize_sequence(topics, normalize_topic)
}
