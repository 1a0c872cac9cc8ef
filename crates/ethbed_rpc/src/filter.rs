//! Filter parameter normalization.

use ethbed_eth::{
    BlockSpec,
    filter::{FilterParams, OneOrMore, TopicQuery},
};

use crate::{
    address::{AddressInput, normalize_address_filter},
    container::{normalize_field, normalize_sequence},
    error::UnrecognizedFormatError,
    topic::{TopicInput, normalize_topic, normalize_topic_list},
};

/// One inbound position of a filter's topic list: a single required topic
/// or an OR-group of alternatives.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TopicQueryInput {
    /// A single required topic.
    One(TopicInput),
    /// Any of the listed topics; `null` entries match any topic.
    Group(Vec<Option<TopicInput>>),
}

/// Assembles the canonical four-part filter parameters.
///
/// The block range endpoints pass through untouched; the address and topic
/// constraints are canonicalized. `None` stands for "unconstrained"
/// everywhere — no part of the result is ever omitted.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn normalize_filter_params(
    from_block: Option<BlockSpec>,
    to_block: Option<BlockSpec>,
    address: Option<OneOrMore<AddressInput>>,
    topics: Option<Vec<Option<TopicQueryInput>>>,
) -> Result<FilterParams, UnrecognizedFormatError> {
    Ok(FilterParams {
        from_block,
        to_block,
        address: normalize_field("address", address, normalize_address_filter)?,
        topics: normalize_field("topics", topics, |topics| {
            normalize_sequence(topics, normalize_topic_query)
        })?,
    })
}

/// Normalizes one position of the topic list: OR-groups element-wise,
/// single topics directly, `null` as the position wildcard.
fn normalize_topic_query(
    query: Option<TopicQueryInput>,
) -> Result<Option<TopicQuery>, UnrecognizedFormatError> {
    match query {
        None => Ok(None),
        Some(TopicQueryInput::One(topic)) => {
            Ok(normalize_topic(Some(topic))?.map(TopicQuery::Topic))
        }
        Some(TopicQueryInput::Group(topics)) => {
            Ok(Some(TopicQuery::AnyOf(normalize_topic_list(topics)?)))
        }
    }
}
