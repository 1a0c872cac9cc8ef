use alloy_primitives::{Address, B256};

use crate::BlockSpec;

/// Either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    /// A single value
    One(T),
    /// A list of values
    Many(Vec<T>),
}

/// A single position in a filter's topic list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum TopicQuery {
    /// Match exactly this topic.
    Topic(B256),
    /// Match any of the listed topics; a `None` entry matches any topic.
    AnyOf(Vec<Option<B256>>),
}

/// Canonical log-filter parameters, in request order.
///
/// `None` marks an unconstrained part; no part is ever omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FilterParams {
    /// Lower end of the block range.
    pub from_block: Option<BlockSpec>,
    /// Upper end of the block range.
    pub to_block: Option<BlockSpec>,
    /// Address constraint: a single address, or any of a list.
    pub address: Option<OneOrMore<Address>>,
    /// Topic constraints by position; `None` at a position matches any
    /// topic there.
    pub topics: Option<Vec<Option<TopicQuery>>>,
}
