use core::fmt;

/// A named block tag, as accepted by block- and filter-based requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The genesis block.
    Earliest,
    /// The latest mined block.
    Latest,
    /// The pending block.
    Pending,
    /// The latest safe head block.
    Safe,
    /// The latest finalized block.
    Finalized,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        })
    }
}

/// A block number or named tag identifying one end of a block range.
///
/// Inbound normalization passes block specs through untouched; resolving
/// them against the chain is the backend's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// A concrete block number.
    Number(#[serde(with = "alloy_serde::quantity")] u64),
    /// A named tag.
    Tag(BlockTag),
}

impl BlockSpec {
    /// Constructs an instance for the earliest block.
    pub fn earliest() -> Self {
        Self::Tag(BlockTag::Earliest)
    }

    /// Constructs an instance for the latest mined block.
    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    /// Constructs an instance for the pending block.
    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }

    /// Constructs an instance for the latest safe head block.
    pub fn safe() -> Self {
        Self::Tag(BlockTag::Safe)
    }

    /// Constructs an instance for the latest finalized block.
    pub fn finalized() -> Self {
        Self::Tag(BlockTag::Finalized)
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSpec::Number(number) => write!(formatter, "{number}"),
            BlockSpec::Tag(tag) => write!(formatter, "{tag}"),
        }
    }
}
