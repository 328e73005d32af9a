// This file is part of Feecast.
//
// Feecast is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Feecast is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Feecast.
// If not, see https://www.gnu.org/licenses/.

//! Tipsets and network upgrade parameters

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Identity of a tipset: the ids of the blocks it is made of.
///
/// An empty key means "no tipset specified" and is resolved to the current head by
/// providers that accept it.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TipSetKey(Vec<B256>);

impl TipSetKey {
    /// Create a key from block ids
    pub fn new(block_ids: Vec<B256>) -> Self {
        Self(block_ids)
    }

    /// The empty key
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if this key does not name a tipset
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Block ids making up this key
    pub fn block_ids(&self) -> &[B256] {
        &self.0
    }
}

impl Display for TipSetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}

/// The subset of a block header used for fee estimation
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    /// Block id
    pub id: B256,
    /// Base fee computed from the parent tipset, paid by messages in this block
    pub parent_base_fee: U256,
}

/// A set of sibling blocks at one height
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipSet {
    /// Height of the tipset. Genesis is at height 0.
    pub height: u64,
    /// Key of the parent tipset
    pub parents: TipSetKey,
    /// Blocks in this tipset, never empty for a tipset loaded from the chain
    pub blocks: Vec<BlockHeader>,
}

impl TipSet {
    /// Key identifying this tipset
    pub fn key(&self) -> TipSetKey {
        TipSetKey::new(self.blocks.iter().map(|b| b.id).collect())
    }

    /// Parent base fee shared by all blocks in the tipset
    pub fn parent_base_fee(&self) -> Option<U256> {
        self.blocks.first().map(|b| b.parent_base_fee)
    }

    /// Number of blocks in the tipset
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// True for the genesis tipset
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }
}

/// Network upgrades that affect gas estimation
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, StrumDisplay, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NetworkUpgrade {
    /// FEVM launch, repriced bare transfers and several miner methods
    Hygge,
}

/// Activation heights of network upgrades
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForkParams(BTreeMap<NetworkUpgrade, u64>);

impl ForkParams {
    /// Activation heights for mainnet
    pub fn mainnet() -> Self {
        Self(BTreeMap::from([(NetworkUpgrade::Hygge, 2_683_348)]))
    }

    /// No upgrades scheduled, as on a fresh devnet
    pub fn none() -> Self {
        Self(BTreeMap::new())
    }

    /// Create from explicit heights
    pub fn new(heights: impl IntoIterator<Item = (NetworkUpgrade, u64)>) -> Self {
        Self(heights.into_iter().collect())
    }

    /// Activation height of `upgrade`, if it is scheduled on this network
    pub fn height(&self, upgrade: NetworkUpgrade) -> Option<u64> {
        self.0.get(&upgrade).copied()
    }
}

impl Default for ForkParams {
    fn default() -> Self {
        Self::mainnet()
    }
}
