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

//! Trait for reading tipsets and their messages from the chain store.

use feecast_types::{ChainMessage, TipSet, TipSetKey};
#[cfg(feature = "test-utils")]
use mockall::automock;

use super::error::ProviderResult;

/// Trait for reading tipsets and their messages from the chain store.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait ChainProvider: Send + Sync {
    /// Get the current heaviest tipset
    async fn chain_head(&self) -> ProviderResult<TipSet>;

    /// Load a tipset by key. The key must not be empty.
    async fn load_tip_set(&self, key: &TipSetKey) -> ProviderResult<TipSet>;

    /// Load a tipset by key, resolving the empty key to the current head
    async fn chain_tip_set(&self, key: &TipSetKey) -> ProviderResult<TipSet>;

    /// Get all messages included in the blocks of a tipset, deduplicated, in execution order
    async fn messages_for_tip_set(&self, ts: &TipSet) -> ProviderResult<Vec<ChainMessage>>;
}
