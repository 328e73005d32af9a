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

use feecast_types::{Address, SignedMessage, TipSet};
#[cfg(feature = "test-utils")]
use mockall::automock;

use super::error::ProviderResult;

/// Read access to the pending messages of the message pool
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait MessagePoolProvider: Send + Sync {
    /// Pending messages of `addr`, ordered by nonce, along with the tipset the pool
    /// is currently pending against
    async fn pending_for(&self, addr: Address) -> ProviderResult<(Vec<SignedMessage>, TipSet)>;
}
