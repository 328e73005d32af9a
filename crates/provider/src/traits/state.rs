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

use feecast_types::{Actor, Address, ChainMessage, InvocResult, Message, TipSet};
#[cfg(feature = "test-utils")]
use mockall::automock;

use super::error::{CallError, ProviderResult};

/// Trait for reading state and running messages through the VM without committing them.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait StateProvider: Send + Sync {
    /// Resolve an address to its key-backed (deterministic) form in the state of `ts`
    async fn resolve_to_deterministic_address(
        &self,
        addr: Address,
        ts: &TipSet,
    ) -> ProviderResult<Address>;

    /// Apply `prior_msgs` and then `msg` on top of the state of `ts` and return the
    /// invocation result of `msg`.
    ///
    /// Gas is charged as in a real execution, the resulting state is discarded.
    async fn call_with_gas(
        &self,
        msg: &Message,
        prior_msgs: &[ChainMessage],
        ts: &TipSet,
    ) -> Result<InvocResult, CallError>;

    /// Get an actor from the parent state of `ts`
    async fn get_actor(&self, addr: Address, ts: &TipSet) -> ProviderResult<Option<Actor>>;
}
