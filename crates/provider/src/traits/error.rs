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

use feecast_types::{Address, TipSetKey};

/// Result of a provider method call
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error enumeration for the provider traits
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Requested tipset is not in the chain store
    #[error("tipset not found: {0}")]
    TipSetNotFound(TipSetKey),
    /// Address has no actor at the requested tipset
    #[error("actor not found: {0}")]
    ActorNotFound(Address),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Error returned when invoking a message through the state manager
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The call would execute across a state migration that is too expensive to run
    /// on demand. Retrying on the parent tipset is expected to succeed.
    #[error("refusing explicit call due to state fork at epoch {0}")]
    ExpensiveFork(u64),
    /// Any other failure
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
