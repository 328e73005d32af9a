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

//! Traits for the provider module.

mod error;
pub use error::{CallError, ProviderError, ProviderResult};

mod chain;
#[cfg(feature = "test-utils")]
pub use chain::MockChainProvider;
pub use chain::ChainProvider;

mod state;
#[cfg(feature = "test-utils")]
pub use state::MockStateProvider;
pub use state::StateProvider;

mod mpool;
#[cfg(feature = "test-utils")]
pub use mpool::MockMessagePoolProvider;
pub use mpool::MessagePoolProvider;
