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

use feecast_provider::{CallError, ProviderError};
use feecast_types::{Address, ExitCode};

/// Error type for gas estimation
#[derive(Debug, thiserror::Error)]
pub enum GasEstimationError {
    /// Batch estimation was called without any messages
    #[error("must provide at least one message to estimate")]
    EmptyInput,
    /// A tipset could not be loaded while walking the chain
    #[error("loading tipset: {0}")]
    TipLoad(#[source] ProviderError),
    /// The sender could not be resolved to its deterministic address
    #[error("resolving address {0}: {1}")]
    Resolution(Address, #[source] ProviderError),
    /// The simulated message did not exit successfully
    #[error("message execution failed: exit {exit_code}, reason: {reason}")]
    ExecutionFailed {
        /// Exit code of the simulated execution
        exit_code: ExitCode,
        /// Error reported by the VM
        reason: String,
    },
    /// The state manager could not run the message
    #[error("call with gas: {0}")]
    CallFailed(#[source] CallError),
    /// Every tipset tried was at an expensive fork boundary
    #[error("state fork boundary persisted after {0} retries")]
    ForkRetriesExhausted(u32),
    /// Error from provider
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// Other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
