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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Feecast common types

pub use alloy_primitives::{Address, Bytes, B256, U256};

mod actor;
pub use actor::{Actor, ActorKind};

pub mod chain;
pub use chain::{BlockHeader, ForkParams, NetworkUpgrade, TipSet, TipSetKey};

pub mod constants;

mod gas;
pub use gas::{EstimateMessage, EstimateResult, EstimateSpec, GasMeta};

mod message;
pub use message::{methods, ChainMessage, Message, MethodNum, SignedMessage};

mod receipt;
pub use receipt::{ExitCode, InvocResult, MessageReceipt};
