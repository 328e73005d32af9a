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

use alloy_primitives::U256;
use parse_display::Display;
use serde::{Deserialize, Serialize};

/// Builtin actor kinds, as classified from the actor's code
#[derive(Display, Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[display(style = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ActorKind {
    /// Key-backed account
    Account,
    /// Storage provider (miner) actor
    StorageMiner,
    /// Payment channel actor
    PaymentChannel,
    /// Multisig wallet
    Multisig,
    /// Anything else
    Other,
}

/// State of an actor as seen at a tipset
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Kind of the actor's code
    pub kind: ActorKind,
    /// Actor nonce
    pub nonce: u64,
    /// Actor balance
    pub balance: U256,
}

impl Actor {
    /// True for storage provider actors
    pub fn is_storage_miner(&self) -> bool {
        self.kind == ActorKind::StorageMiner
    }

    /// True for payment channel actors
    pub fn is_payment_channel(&self) -> bool {
        self.kind == ActorKind::PaymentChannel
    }
}
