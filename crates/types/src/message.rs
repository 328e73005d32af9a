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

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Actor method selector
pub type MethodNum = u64;

/// Well known method numbers
pub mod methods {
    use super::MethodNum;

    /// Plain value transfer, supported by every actor
    pub const SEND: MethodNum = 0;
    /// Payment channel `Collect`
    pub const PAYCH_COLLECT: MethodNum = 4;
}

/// An unsigned message.
///
/// Zero values of `gas_limit`, `gas_fee_cap` and `gas_premium` mean "unset" and are
/// filled in by gas estimation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Sender
    pub from: Address,
    /// Recipient
    pub to: Address,
    /// Sender nonce
    pub nonce: u64,
    /// Value transferred
    pub value: U256,
    /// Method invoked on the recipient
    pub method: MethodNum,
    /// Method parameters
    pub params: Bytes,
    /// Gas limit
    pub gas_limit: u64,
    /// Maximum fee per gas
    pub gas_fee_cap: U256,
    /// Priority fee per gas
    pub gas_premium: U256,
}

impl Message {
    /// True if the gas limit still has to be estimated
    pub fn needs_gas_limit(&self) -> bool {
        self.gas_limit == 0
    }

    /// True if the gas premium still has to be estimated
    pub fn needs_gas_premium(&self) -> bool {
        self.gas_premium.is_zero()
    }

    /// True if the fee cap still has to be estimated
    pub fn needs_gas_fee_cap(&self) -> bool {
        self.gas_fee_cap.is_zero()
    }
}

/// A message with its signature
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedMessage {
    /// The message
    pub message: Message,
    /// Signature over the message
    pub signature: Bytes,
}

/// A message as it appears in the pool or on chain
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainMessage {
    /// Signed by a key-backed account
    Signed(SignedMessage),
    /// Unsigned, e.g. a message under estimation or a BLS message with aggregated signature
    Unsigned(Message),
}

impl ChainMessage {
    /// The message the VM executes
    pub fn message(&self) -> &Message {
        match self {
            ChainMessage::Signed(signed) => &signed.message,
            ChainMessage::Unsigned(message) => message,
        }
    }
}

impl From<Message> for ChainMessage {
    fn from(message: Message) -> Self {
        ChainMessage::Unsigned(message)
    }
}

impl From<SignedMessage> for ChainMessage {
    fn from(signed: SignedMessage) -> Self {
        ChainMessage::Signed(signed)
    }
}
