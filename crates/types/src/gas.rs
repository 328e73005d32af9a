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
use serde::{Deserialize, Serialize};

use crate::Message;

/// Premium and gas limit of one message included in a tipset
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GasMeta {
    /// Gas premium paid by the message
    pub price: U256,
    /// Gas limit of the message
    pub limit: u64,
}

impl From<&Message> for GasMeta {
    fn from(msg: &Message) -> Self {
        Self {
            price: msg.gas_premium,
            limit: msg.gas_limit,
        }
    }
}

/// Per message overrides of the pool's estimation defaults.
///
/// Zero values mean "use the pool default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateSpec {
    /// Multiplier applied to the simulated gas usage
    pub gas_over_estimation: f64,
    /// Multiplier applied to the estimated premium
    pub gas_over_premium: f64,
    /// Ceiling on `gas_limit * gas_fee_cap`
    pub max_fee: U256,
}

/// A message to estimate along with its overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateMessage {
    /// Message with the fields to estimate left at zero
    pub msg: Message,
    /// Optional overrides
    pub spec: Option<EstimateSpec>,
}

/// Outcome of estimating one message of a batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    /// The message, filled in as far as estimation got. On error the nonce is reset to 0.
    pub msg: Message,
    /// Reason estimation failed
    pub err: Option<String>,
}

impl EstimateResult {
    /// A fully estimated message
    pub fn ok(msg: Message) -> Self {
        Self { msg, err: None }
    }

    /// A failed estimation
    pub fn error(msg: Message, err: impl Into<String>) -> Self {
        Self {
            msg,
            err: Some(err.into()),
        }
    }

    /// True if the message was estimated successfully
    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}
