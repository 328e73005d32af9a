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

use alloy_primitives::Bytes;
use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::Message;

/// Exit status of a message execution
#[derive(Display, Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[display("{0}")]
#[serde(transparent)]
pub struct ExitCode(pub u32);

impl ExitCode {
    /// Successful execution
    pub const OK: ExitCode = ExitCode(0);

    /// True if the execution succeeded
    pub fn is_success(&self) -> bool {
        *self == Self::OK
    }
}

/// Receipt of an executed message
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReceipt {
    /// Exit status
    pub exit_code: ExitCode,
    /// Return value
    pub return_data: Bytes,
    /// Gas consumed
    pub gas_used: u64,
}

/// Result of invoking a message against a state without committing it
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocResult {
    /// The message that was executed
    pub msg: Message,
    /// Receipt of the execution
    pub msg_rct: MessageReceipt,
    /// Error reported by the VM, empty on success
    pub error: String,
}
