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

//! Protocol constants that have no other home

/// Maximum total gas of all messages in a single block.
pub const BLOCK_GAS_LIMIT: u64 = 10_000_000_000;

/// Gas usage per block the base fee mechanism steers towards.
pub const BLOCK_GAS_TARGET: u64 = BLOCK_GAS_LIMIT / 2;

/// Lowest value the base fee can ever take, in atto units per gas.
pub const MINIMUM_BASE_FEE: u64 = 100;

/// The base fee can change by at most `1 / BASE_FEE_MAX_CHANGE_DENOM` between two tipsets.
pub const BASE_FEE_MAX_CHANGE_DENOM: u64 = 8;

/// Smallest gas premium the pool will ever suggest.
pub const MIN_GAS_PREMIUM: u64 = 100_000;

/// Gas refunded when a payment channel actor deletes itself on collect.
pub const PAYCH_COLLECT_REFUND_GAS: u64 = 76_000;

/// Default ceiling on `gas_limit * gas_fee_cap` for a single message: 0.07 FIL.
pub const DEFAULT_MAX_FEE: u128 = 70_000_000_000_000_000;
