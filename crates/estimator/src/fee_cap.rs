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

use feecast_types::U256;
use feecast_utils::math;

/// Fractional bits used for the base fee increase factor
const INCREASE_PRECISION: u32 = 8;

/// Worst case base fee after `max_queue_blocks` consecutive full blocks, starting from
/// `base_fee`, when each block can raise the base fee by `1 / max_change_denom`.
///
/// This is an upper bound rather than a prediction. It never decreases as
/// `max_queue_blocks` grows.
pub fn project_fee_cap(base_fee: U256, max_queue_blocks: u64, max_change_denom: u64) -> U256 {
    let increase_factor =
        (1.0 + 1.0 / max_change_denom as f64).powf(max_queue_blocks as f64);
    math::uint_mul_f64(base_fee, increase_factor, INCREASE_PRECISION)
}
