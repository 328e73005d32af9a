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

use feecast_types::{constants::DEFAULT_MAX_FEE, ForkParams, U256};
use serde::Deserialize;

/// Settings for gas estimation
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of tipsets kept in the gas price cache
    pub price_cache_size: u32,
    /// Multiplier applied to the simulated gas usage when a message does not specify one
    pub gas_limit_overestimation: f64,
    /// Ceiling on `gas_limit * gas_fee_cap` when a message does not specify one
    pub default_max_fee: U256,
    /// Number of blocks a message should be included within, used when filling in the premium
    pub premium_blocks_included: u64,
    /// Number of blocks of base fee growth the fee cap should cover
    pub fee_cap_max_queue_blocks: u64,
    /// How far above the median gas usage the premium percentile is taken, in percent
    /// of the gas target
    pub premium_target_bias_percent: u64,
    /// Standard deviation of the multiplicative noise applied to premiums
    pub premium_noise_stddev: f64,
    /// Maximum number of parent tipsets tried when a call hits an expensive fork
    pub max_fork_retries: u32,
    /// Network upgrade activation heights
    pub upgrade_heights: ForkParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            price_cache_size: 50,
            gas_limit_overestimation: 1.25,
            default_max_fee: U256::from(DEFAULT_MAX_FEE),
            premium_blocks_included: 10,
            fee_cap_max_queue_blocks: 20,
            premium_target_bias_percent: 5,
            premium_noise_stddev: 0.005,
            max_fork_retries: 10,
            upgrade_heights: ForkParams::mainnet(),
        }
    }
}

impl Settings {
    /// Check if the settings are valid
    pub fn validate(&self) -> Option<String> {
        if self.price_cache_size == 0 {
            return Some("price_cache_size must be greater than zero".to_string());
        }
        if !(self.gas_limit_overestimation.is_finite() && self.gas_limit_overestimation >= 1.0) {
            return Some("gas_limit_overestimation must be a finite value >= 1.0".to_string());
        }
        if self.premium_blocks_included == 0 {
            return Some("premium_blocks_included must be greater than zero".to_string());
        }
        if !(self.premium_noise_stddev.is_finite() && self.premium_noise_stddev >= 0.0) {
            return Some("premium_noise_stddev must be a finite, non-negative value".to_string());
        }
        None
    }
}
