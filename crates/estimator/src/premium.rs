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

use std::sync::Arc;

use feecast_provider::ChainProvider;
use feecast_types::{
    constants::{BLOCK_GAS_TARGET, MIN_GAS_PREMIUM},
    Address, GasMeta, U256,
};
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::{price_cache::GasPriceCache, GasEstimationError};

/// Fractional bits used when applying noise to a premium
const NOISE_PRECISION: u32 = 32;

/// Estimates the gas premium needed to be included within a number of blocks,
/// from the premiums paid by messages in recent tipsets.
pub(crate) struct PremiumEstimator<C> {
    chain: Arc<C>,
    cache: Arc<GasPriceCache>,
    target_bias_percent: u64,
    noise_stddev: f64,
}

impl<C> PremiumEstimator<C>
where
    C: ChainProvider,
{
    pub(crate) fn new(
        chain: Arc<C>,
        cache: Arc<GasPriceCache>,
        target_bias_percent: u64,
        noise_stddev: f64,
    ) -> Self {
        Self {
            chain,
            cache,
            target_bias_percent,
            noise_stddev,
        }
    }

    /// Estimate the premium for a message from `sender` using `gas_limit` gas to be included
    /// within `n_blocks` blocks.
    ///
    /// Walks back `2 * n_blocks` tipsets from the head, stopping at genesis.
    pub(crate) async fn estimate(
        &self,
        n_blocks: u64,
        sender: Address,
        gas_limit: u64,
    ) -> Result<U256, GasEstimationError> {
        let n_blocks = n_blocks.max(1);

        let mut ts = self
            .chain
            .chain_head()
            .await
            .map_err(GasEstimationError::TipLoad)?;

        let mut prices: Vec<GasMeta> = vec![];
        let mut blocks = 0_u64;
        for _ in 0..n_blocks.saturating_mul(2) {
            if ts.is_genesis() {
                break;
            }

            let parent = self
                .chain
                .load_tip_set(&ts.parents)
                .await
                .map_err(GasEstimationError::TipLoad)?;
            blocks += parent.block_count() as u64;

            let stats = self
                .cache
                .get_tip_set_gas_stats(self.chain.as_ref(), &parent)
                .await
                .map_err(GasEstimationError::TipLoad)?;
            prices.extend_from_slice(&stats);

            ts = parent;
        }

        let premium =
            median_gas_premium(prices, blocks, BLOCK_GAS_TARGET, self.target_bias_percent);
        let premium = premium_floor(premium, n_blocks);
        let premium = apply_noise(premium, self.noise_stddev, &mut rand::thread_rng());

        debug!(
            "estimated premium {premium} for {sender} with gas limit {gas_limit}, {n_blocks} blocks"
        );
        Ok(premium)
    }
}

/// Premium paid at the gas-weighted percentile of `prices` that would fill half of the
/// gas target of `blocks` blocks, plus `bias_percent` percent of the target.
///
/// The result is the average of the premium at which the running gas total passes that
/// point and the premium just above it.
pub fn median_gas_premium(
    mut prices: Vec<GasMeta>,
    blocks: u64,
    block_gas_target: u64,
    bias_percent: u64,
) -> U256 {
    prices.sort_by(|a, b| b.price.cmp(&a.price));

    let total = block_gas_target as i128 * blocks as i128;
    let mut at = total / 2 + total * bias_percent as i128 / 200;

    let mut prev1 = U256::ZERO;
    let mut prev2 = U256::ZERO;
    for meta in &prices {
        prev2 = prev1;
        prev1 = meta.price;
        at -= meta.limit as i128;
        if at < 0 {
            break;
        }
    }

    if prev2.is_zero() {
        prev1
    } else {
        prev1.saturating_add(prev2) / U256::from(2)
    }
}

/// Raise a premium below the network minimum. Short inclusion targets get a larger
/// floor so they can catch up with a window of under-priced blocks.
pub fn premium_floor(premium: U256, n_blocks: u64) -> U256 {
    let min = U256::from(MIN_GAS_PREMIUM);
    if premium >= min {
        return premium;
    }
    match n_blocks {
        1 => min * U256::from(2),
        2 => min * U256::from(3) / U256::from(2),
        _ => min,
    }
}

/// Multiply `premium` by a factor drawn from `N(1, stddev)`.
///
/// The factor is converted to 32 bit fixed-point and bumped by one unit so it can never
/// be exactly zero.
pub fn apply_noise<R: Rng>(premium: U256, stddev: f64, rng: &mut R) -> U256 {
    let normal: f64 = rng.sample(StandardNormal);
    let noise = 1.0 + normal * stddev;
    let factor = ((noise * (1_u64 << NOISE_PRECISION) as f64) as u64).saturating_add(1);
    premium.saturating_mul(U256::from(factor)) >> NOISE_PRECISION as usize
}
