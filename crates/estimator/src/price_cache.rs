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

use feecast_provider::{ChainProvider, ProviderResult};
use feecast_types::{GasMeta, TipSet, TipSetKey};
use feecast_utils::cache::TwoQueueCache;
use metrics::Counter;
use metrics_derive::Metrics;
use parking_lot::Mutex;

/// Cache of the premium and gas limit of every message included in a tipset.
///
/// Entries are immutable once inserted. Loader errors are not cached.
pub struct GasPriceCache {
    cache: Mutex<TwoQueueCache<TipSetKey, Arc<[GasMeta]>>>,
    metrics: CacheMetrics,
}

impl GasPriceCache {
    /// Create a cache holding the stats of at most `size` tipsets
    pub fn new(size: u32) -> Self {
        Self {
            cache: Mutex::new(TwoQueueCache::new(size)),
            metrics: CacheMetrics::default(),
        }
    }

    /// Gas stats of the messages included in `ts`, loading them through `chain` on a miss.
    pub async fn get_tip_set_gas_stats<C>(
        &self,
        chain: &C,
        ts: &TipSet,
    ) -> ProviderResult<Arc<[GasMeta]>>
    where
        C: ChainProvider + ?Sized,
    {
        let key = ts.key();
        let cached = self.cache.lock().get(&key).cloned();
        if let Some(stats) = cached {
            self.metrics.hits.increment(1);
            return Ok(stats);
        }
        self.metrics.misses.increment(1);

        let msgs = chain.messages_for_tip_set(ts).await?;
        let stats: Arc<[GasMeta]> = msgs.iter().map(|m| GasMeta::from(m.message())).collect();

        self.cache.lock().insert(key, Arc::clone(&stats));
        Ok(stats)
    }

    /// Number of tipsets currently cached
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

#[derive(Metrics)]
#[metrics(scope = "gas_price_cache")]
struct CacheMetrics {
    #[metric(describe = "the number of tipset gas stats served from the cache.")]
    hits: Counter,
    #[metric(describe = "the number of tipset gas stats loaded from the chain store.")]
    misses: Counter,
}
