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

use anyhow::Context;
use feecast_provider::{ChainProvider, MessagePoolProvider, StateProvider};
use feecast_types::{
    constants::{BASE_FEE_MAX_CHANGE_DENOM, BLOCK_GAS_LIMIT},
    Address, ChainMessage, EstimateMessage, EstimateResult, EstimateSpec, InvocResult, Message,
    TipSet, TipSetKey, U256,
};
use feecast_utils::{guard_timer::CustomTimerGuard, math};
use metrics::{Counter, Histogram};
use metrics_derive::Metrics;
#[cfg(feature = "test-utils")]
use mockall::automock;
use tracing::debug;

use crate::{
    capper::cap_gas_fee, fee_cap::project_fee_cap, gas_limit::GasLimitEstimator,
    premium::PremiumEstimator, price_cache::GasPriceCache, GasEstimationError, Settings,
};

/// Gas estimator trait
///
/// Fields of the message that are already set (non-zero) are kept as they are, except
/// where the final spend cap lowers the fee cap and premium.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait GasEstimator: Send + Sync {
    /// Fill in the gas limit, premium and fee cap of `msg` and apply the spend cap.
    ///
    /// The gas limit is simulated against `tsk`, the empty key meaning the chain head.
    async fn estimate_message_gas(
        &self,
        msg: Message,
        spec: Option<EstimateSpec>,
        tsk: TipSetKey,
    ) -> Result<Message, GasEstimationError>;

    /// Estimate a sequence of messages from the same sender, to be sent with consecutive
    /// nonces starting at `from_nonce`.
    ///
    /// Each message is simulated after the sender's pending messages and the messages
    /// of this batch estimated before it. A failure only fails the message's own slot;
    /// its nonce is reported as zero but still consumed.
    async fn batch_estimate_message_gas(
        &self,
        msgs: Vec<EstimateMessage>,
        from_nonce: u64,
        tsk: TipSetKey,
    ) -> Result<Vec<EstimateResult>, GasEstimationError>;

    /// Gas used by `msg`, with upgrade corrections but without over-estimation
    async fn estimate_gas_limit(
        &self,
        msg: Message,
        tsk: TipSetKey,
    ) -> Result<u64, GasEstimationError>;

    /// Premium for a message to be included within `n_blocks` blocks
    async fn estimate_gas_premium(
        &self,
        n_blocks: u64,
        sender: Address,
        gas_limit: u64,
    ) -> Result<U256, GasEstimationError>;

    /// Fee cap covering `max_queue_blocks` blocks of base fee growth plus the message's premium
    async fn estimate_fee_cap(
        &self,
        msg: Message,
        max_queue_blocks: u64,
    ) -> Result<U256, GasEstimationError>;

    /// Run `msg` as given on top of the sender's pending messages.
    ///
    /// Returns the invocation result, the pending messages applied before it, and the
    /// tipset the call was evaluated on.
    async fn estimate_call_with_gas(
        &self,
        msg: Message,
        tsk: TipSetKey,
    ) -> Result<(InvocResult, Vec<ChainMessage>, TipSet), GasEstimationError>;
}

/// Gas estimator implementation
pub struct GasEstimatorImpl<C, S, M> {
    chain: Arc<C>,
    state: Arc<S>,
    mpool: Arc<M>,
    settings: Settings,
    gas_limit: GasLimitEstimator<C, S, M>,
    premium: PremiumEstimator<C>,
    metrics: EstimatorMetrics,
}

#[derive(Metrics)]
#[metrics(scope = "gas_estimator")]
struct EstimatorMetrics {
    #[metric(describe = "the distribution of single message gas estimate time.")]
    message_estimate_ms: Histogram,
    #[metric(describe = "the distribution of batch gas estimate time.")]
    batch_estimate_ms: Histogram,
    #[metric(describe = "the number of batch entries that failed estimation.")]
    batch_entry_failures: Counter,
}

#[async_trait::async_trait]
impl<C, S, M> GasEstimator for GasEstimatorImpl<C, S, M>
where
    C: ChainProvider + 'static,
    S: StateProvider + 'static,
    M: MessagePoolProvider + 'static,
{
    async fn estimate_message_gas(
        &self,
        mut msg: Message,
        spec: Option<EstimateSpec>,
        tsk: TipSetKey,
    ) -> Result<Message, GasEstimationError> {
        let _timer = CustomTimerGuard::new(self.metrics.message_estimate_ms.clone());
        debug!("estimating message gas for {msg:?} with spec {spec:?}");

        if msg.needs_gas_limit() {
            let ts = self.tip_set(&tsk).await?;
            let gas_used = self.gas_limit.estimate(&msg, &ts).await?;
            msg.gas_limit = self.over_estimate(gas_used, spec.as_ref());
        }

        self.fill_fees(msg, spec.as_ref()).await
    }

    async fn batch_estimate_message_gas(
        &self,
        msgs: Vec<EstimateMessage>,
        from_nonce: u64,
        tsk: TipSetKey,
    ) -> Result<Vec<EstimateResult>, GasEstimationError> {
        let Some(first) = msgs.first() else {
            return Err(GasEstimationError::EmptyInput);
        };
        let _timer = CustomTimerGuard::new(self.metrics.batch_estimate_ms.clone());

        let ts = self.tip_set(&tsk).await?;
        let sender = first.msg.from;
        let from = self
            .state
            .resolve_to_deterministic_address(sender, &ts)
            .await
            .map_err(|e| GasEstimationError::Resolution(sender, e))?;
        let (pending, ts) = self.mpool.pending_for(from).await?;
        let mut prior_msgs: Vec<ChainMessage> =
            pending.into_iter().map(ChainMessage::from).collect();

        let mut results = Vec::with_capacity(msgs.len());
        let mut nonce = from_nonce;
        for EstimateMessage { mut msg, spec } in msgs {
            msg.nonce = nonce;
            nonce += 1;
            debug!("estimating batch message {msg:?} with spec {spec:?}");

            if msg.needs_gas_limit() {
                match self
                    .gas_limit
                    .eval_message_gas_limit(&msg, &prior_msgs, ts.clone())
                    .await
                {
                    Ok(gas_used) => msg.gas_limit = self.over_estimate(gas_used, spec.as_ref()),
                    Err(e) => {
                        results.push(self.failed_entry(msg, format!("estimating gas limit: {e}")));
                        continue;
                    }
                }
            }

            match self.fill_fees(msg.clone(), spec.as_ref()).await {
                Ok(msg) => {
                    prior_msgs.push(msg.clone().into());
                    results.push(EstimateResult::ok(msg));
                }
                Err(e) => {
                    results.push(self.failed_entry(msg, format!("estimating message gas: {e}")));
                }
            }
        }

        Ok(results)
    }

    async fn estimate_gas_limit(
        &self,
        msg: Message,
        tsk: TipSetKey,
    ) -> Result<u64, GasEstimationError> {
        let ts = self.tip_set(&tsk).await?;
        self.gas_limit.estimate(&msg, &ts).await
    }

    async fn estimate_gas_premium(
        &self,
        n_blocks: u64,
        sender: Address,
        gas_limit: u64,
    ) -> Result<U256, GasEstimationError> {
        self.premium.estimate(n_blocks, sender, gas_limit).await
    }

    async fn estimate_fee_cap(
        &self,
        msg: Message,
        max_queue_blocks: u64,
    ) -> Result<U256, GasEstimationError> {
        let head = self
            .chain
            .chain_head()
            .await
            .map_err(GasEstimationError::TipLoad)?;
        let base_fee = head
            .parent_base_fee()
            .with_context(|| format!("chain head {} has no blocks", head.key()))?;

        let projected = project_fee_cap(base_fee, max_queue_blocks, BASE_FEE_MAX_CHANGE_DENOM);
        Ok(projected.saturating_add(msg.gas_premium))
    }

    async fn estimate_call_with_gas(
        &self,
        msg: Message,
        tsk: TipSetKey,
    ) -> Result<(InvocResult, Vec<ChainMessage>, TipSet), GasEstimationError> {
        let ts = self.tip_set(&tsk).await?;
        self.gas_limit
            .call_with_gas_in_pending_context(&msg, &ts)
            .await
    }
}

impl<C, S, M> GasEstimatorImpl<C, S, M>
where
    C: ChainProvider + 'static,
    S: StateProvider + 'static,
    M: MessagePoolProvider + 'static,
{
    /// Create a new gas estimator
    pub fn new(chain: C, state: S, mpool: M, settings: Settings) -> Self {
        let chain = Arc::new(chain);
        let state = Arc::new(state);
        let mpool = Arc::new(mpool);
        let cache = Arc::new(GasPriceCache::new(settings.price_cache_size));

        Self {
            gas_limit: GasLimitEstimator::new(
                Arc::clone(&chain),
                Arc::clone(&state),
                Arc::clone(&mpool),
                settings.upgrade_heights.clone(),
                settings.max_fork_retries,
            ),
            premium: PremiumEstimator::new(
                Arc::clone(&chain),
                cache,
                settings.premium_target_bias_percent,
                settings.premium_noise_stddev,
            ),
            chain,
            state,
            mpool,
            settings,
            metrics: EstimatorMetrics::default(),
        }
    }

    async fn tip_set(&self, tsk: &TipSetKey) -> Result<TipSet, GasEstimationError> {
        self.chain
            .chain_tip_set(tsk)
            .await
            .map_err(GasEstimationError::TipLoad)
    }

    /// Fill in the premium and fee cap if unset, then apply the spend cap
    async fn fill_fees(
        &self,
        mut msg: Message,
        spec: Option<&EstimateSpec>,
    ) -> Result<Message, GasEstimationError> {
        if msg.needs_gas_premium() {
            let premium = self
                .premium
                .estimate(self.settings.premium_blocks_included, msg.from, msg.gas_limit)
                .await?;
            msg.gas_premium = match spec.map(|s| s.gas_over_premium) {
                Some(over) if over > 0.0 => math::uint_mul_f64_exact(premium, over),
                _ => premium,
            };
        }

        if msg.needs_gas_fee_cap() {
            msg.gas_fee_cap = self
                .estimate_fee_cap(msg.clone(), self.settings.fee_cap_max_queue_blocks)
                .await?;
        }

        Ok(cap_gas_fee(self.settings.default_max_fee, msg, spec))
    }

    fn over_estimate(&self, gas_used: u64, spec: Option<&EstimateSpec>) -> u64 {
        let over = spec
            .map(|s| s.gas_over_estimation)
            .filter(|over| *over > 0.0)
            .unwrap_or(self.settings.gas_limit_overestimation);
        ((gas_used as f64 * over) as u64).min(BLOCK_GAS_LIMIT)
    }

    fn failed_entry(&self, mut msg: Message, err: String) -> EstimateResult {
        debug!("batch entry failed: {err}");
        self.metrics.batch_entry_failures.increment(1);
        msg.nonce = 0;
        EstimateResult::error(msg, err)
    }
}

#[cfg(test)]
mod tests {
    use feecast_provider::{MockChainProvider, MockMessagePoolProvider, MockStateProvider};
    use feecast_types::{
        BlockHeader, Bytes, ExitCode, ForkParams, MessageReceipt, SignedMessage, B256,
    };

    use super::*;

    const HEAD: u64 = 30;
    const WINDOW_PREMIUM: u64 = 1_000_000;

    fn tip_set(height: u64) -> TipSet {
        TipSet {
            height,
            parents: TipSetKey::new(vec![block_id(height.saturating_sub(1))]),
            blocks: vec![BlockHeader {
                id: block_id(height),
                parent_base_fee: U256::from(100),
            }],
        }
    }

    fn block_id(height: u64) -> B256 {
        B256::left_padding_from(&height.to_be_bytes())
    }

    fn height_of(key: &TipSetKey) -> u64 {
        u64::from_be_bytes(key.block_ids()[0].as_slice()[24..].try_into().unwrap())
    }

    fn invoc(gas_used: u64, exit_code: ExitCode) -> InvocResult {
        InvocResult {
            msg: Message::default(),
            msg_rct: MessageReceipt {
                exit_code,
                return_data: Bytes::new(),
                gas_used,
            },
            error: String::new(),
        }
    }

    fn chain() -> MockChainProvider {
        let mut chain = MockChainProvider::new();
        chain.expect_chain_head().returning(|| Ok(tip_set(HEAD)));
        chain.expect_chain_tip_set().returning(|key| {
            if key.is_empty() {
                Ok(tip_set(HEAD))
            } else {
                Ok(tip_set(height_of(key)))
            }
        });
        chain
            .expect_load_tip_set()
            .returning(|key| Ok(tip_set(height_of(key))));
        chain.expect_messages_for_tip_set().returning(|_| {
            Ok(vec![Message {
                gas_premium: U256::from(WINDOW_PREMIUM),
                gas_limit: 1_000_000,
                ..Default::default()
            }
            .into()])
        });
        chain
    }

    fn mpool(pending: Vec<SignedMessage>) -> MockMessagePoolProvider {
        let mut mpool = MockMessagePoolProvider::new();
        mpool
            .expect_pending_for()
            .returning(move |_| Ok((pending.clone(), tip_set(HEAD))));
        mpool
    }

    fn state(gas_used: u64) -> MockStateProvider {
        let mut state = MockStateProvider::new();
        state
            .expect_resolve_to_deterministic_address()
            .returning(|addr, _| Ok(addr));
        state
            .expect_call_with_gas()
            .returning(move |_, _, _| Ok(invoc(gas_used, ExitCode::OK)));
        state
    }

    fn settings() -> Settings {
        Settings {
            premium_noise_stddev: 0.0,
            upgrade_heights: ForkParams::none(),
            ..Default::default()
        }
    }

    fn estimator(
        chain: MockChainProvider,
        state: MockStateProvider,
        mpool: MockMessagePoolProvider,
        settings: Settings,
    ) -> GasEstimatorImpl<MockChainProvider, MockStateProvider, MockMessagePoolProvider> {
        GasEstimatorImpl::new(chain, state, mpool, settings)
    }

    fn message() -> Message {
        Message {
            from: Address::repeat_byte(1),
            to: Address::repeat_byte(2),
            method: 2,
            ..Default::default()
        }
    }

    // 100 * floor(1.125^20 * 256) >> 8
    const PROJECTED_BASE_FEE: u64 = 1054;

    #[tokio::test]
    async fn test_estimate_message_gas_fills_all_fields() {
        let estimator = estimator(chain(), state(1_000), mpool(vec![]), settings());

        let msg = estimator
            .estimate_message_gas(message(), None, TipSetKey::empty())
            .await
            .unwrap();

        assert_eq!(msg.gas_limit, 1_250);
        assert_eq!(msg.gas_premium, U256::from(WINDOW_PREMIUM));
        assert_eq!(
            msg.gas_fee_cap,
            U256::from(PROJECTED_BASE_FEE + WINDOW_PREMIUM)
        );
        assert!(msg.gas_fee_cap >= msg.gas_premium);
    }

    #[tokio::test]
    async fn test_estimate_message_gas_keeps_set_fields() {
        let mut state = MockStateProvider::new();
        state.expect_call_with_gas().times(0);
        let mut chain = MockChainProvider::new();
        chain.expect_chain_head().times(0);

        let estimator = estimator(chain, state, MockMessagePoolProvider::new(), settings());

        let input = Message {
            gas_limit: 5_000,
            gas_premium: U256::from(7),
            gas_fee_cap: U256::from(9),
            ..message()
        };
        let msg = estimator
            .estimate_message_gas(input.clone(), None, TipSetKey::empty())
            .await
            .unwrap();
        assert_eq!(msg, input);
    }

    #[tokio::test]
    async fn test_estimate_message_gas_spec_overrides() {
        let estimator = estimator(chain(), state(1_000), mpool(vec![]), settings());

        let spec = EstimateSpec {
            gas_over_estimation: 2.0,
            gas_over_premium: 1.5,
            max_fee: U256::ZERO,
        };
        let msg = estimator
            .estimate_message_gas(message(), Some(spec), TipSetKey::empty())
            .await
            .unwrap();

        assert_eq!(msg.gas_limit, 2_000);
        assert_eq!(msg.gas_premium, U256::from(1_500_000));
        assert_eq!(
            msg.gas_fee_cap,
            U256::from(PROJECTED_BASE_FEE + 1_500_000)
        );
    }

    #[tokio::test]
    async fn test_estimate_message_gas_premium_override_keeps_precision() {
        let estimator = estimator(chain(), state(1_000), mpool(vec![]), settings());

        let spec = EstimateSpec {
            gas_over_premium: 1.1,
            ..Default::default()
        };
        let msg = estimator
            .estimate_message_gas(message(), Some(spec), TipSetKey::empty())
            .await
            .unwrap();

        assert_eq!(msg.gas_premium, U256::from(1_100_000));
        assert_eq!(
            msg.gas_fee_cap,
            U256::from(PROJECTED_BASE_FEE + 1_100_000)
        );
    }

    #[tokio::test]
    async fn test_estimate_message_gas_limit_capped_at_block_limit() {
        let estimator = estimator(chain(), state(9_000_000_000), mpool(vec![]), settings());

        let msg = estimator
            .estimate_message_gas(message(), None, TipSetKey::empty())
            .await
            .unwrap();
        assert_eq!(msg.gas_limit, BLOCK_GAS_LIMIT);
    }

    #[tokio::test]
    async fn test_estimate_message_gas_applies_spend_cap() {
        let estimator = estimator(chain(), state(800_000), mpool(vec![]), settings());

        // 1_000_000 gas after over-estimation, at most 5_000 per gas
        let spec = EstimateSpec {
            max_fee: U256::from(5_000_000_000_u64),
            ..Default::default()
        };
        let msg = estimator
            .estimate_message_gas(message(), Some(spec), TipSetKey::empty())
            .await
            .unwrap();

        assert_eq!(msg.gas_limit, 1_000_000);
        assert_eq!(msg.gas_fee_cap, U256::from(5_000));
        assert_eq!(msg.gas_premium, U256::from(5_000));
    }

    #[tokio::test]
    async fn test_estimate_message_gas_execution_failure() {
        let mut state = MockStateProvider::new();
        state
            .expect_resolve_to_deterministic_address()
            .returning(|addr, _| Ok(addr));
        state
            .expect_call_with_gas()
            .returning(|_, _, _| Ok(invoc(0, ExitCode(16))));
        let estimator = estimator(chain(), state, mpool(vec![]), settings());

        let err = estimator
            .estimate_message_gas(message(), None, TipSetKey::empty())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GasEstimationError::ExecutionFailed {
                exit_code: ExitCode(16),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_batch_nonces_and_isolated_failure() {
        let pending = vec![SignedMessage {
            message: Message {
                nonce: 9,
                ..message()
            },
            signature: Bytes::new(),
        }];

        let mut state = MockStateProvider::new();
        state
            .expect_resolve_to_deterministic_address()
            .times(1)
            .returning(|addr, _| Ok(addr));
        state
            .expect_call_with_gas()
            .times(5)
            .returning(|msg, prior, _| {
                // the pending message plus every successful batch entry before this one
                let expected_prior = match msg.nonce {
                    10 => vec![9],
                    11 => vec![9, 10],
                    12 | 13 => vec![9, 10, 11],
                    14 => vec![9, 10, 11, 13],
                    n => panic!("unexpected nonce {n}"),
                };
                let prior: Vec<u64> = prior.iter().map(|m| m.message().nonce).collect();
                assert_eq!(prior, expected_prior);

                if msg.nonce == 12 {
                    Ok(invoc(0, ExitCode(7)))
                } else {
                    Ok(invoc(1_000, ExitCode::OK))
                }
            });

        let mut mpool = MockMessagePoolProvider::new();
        mpool
            .expect_pending_for()
            .times(1)
            .returning(move |_| Ok((pending.clone(), tip_set(HEAD))));

        let estimator = estimator(chain(), state, mpool, settings());

        let msgs = (0..5)
            .map(|_| EstimateMessage {
                msg: message(),
                spec: None,
            })
            .collect();
        let results = estimator
            .batch_estimate_message_gas(msgs, 10, TipSetKey::empty())
            .await
            .unwrap();

        let nonces: Vec<u64> = results.iter().map(|r| r.msg.nonce).collect();
        assert_eq!(nonces, vec![10, 11, 0, 13, 14]);

        assert!(results[2]
            .err
            .as_deref()
            .is_some_and(|e| e.starts_with("estimating gas limit")));
        for i in [0, 1, 3, 4] {
            assert!(results[i].is_ok());
            assert_eq!(results[i].msg.gas_limit, 1_250);
            assert_eq!(results[i].msg.gas_premium, U256::from(WINDOW_PREMIUM));
        }
    }

    #[tokio::test]
    async fn test_batch_empty_input() {
        let estimator = estimator(
            MockChainProvider::new(),
            MockStateProvider::new(),
            MockMessagePoolProvider::new(),
            settings(),
        );

        let err = estimator
            .batch_estimate_message_gas(vec![], 0, TipSetKey::empty())
            .await
            .unwrap_err();
        assert!(matches!(err, GasEstimationError::EmptyInput));
    }

    #[tokio::test]
    async fn test_batch_spec_over_estimation() {
        let estimator = estimator(chain(), state(1_000), mpool(vec![]), settings());

        let msgs = vec![
            EstimateMessage {
                msg: message(),
                spec: Some(EstimateSpec {
                    gas_over_estimation: 1.5,
                    ..Default::default()
                }),
            },
            EstimateMessage {
                msg: message(),
                spec: None,
            },
        ];
        let results = estimator
            .batch_estimate_message_gas(msgs, 0, TipSetKey::empty())
            .await
            .unwrap();

        assert_eq!(results[0].msg.gas_limit, 1_500);
        assert_eq!(results[1].msg.gas_limit, 1_250);
    }

    #[tokio::test]
    async fn test_estimate_fee_cap_adds_premium() {
        let estimator = estimator(
            chain(),
            MockStateProvider::new(),
            MockMessagePoolProvider::new(),
            settings(),
        );

        let msg = Message {
            gas_premium: U256::from(500),
            ..message()
        };
        let fee_cap = estimator.estimate_fee_cap(msg, 20).await.unwrap();
        assert_eq!(fee_cap, U256::from(PROJECTED_BASE_FEE + 500));

        let fee_cap = estimator.estimate_fee_cap(message(), 0).await.unwrap();
        assert_eq!(fee_cap, U256::from(100));
    }

    #[tokio::test]
    async fn test_estimate_call_with_gas_runs_message_as_given() {
        let pending = vec![SignedMessage {
            message: Message {
                nonce: 0,
                ..message()
            },
            signature: Bytes::new(),
        }];

        let mut state = MockStateProvider::new();
        state
            .expect_resolve_to_deterministic_address()
            .returning(|addr, _| Ok(addr));
        state
            .expect_call_with_gas()
            .withf(|msg, _, _| msg.gas_limit == 42_000)
            .returning(|_, _, _| Ok(invoc(21_000, ExitCode::OK)));

        let estimator = estimator(chain(), state, mpool(pending), settings());

        let msg = Message {
            nonce: 1,
            gas_limit: 42_000,
            ..message()
        };
        let (res, prior, ts) = estimator
            .estimate_call_with_gas(msg, TipSetKey::empty())
            .await
            .unwrap();
        assert_eq!(res.msg_rct.gas_used, 21_000);
        assert_eq!(prior.len(), 1);
        assert_eq!(ts.height, HEAD);
    }

    #[tokio::test]
    async fn test_estimate_gas_limit_at_key() {
        let mut chain = MockChainProvider::new();
        chain
            .expect_chain_tip_set()
            .withf(|key| !key.is_empty())
            .times(1)
            .returning(|key| Ok(tip_set(height_of(key))));

        let mut state = MockStateProvider::new();
        state
            .expect_resolve_to_deterministic_address()
            .withf(|_, ts| ts.height == 12)
            .returning(|addr, _| Ok(addr));
        state
            .expect_call_with_gas()
            .returning(|_, _, _| Ok(invoc(3_000, ExitCode::OK)));

        let estimator = estimator(chain, state, mpool(vec![]), settings());

        let gas = estimator
            .estimate_gas_limit(message(), tip_set(12).key())
            .await
            .unwrap();
        assert_eq!(gas, 3_000);
    }
}
