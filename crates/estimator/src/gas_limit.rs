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

use feecast_provider::{CallError, ChainProvider, MessagePoolProvider, StateProvider};
use feecast_types::{
    constants::{BLOCK_GAS_LIMIT, MINIMUM_BASE_FEE, PAYCH_COLLECT_REFUND_GAS},
    methods, ChainMessage, ForkParams, InvocResult, Message, SignedMessage, TipSet, U256,
};
use feecast_utils::{log::LogOnError, math};
use metrics::Counter;
use metrics_derive::Metrics;
use tracing::{info, warn, Level};

use crate::{
    upgrade::{self, CorrectionTarget},
    GasEstimationError,
};

/// Fractional bits used when applying upgrade corrections to gas usage
const CORRECTION_PRECISION: u32 = 10;

/// Estimates the gas used by a message by running it through the VM on top of the
/// sender's pending messages.
pub(crate) struct GasLimitEstimator<C, S, M> {
    chain: Arc<C>,
    state: Arc<S>,
    mpool: Arc<M>,
    upgrade_heights: ForkParams,
    max_fork_retries: u32,
    metrics: GasLimitMetrics,
}

#[derive(Metrics)]
#[metrics(scope = "gas_estimator")]
struct GasLimitMetrics {
    #[metric(describe = "the number of calls retried on a parent tipset due to a state fork.")]
    fork_retries: Counter,
    #[metric(describe = "the number of simulated messages that did not exit successfully.")]
    execution_failures: Counter,
}

impl<C, S, M> GasLimitEstimator<C, S, M>
where
    C: ChainProvider,
    S: StateProvider,
    M: MessagePoolProvider,
{
    pub(crate) fn new(
        chain: Arc<C>,
        state: Arc<S>,
        mpool: Arc<M>,
        upgrade_heights: ForkParams,
        max_fork_retries: u32,
    ) -> Self {
        Self {
            chain,
            state,
            mpool,
            upgrade_heights,
            max_fork_retries,
            metrics: GasLimitMetrics::default(),
        }
    }

    /// Estimate the gas used by `msg`, evaluated against the sender's pending messages
    /// with nonces below the message's own.
    pub(crate) async fn estimate(
        &self,
        msg: &Message,
        ts: &TipSet,
    ) -> Result<u64, GasEstimationError> {
        let probe = probe_message(msg);
        let (res, _, ts) = self.call_with_gas_in_pending_context(&probe, ts).await?;
        self.corrected_gas_used(msg, &res, &ts).await
    }

    /// Estimate the gas used by `msg` after `prior_msgs` have been applied on top of `ts`.
    pub(crate) async fn eval_message_gas_limit(
        &self,
        msg: &Message,
        prior_msgs: &[ChainMessage],
        ts: TipSet,
    ) -> Result<u64, GasEstimationError> {
        let probe = probe_message(msg);
        let (res, ts) = self.call_with_fork_retry(&probe, prior_msgs, ts).await?;
        self.corrected_gas_used(msg, &res, &ts).await
    }

    /// Run `msg` as given on top of the sender's pending messages with nonces below its own.
    ///
    /// Returns the invocation result together with the messages applied before it and
    /// the tipset it was finally evaluated on.
    pub(crate) async fn call_with_gas_in_pending_context(
        &self,
        msg: &Message,
        ts: &TipSet,
    ) -> Result<(InvocResult, Vec<ChainMessage>, TipSet), GasEstimationError> {
        let from = self
            .state
            .resolve_to_deterministic_address(msg.from, ts)
            .await
            .map_err(|e| GasEstimationError::Resolution(msg.from, e))?;

        let (pending, pending_ts) = self.mpool.pending_for(from).await?;
        let prior_msgs = prior_messages(&pending, msg.nonce);

        let (res, ts) = self
            .call_with_fork_retry(msg, &prior_msgs, pending_ts)
            .await?;
        Ok((res, prior_msgs, ts))
    }

    /// Call the VM, stepping back to the parent tipset while the call lands on an
    /// expensive state fork.
    async fn call_with_fork_retry(
        &self,
        msg: &Message,
        prior_msgs: &[ChainMessage],
        mut ts: TipSet,
    ) -> Result<(InvocResult, TipSet), GasEstimationError> {
        let mut retries = 0;
        loop {
            match self.state.call_with_gas(msg, prior_msgs, &ts).await {
                Ok(res) => return Ok((res, ts)),
                Err(CallError::ExpensiveFork(height)) => {
                    if retries >= self.max_fork_retries || ts.is_genesis() {
                        return Err(GasEstimationError::ForkRetriesExhausted(retries));
                    }
                    warn!(
                        "call at height {} hit expensive fork at {height}, retrying on parent",
                        ts.height
                    );
                    self.metrics.fork_retries.increment(1);

                    ts = self
                        .chain
                        .load_tip_set(&ts.parents)
                        .await
                        .map_err(GasEstimationError::TipLoad)?;
                    retries += 1;
                }
                Err(e) => return Err(GasEstimationError::CallFailed(e)),
            }
        }
    }

    async fn corrected_gas_used(
        &self,
        msg: &Message,
        res: &InvocResult,
        ts: &TipSet,
    ) -> Result<u64, GasEstimationError> {
        let rct = &res.msg_rct;
        if !rct.exit_code.is_success() {
            warn!(
                "message from {} method {} failed execution: exit {}, reason: {}",
                msg.from, msg.method, rct.exit_code, res.error
            );
            self.metrics.execution_failures.increment(1);
            return Err(GasEstimationError::ExecutionFailed {
                exit_code: rct.exit_code,
                reason: res.error.clone(),
            });
        }

        let mut gas_used = rct.gas_used;

        if let Some(correction) = upgrade::correction_at(ts.height, &self.upgrade_heights) {
            let target = if msg.method == methods::SEND {
                CorrectionTarget::Other
            } else {
                let actor = self
                    .state
                    .get_actor(msg.to, ts)
                    .await
                    .log_on_error_level(Level::DEBUG, "loading actor for upgrade correction");
                match actor {
                    Ok(Some(actor)) if actor.is_storage_miner() => CorrectionTarget::StorageMiner,
                    _ => CorrectionTarget::Other,
                }
            };
            let multi = correction.multiplier(msg.method, target);
            info!(
                "overestimating gas around the {} upgrade by factor {multi}",
                correction.upgrade
            );
            gas_used = math::gas_mul_f64(gas_used, multi, CORRECTION_PRECISION);
        }

        // collect deletes the channel actor and refunds gas that the simulation already counted
        if msg.method == methods::PAYCH_COLLECT {
            let actor = self
                .state
                .get_actor(msg.to, ts)
                .await
                .log_on_error_level(Level::DEBUG, "loading payment channel actor");
            if let Ok(Some(actor)) = actor {
                if actor.is_payment_channel() {
                    gas_used = gas_used.saturating_add(PAYCH_COLLECT_REFUND_GAS);
                }
            }
        }

        Ok(gas_used)
    }
}

/// Copy of `msg` with gas parameters high enough that gas never limits its execution
fn probe_message(msg: &Message) -> Message {
    Message {
        gas_limit: BLOCK_GAS_LIMIT,
        gas_fee_cap: U256::from(MINIMUM_BASE_FEE + 1),
        gas_premium: U256::from(1),
        ..msg.clone()
    }
}

/// Pending messages up to, not including, the one with `nonce`
fn prior_messages(pending: &[SignedMessage], nonce: u64) -> Vec<ChainMessage> {
    pending
        .iter()
        .take_while(|m| m.message.nonce != nonce)
        .cloned()
        .map(ChainMessage::from)
        .collect()
}
