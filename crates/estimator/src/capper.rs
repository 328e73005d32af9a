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

use feecast_types::{EstimateSpec, Message, U256};

/// Clamp the fee cap of `msg` so that `gas_limit * gas_fee_cap` stays within the
/// spend ceiling.
///
/// The ceiling is `spec.max_fee` when set, otherwise `default_max_fee`. When the fee cap
/// is lowered the premium is lowered with it so it never exceeds the fee cap.
pub fn cap_gas_fee(
    default_max_fee: U256,
    mut msg: Message,
    spec: Option<&EstimateSpec>,
) -> Message {
    let max_fee = spec
        .map(|s| s.max_fee)
        .filter(|fee| !fee.is_zero())
        .unwrap_or(default_max_fee);

    let gas_limit = U256::from(msg.gas_limit);
    if msg.gas_fee_cap.saturating_mul(gas_limit) <= max_fee {
        return msg;
    }

    msg.gas_fee_cap = max_fee / gas_limit;
    msg.gas_premium = msg.gas_premium.min(msg.gas_fee_cap);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(gas_limit: u64, fee_cap: u64, premium: u64) -> Message {
        Message {
            gas_limit,
            gas_fee_cap: U256::from(fee_cap),
            gas_premium: U256::from(premium),
            ..Default::default()
        }
    }

    #[test]
    fn test_under_ceiling_untouched() {
        let msg = message(1_000, 10_000, 100);
        assert_eq!(cap_gas_fee(U256::from(10_000_000), msg.clone(), None), msg);
    }

    #[test]
    fn test_fee_cap_clamped() {
        let msg = cap_gas_fee(
            U256::from(5_000_000_000_u64),
            message(1_000_000, 10_000, 4_000),
            None,
        );
        assert_eq!(msg.gas_fee_cap, U256::from(5_000));
        assert_eq!(msg.gas_premium, U256::from(4_000));
    }

    #[test]
    fn test_premium_lowered_to_fee_cap() {
        let msg = cap_gas_fee(
            U256::from(5_000_000_000_u64),
            message(1_000_000, 10_000, 8_000),
            None,
        );
        assert_eq!(msg.gas_fee_cap, U256::from(5_000));
        assert_eq!(msg.gas_premium, U256::from(5_000));
    }

    #[test]
    fn test_spec_max_fee_overrides_default() {
        let spec = EstimateSpec {
            max_fee: U256::from(2_000_000_000_u64),
            ..Default::default()
        };
        let msg = cap_gas_fee(
            U256::from(5_000_000_000_u64),
            message(1_000_000, 10_000, 100),
            Some(&spec),
        );
        assert_eq!(msg.gas_fee_cap, U256::from(2_000));

        // a zero max fee falls back to the default
        let msg = cap_gas_fee(
            U256::from(5_000_000_000_u64),
            message(1_000_000, 10_000, 100),
            Some(&EstimateSpec::default()),
        );
        assert_eq!(msg.gas_fee_cap, U256::from(5_000));
    }

    #[test]
    fn test_zero_gas_limit_untouched() {
        let msg = message(0, 10_000, 100);
        assert_eq!(cap_gas_fee(U256::ZERO, msg.clone(), None), msg);
    }
}
