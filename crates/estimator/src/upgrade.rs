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

//! Gas usage corrections for messages simulated just before a network upgrade that
//! reprices them.

use feecast_types::{methods, ForkParams, MethodNum, NetworkUpgrade};

/// Multipliers applied to simulated gas usage in the last `lookback` epochs before
/// `upgrade` activates.
#[derive(Clone, Copy, Debug)]
pub struct TransitionalCorrection {
    /// Upgrade that reprices the messages
    pub upgrade: NetworkUpgrade,
    /// Number of epochs before activation the correction applies for
    pub lookback: u64,
    /// Multiplier for plain sends
    pub send: f64,
    /// Multipliers for storage miner methods, by method number
    pub storage_miner: &'static [(MethodNum, f64)],
}

/// Known corrections, one per upgrade
pub const TRANSITIONAL_CORRECTIONS: &[TransitionalCorrection] = &[TransitionalCorrection {
    upgrade: NetworkUpgrade::Hygge,
    lookback: 20,
    send: 3.0,
    storage_miner: &[
        (3, 1.92),
        (4, 1.72),
        (6, 1.06),
        (7, 1.2),
        (16, 1.19),
        (18, 1.73),
        (23, 1.73),
        (26, 1.15),
        (27, 1.18),
    ],
}];

/// The target of a message, as far as the correction tables care
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CorrectionTarget {
    /// A storage miner actor
    StorageMiner,
    /// Any other actor, or an actor that could not be loaded
    Other,
}

impl TransitionalCorrection {
    /// True if `height` is within the lookback window before this upgrade
    pub fn applies_at(&self, height: u64, upgrade_heights: &ForkParams) -> bool {
        upgrade_heights
            .height(self.upgrade)
            .is_some_and(|at| height <= at && at - height <= self.lookback)
    }

    pub(crate) fn multiplier(&self, method: MethodNum, target: CorrectionTarget) -> f64 {
        if method == methods::SEND {
            return self.send;
        }
        match target {
            CorrectionTarget::StorageMiner => self
                .storage_miner
                .iter()
                .find(|(m, _)| *m == method)
                .map_or(1.0, |(_, multi)| *multi),
            CorrectionTarget::Other => 1.0,
        }
    }
}

/// The correction in effect at `height`, if any
pub(crate) fn correction_at(
    height: u64,
    upgrade_heights: &ForkParams,
) -> Option<&'static TransitionalCorrection> {
    TRANSITIONAL_CORRECTIONS
        .iter()
        .find(|c| c.applies_at(height, upgrade_heights))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights() -> ForkParams {
        ForkParams::new([(NetworkUpgrade::Hygge, 1000)])
    }

    #[test]
    fn test_window() {
        let heights = heights();
        assert!(correction_at(1000, &heights).is_some());
        assert!(correction_at(980, &heights).is_some());
        assert!(correction_at(979, &heights).is_none());
        assert!(correction_at(1001, &heights).is_none());
    }

    #[test]
    fn test_unscheduled_upgrade() {
        assert!(correction_at(10, &ForkParams::none()).is_none());
    }

    #[test]
    fn test_multipliers() {
        let c = &TRANSITIONAL_CORRECTIONS[0];
        assert_eq!(c.multiplier(methods::SEND, CorrectionTarget::Other), 3.0);
        assert_eq!(c.multiplier(methods::SEND, CorrectionTarget::StorageMiner), 3.0);
        assert_eq!(c.multiplier(3, CorrectionTarget::StorageMiner), 1.92);
        assert_eq!(c.multiplier(27, CorrectionTarget::StorageMiner), 1.18);
        assert_eq!(c.multiplier(5, CorrectionTarget::StorageMiner), 1.0);
        assert_eq!(c.multiplier(3, CorrectionTarget::Other), 1.0);
    }
}
