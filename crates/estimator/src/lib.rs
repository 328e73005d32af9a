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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Gas estimation for messages headed into the message pool.
//!
//! Given a message with some of its gas fields left at zero, the estimator fills in:
//!
//! - the gas limit, by simulating the message on top of the sender's pending messages
//! - the gas premium, from the premiums paid by recently included messages
//! - the fee cap, by projecting the worst case base fee growth over a number of blocks
//!
//! and finally clamps the fee cap so the total spend stays below a ceiling.
//!
//! ## Feature Flags
//!
//! - `test-utils`: Export mocks for testing.

mod capper;
pub use capper::cap_gas_fee;

mod error;
pub use error::GasEstimationError;

mod estimator;
#[cfg(feature = "test-utils")]
pub use estimator::MockGasEstimator;
pub use estimator::{GasEstimator, GasEstimatorImpl};

mod fee_cap;
pub use fee_cap::project_fee_cap;

mod gas_limit;

mod premium;
pub use premium::{apply_noise, median_gas_premium, premium_floor};

mod price_cache;
pub use price_cache::GasPriceCache;

mod settings;
pub use settings::Settings;

mod upgrade;
pub use upgrade::{TransitionalCorrection, TRANSITIONAL_CORRECTIONS};
