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

//! Fixed-point math utilities

use alloy_primitives::U256;

/// Multiply a token amount by a float factor using `precision` bits of fixed-point.
///
/// The factor is truncated to `precision` fractional bits before the multiplication, so
/// the result never depends on float rounding of the (possibly huge) amount itself.
/// Negative and NaN factors are treated as zero.
pub fn uint_mul_f64(n: U256, factor: f64, precision: u32) -> U256 {
    let scaled = (factor * (1_u64 << precision) as f64) as u64;
    n.saturating_mul(U256::from(scaled)) >> precision as usize
}

/// Multiply a token amount by a float factor exactly, truncating the result.
///
/// The factor is split into its binary mantissa and exponent so no precision is lost
/// beyond what the `f64` itself holds. Negative and NaN factors are treated as zero,
/// infinite factors saturate.
pub fn uint_mul_f64_exact(n: U256, factor: f64) -> U256 {
    if factor.is_nan() || factor <= 0.0 || n.is_zero() {
        return U256::ZERO;
    }
    if factor.is_infinite() {
        return U256::MAX;
    }

    let bits = factor.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exp) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased_exp - 1075)
    };

    let product = n.saturating_mul(U256::from(mantissa));
    if exp >= 0 {
        product.checked_shl(exp as usize).unwrap_or(U256::MAX)
    } else {
        product >> (-exp) as usize
    }
}

/// Multiply a gas amount by a float factor using `precision` bits of fixed-point,
/// saturating at `u64::MAX`.
pub fn gas_mul_f64(gas: u64, factor: f64, precision: u32) -> u64 {
    let scaled = (factor * (1_u64 << precision) as f64) as u128;
    let out = (gas as u128).saturating_mul(scaled) >> precision;
    u64::try_from(out).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_mul_f64() {
        assert_eq!(uint_mul_f64(U256::from(1000), 1.5, 8), U256::from(1500));
        assert_eq!(uint_mul_f64(U256::from(1000), 0.0, 8), U256::ZERO);
        assert_eq!(uint_mul_f64(U256::from(1000), -2.0, 8), U256::ZERO);
    }

    #[test]
    fn test_uint_mul_f64_truncates_factor() {
        // 1.125^2 = 1.265625 = 324/256 exactly
        assert_eq!(
            uint_mul_f64(U256::from(256_000), 1.125_f64.powi(2), 8),
            U256::from(324_000)
        );
        // 1/3 truncated to 85/256
        assert_eq!(uint_mul_f64(U256::from(256), 1.0 / 3.0, 8), U256::from(85));
    }

    #[test]
    fn test_uint_mul_f64_exact() {
        assert_eq!(
            uint_mul_f64_exact(U256::from(1_000_000), 1.1),
            U256::from(1_100_000)
        );
        assert_eq!(
            uint_mul_f64_exact(U256::from(1_000_000), 1.5),
            U256::from(1_500_000)
        );
        assert_eq!(
            uint_mul_f64_exact(U256::from(1_000_000), 1.25),
            U256::from(1_250_000)
        );
        assert_eq!(
            uint_mul_f64_exact(U256::from(1_000), 4096.0),
            U256::from(4_096_000)
        );
        // 1.003 is lost entirely at 8 bits but kept here
        assert!(uint_mul_f64_exact(U256::from(1_000_000), 1.003) > U256::from(1_002_000));
        assert_eq!(uint_mul_f64_exact(U256::from(1000), 0.0), U256::ZERO);
        assert_eq!(uint_mul_f64_exact(U256::from(1000), -2.0), U256::ZERO);
        assert_eq!(uint_mul_f64_exact(U256::from(1000), f64::NAN), U256::ZERO);
        assert_eq!(uint_mul_f64_exact(U256::from(1000), f64::INFINITY), U256::MAX);
        assert_eq!(uint_mul_f64_exact(U256::MAX, 2.0), U256::MAX);
    }

    #[test]
    fn test_gas_mul_f64() {
        assert_eq!(gas_mul_f64(1000, 3.0, 10), 3000);
        assert_eq!(gas_mul_f64(1000, 1.0, 10), 1000);
        // 1.92 * 1024 = 1966.08, truncated to 1966
        assert_eq!(gas_mul_f64(1024, 1.92, 10), 1966);
        assert_eq!(gas_mul_f64(u64::MAX, 3.0, 10), u64::MAX);
    }
}
