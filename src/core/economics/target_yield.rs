// Copyright (c) 2026 Stakewatch
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Annualized target voting yield.
//!
//! The chain stores a daily target voting yield `f` and a rewards multiplier `m`, both as
//! fixidity values. The annual percentage is `((1 + f)^365 - 1) * m * 100`, evaluated here
//! with integer arithmetic only so every digit of the result is exact.

#![forbid(unsafe_code)]

use num_bigint::BigUint;
use thiserror::Error;

use crate::core::economics::decimal::{pow10, Decimal, FIXIDITY_DECIMALS};

/// Compounding periods per year (one per daily epoch).
pub const DAYS_PER_YEAR: u32 = 365;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YieldError {
    #[error("{field} is not a base-10 unsigned integer")]
    Malformed { field: &'static str },
}

/// Target APY in percent from raw fixidity inputs.
pub fn target_apy(target_voting_yield_raw: &BigUint, rewards_multiplier_raw: &BigUint) -> Decimal {
    let unit = pow10(FIXIDITY_DECIMALS);

    // (U + t)^365 - U^365 = U^365 * ((1 + f)^365 - 1)
    let compounded = (&unit + target_voting_yield_raw).pow(DAYS_PER_YEAR) - unit.pow(DAYS_PER_YEAR);
    let mantissa = compounded * rewards_multiplier_raw * 100u32;

    // One U^365 from compounding, one U from the multiplier.
    Decimal::new(mantissa, FIXIDITY_DECIMALS * (DAYS_PER_YEAR + 1))
}

/// [`target_apy`] over base-10 strings as returned by contract reads.
pub fn target_apy_from_str(
    target_voting_yield_raw: &str,
    rewards_multiplier_raw: &str,
) -> Result<Decimal, YieldError> {
    let target = parse_raw(target_voting_yield_raw, "target voting yield")?;
    let multiplier = parse_raw(rewards_multiplier_raw, "rewards multiplier")?;
    Ok(target_apy(&target, &multiplier))
}

fn parse_raw(raw: &str, field: &'static str) -> Result<BigUint, YieldError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(YieldError::Malformed { field });
    }
    BigUint::parse_bytes(raw.as_bytes(), 10).ok_or(YieldError::Malformed { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: &str = "1000000000000000000000000";

    #[test]
    fn mainnet_parameters() {
        let apy = target_apy_from_str("160000000000000000000", UNIT).unwrap();
        let s = apy.to_string();
        assert!(s.starts_with("6.0134014067645574736867717244"), "{s}");
        // (1.00016)^365 has 5 * 365 fractional digits before the multiplier.
        assert_eq!(s.len(), 1825);
    }

    #[test]
    fn multiplier_scales_linearly() {
        let apy = target_apy_from_str("160000000000000000000", "500000000000000000000000").unwrap();
        assert!(apy.to_string().starts_with("3.0067007033822787368433858622"));
    }

    #[test]
    fn zero_inputs_yield_zero() {
        assert_eq!(target_apy_from_str("0", UNIT).unwrap().to_string(), "0");
        assert_eq!(
            target_apy_from_str("160000000000000000000", "0")
                .unwrap()
                .to_string(),
            "0"
        );
    }

    #[test]
    fn doubling_daily_is_exact_integer() {
        // f = 1 => (2^365 - 1) * 100
        let apy = target_apy_from_str(UNIT, UNIT).unwrap();
        let expected = (BigUint::from(2u32).pow(365) - 1u32) * 100u32;
        assert_eq!(apy.to_string(), expected.to_str_radix(10));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            target_apy_from_str("1.5", UNIT),
            Err(YieldError::Malformed {
                field: "target voting yield"
            })
        );
        assert_eq!(
            target_apy_from_str("160", "-1"),
            Err(YieldError::Malformed {
                field: "rewards multiplier"
            })
        );
        assert!(target_apy_from_str("", UNIT).is_err());
        assert!(target_apy_from_str("0x10", UNIT).is_err());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            target_apy_from_str(" 0 ", UNIT).unwrap().to_string(),
            "0"
        );
    }
}
