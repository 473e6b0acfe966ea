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

//! Exact unsigned decimals for on-chain fixed-point values.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

/// Fractional digits of the chain's fixed-point ("fixidity") encoding.
pub const FIXIDITY_DECIMALS: u32 = 24;

/// `10^exp` as a big integer.
pub fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Unsigned decimal `mantissa / 10^scale`.
///
/// Equality and ordering compare values, so `1.0` equals `1.00`. `Display` always uses plain
/// notation with trailing fractional zeros removed.
#[derive(Clone, Debug)]
pub struct Decimal {
    mantissa: BigUint,
    scale: u32,
}

impl Decimal {
    /// Construct `mantissa / 10^scale`.
    pub fn new(mantissa: BigUint, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Interpret a raw fixidity value (scaled by `10^24`).
    pub fn from_fixidity(raw: BigUint) -> Self {
        Self::new(raw, FIXIDITY_DECIMALS)
    }

    /// True for any representation of zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Integer mantissa.
    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    /// Number of fractional base-10 digits in the representation.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn mantissa_at(&self, scale: u32) -> BigUint {
        &self.mantissa * pow10(scale - self.scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.mantissa.cmp(&other.mantissa);
        }
        let scale = self.scale.max(other.scale);
        self.mantissa_at(scale).cmp(&other.mantissa_at(scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_str_radix(10);
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }

        // At least one integer digit.
        let padded = if digits.len() <= scale {
            let mut p = "0".repeat(scale + 1 - digits.len());
            p.push_str(&digits);
            p
        } else {
            digits
        };
        let (int, frac) = padded.split_at(padded.len() - scale);
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            f.write_str(int)
        } else {
            write!(f, "{int}.{frac}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(raw: u128) -> Decimal {
        Decimal::from_fixidity(BigUint::from(raw))
    }

    #[test]
    fn renders_fixidity_values_plainly() {
        assert_eq!(fixed(1_000_000_000_000_000_000_000_000).to_string(), "1");
        assert_eq!(fixed(500_000_000_000_000_000_000_000).to_string(), "0.5");
        assert_eq!(fixed(160_000_000_000_000_000_000).to_string(), "0.00016");
        assert_eq!(fixed(1).to_string(), "0.000000000000000000000001");
        assert_eq!(fixed(0).to_string(), "0");
        assert_eq!(
            fixed(12_345_000_000_000_000_000_000_000).to_string(),
            "12.345"
        );
    }

    #[test]
    fn zero_scale_is_an_integer() {
        assert_eq!(Decimal::new(BigUint::from(42u32), 0).to_string(), "42");
    }

    #[test]
    fn compares_by_value_across_scales() {
        let a = Decimal::new(BigUint::from(10u32), 1);
        let b = Decimal::new(BigUint::from(1000u32), 3);
        assert_eq!(a, b);
        assert!(Decimal::new(BigUint::from(11u32), 1) > b);
        assert!(Decimal::new(BigUint::from(999u32), 3) < a);
    }
}
