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

#![forbid(unsafe_code)]

use proptest::prelude::*;

use stakewatch::core::economics::epoch::{
    epoch_of, EpochCalculator, EpochRounding, BLOCKS_PER_EPOCH,
};

proptest! {
    #[test]
    fn epoch_is_non_decreasing(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(epoch_of(lo) <= epoch_of(hi));
    }

    #[test]
    fn only_exact_multiples_map_to_the_quotient(k in 1u64..1_000_000, offset in 1u64..BLOCKS_PER_EPOCH) {
        let boundary = k * BLOCKS_PER_EPOCH;
        prop_assert_eq!(epoch_of(boundary), k);
        prop_assert_eq!(epoch_of(boundary + offset), k + 1);
        prop_assert_eq!(epoch_of(boundary - offset), k);
    }

    #[test]
    fn ceil_is_floor_or_one_more(block in 1u64..u64::MAX, size in 1u64..100_000) {
        let ceil = EpochCalculator::new(size, EpochRounding::Ceil).unwrap().epoch_of(block);
        let floor = EpochCalculator::new(size, EpochRounding::Floor).unwrap().epoch_of(block);
        if block % size == 0 {
            prop_assert_eq!(ceil, floor);
        } else {
            prop_assert_eq!(ceil, floor + 1);
        }
    }
}
