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

#![no_main]
#![forbid(unsafe_code)]

use libfuzzer_sys::fuzz_target;
use stakewatch::core::economics::epoch::{EpochCalculator, EpochRounding};

fuzz_target!(|data: (u64, u64)| {
    let (block, size) = data;
    let Ok(ceil) = EpochCalculator::new(size, EpochRounding::Ceil) else {
        assert_eq!(size, 0);
        return;
    };
    let floor = EpochCalculator::new(size, EpochRounding::Floor).expect("non-zero size");

    let (c, f) = (ceil.epoch_of(block), floor.epoch_of(block));
    assert!(c == f || c == f + 1);
    if block > 0 {
        assert!(ceil.epoch_of(block - 1) <= c);
    }
});
