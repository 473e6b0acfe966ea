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

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    target: &'a str,
    multiplier: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // Contract reads are uint256, so anything longer than 78 digits never reaches the parser.
    if input.target.len() > 78 || input.multiplier.len() > 78 {
        return;
    }
    if let Ok(apy) = stakewatch::core::economics::target_yield::target_apy_from_str(
        input.target,
        input.multiplier,
    ) {
        let s = apy.to_string();
        assert!(!s.is_empty());
        assert!(!s.ends_with('.'));
    }
});
