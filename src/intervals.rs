// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Fallible;
use crate::error::fail;

/// The day offsets used when nothing else is configured.
pub const DEFAULT_INTERVALS: [u32; 7] = [0, 1, 2, 4, 7, 15, 30];

/// The largest offset accepted in the table, roughly a century.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// Day offsets indexed by step. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalTable {
    days: Vec<u32>,
}

impl IntervalTable {
    pub fn new(days: Vec<u32>) -> Fallible<Self> {
        if days.is_empty() {
            return fail("interval table is empty.");
        }
        if let Some(day) = days.iter().find(|day| **day > MAX_INTERVAL_DAYS) {
            return fail(format!(
                "interval of {day} days exceeds the maximum of {MAX_INTERVAL_DAYS}."
            ));
        }
        Ok(Self { days })
    }

    /// The day offset for a step. Steps past the end of the table reuse the
    /// last offset.
    pub fn offset(&self, step_index: usize) -> u32 {
        match self.days.get(step_index) {
            Some(day) => *day,
            None => self.days[self.last_step()],
        }
    }

    pub fn last_step(&self) -> usize {
        self.days.len() - 1
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            days: DEFAULT_INTERVALS.to_vec(),
        }
    }
}
