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

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;

/// A record of a single answer given during a study session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLog {
    pub id: Uuid,
    pub card_id: CardId,
    pub reviewed_at: Timestamp,
    /// The card's step index before grading.
    pub previous_step: usize,
    /// The card's step index after grading.
    pub next_step: usize,
    pub result: bool,
    /// Time between the card being presented and the answer.
    pub latency_ms: u64,
}

impl ReviewLog {
    pub fn new(
        card_id: CardId,
        reviewed_at: Timestamp,
        previous_step: usize,
        next_step: usize,
        result: bool,
        latency_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            reviewed_at,
            previous_step,
            next_step,
            result,
            latency_ms,
        }
    }
}
