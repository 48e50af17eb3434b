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

use std::collections::BTreeSet;

use serde::Serialize;

use crate::calendar::Calendar;
use crate::error::Fallible;
use crate::scheduler::Scheduler;
use crate::types::card::Card;
use crate::types::date::Date;
use crate::types::review_log::ReviewLog;
use crate::types::timestamp::Timestamp;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    total_cards: usize,
    due_today_count: usize,
    new_cards_count: usize,
    reviewed_cards_count: usize,
    streak_days: usize,
}

impl Stats {
    pub fn compute(
        scheduler: &Scheduler,
        cards: &[Card],
        logs: &[ReviewLog],
        now: Timestamp,
    ) -> Fallible<Self> {
        let due_today_count = cards
            .iter()
            .filter(|card| scheduler.is_due(card.next_due, now))
            .count();
        let new_cards_count = cards.iter().filter(|card| card.is_new()).count();
        Ok(Self {
            total_cards: cards.len(),
            due_today_count,
            new_cards_count,
            reviewed_cards_count: cards.len() - new_cards_count,
            streak_days: study_streak(scheduler.calendar(), logs, now)?,
        })
    }
}

/// The number of consecutive days, ending today or yesterday, with at least
/// one review. A streak is not broken until a whole day passes without one.
pub fn study_streak(calendar: &Calendar, logs: &[ReviewLog], now: Timestamp) -> Fallible<usize> {
    let days: BTreeSet<Date> = logs
        .iter()
        .map(|log| calendar.local_date(log.reviewed_at))
        .collect();
    let Some(latest) = days.last().copied() else {
        return Ok(0);
    };
    let today = calendar.local_date(now);
    let yesterday = today.yesterday()?;
    if latest != today && latest != yesterday {
        return Ok(0);
    }
    let mut cursor = latest;
    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        cursor = cursor.yesterday()?;
    }
    Ok(count)
}
