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

use std::collections::HashSet;
use std::collections::VecDeque;

use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::Scheduler;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::review_log::ReviewLog;
use crate::types::timestamp::Timestamp;

/// The cards due at `now`, in their original order.
pub fn due_cards(scheduler: &Scheduler, cards: &[Card], now: Timestamp) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| scheduler.is_due(card.next_due, now))
        .cloned()
        .collect()
}

/// The cards reviewed at least once on the day of `now`, for a second pass.
pub fn reviewed_today(
    scheduler: &Scheduler,
    cards: &[Card],
    logs: &[ReviewLog],
    now: Timestamp,
) -> Vec<Card> {
    let calendar = scheduler.calendar();
    let ids: HashSet<CardId> = logs
        .iter()
        .filter(|log| calendar.is_same_day(log.reviewed_at, now))
        .map(|log| log.card_id)
        .collect();
    cards
        .iter()
        .filter(|card| ids.contains(&card.id()))
        .cloned()
        .collect()
}

/// The result of answering a card.
#[derive(Debug)]
pub struct Answer {
    /// The card with its updated schedule.
    pub card: Card,
    pub log: ReviewLog,
}

/// A queue of cards to get through. Each answer grades the card at the
/// front and removes it.
pub struct StudySession {
    queue: VecDeque<Card>,
    total: usize,
    /// When the current card was put in front of the user.
    presented_at: Timestamp,
}

impl StudySession {
    pub fn new(cards: Vec<Card>, started_at: Timestamp) -> Self {
        log::debug!("Starting study session with {} cards.", cards.len());
        let total = cards.len();
        Self {
            queue: VecDeque::from(cards),
            total,
            presented_at: started_at,
        }
    }

    /// Start a session over the cards due at `now`.
    pub fn due(scheduler: &Scheduler, cards: &[Card], now: Timestamp) -> Self {
        Self::new(due_cards(scheduler, cards, now), now)
    }

    pub fn current(&self) -> Option<&Card> {
        self.queue.front()
    }

    pub fn answer(
        &mut self,
        scheduler: &Scheduler,
        is_correct: bool,
        at: Timestamp,
    ) -> Fallible<Answer> {
        let Some(card) = self.queue.front() else {
            return fail("no card left to answer.");
        };
        let graded = scheduler.grade_card(card, is_correct, at)?;
        let log = ReviewLog::new(
            card.id(),
            at,
            card.step_index,
            graded.step_index,
            is_correct,
            at.millis_since(self.presented_at),
        );
        self.queue.pop_front();
        self.presented_at = at;
        Ok(Answer { card: graded, log })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn answered(&self) -> usize {
        self.total - self.queue.len()
    }

    /// Fraction of the session completed, between 0 and 1.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered() as f64 / self.total as f64
        }
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }
}
