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

use crate::calendar::Calendar;
use crate::error::Fallible;
use crate::intervals::IntervalTable;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// Step-based scheduler. Holds no mutable state: every result depends only
/// on the arguments and the configuration it was built with.
#[derive(Clone, Debug)]
pub struct Scheduler {
    calendar: Calendar,
    intervals: IntervalTable,
}

impl Scheduler {
    pub fn new(calendar: Calendar, intervals: IntervalTable) -> Self {
        Self {
            calendar,
            intervals,
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn intervals(&self) -> &IntervalTable {
        &self.intervals
    }

    /// Record an answer. A correct answer advances the card one step, an
    /// incorrect one sends it back to step zero. The due date is recomputed
    /// from the new step and the day of `at`.
    pub fn grade_card(&self, card: &Card, is_correct: bool, at: Timestamp) -> Fallible<Card> {
        let step_index = if is_correct {
            card.step_index.saturating_add(1)
        } else {
            0
        };
        let next_due = self.calculate_next_due(step_index, at)?;
        log::debug!(
            "Graded card {} ({}): step {} -> {}, due {}",
            card.id(),
            if is_correct { "correct" } else { "incorrect" },
            card.step_index,
            step_index,
            next_due
        );
        let mut graded = card.clone();
        graded.review_count = card.review_count.saturating_add(1);
        graded.last_result = Some(is_correct);
        graded.step_index = step_index;
        graded.next_due = next_due;
        Ok(graded)
    }

    /// Like [`Scheduler::grade_card`], graded at the current time.
    pub fn grade_card_now(&self, card: &Card, is_correct: bool) -> Fallible<Card> {
        self.grade_card(card, is_correct, Timestamp::now())
    }

    /// The start of the day `intervals[step_index]` days after the day of
    /// `base`.
    pub fn calculate_next_due(&self, step_index: usize, base: Timestamp) -> Fallible<Timestamp> {
        let offset = self.intervals.offset(step_index);
        self.calendar.add_days(base, i64::from(offset))
    }

    pub fn is_due(&self, date: Timestamp, reference_now: Timestamp) -> bool {
        self.calendar.is_due(date, reference_now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::card_at_step;
    use crate::helper::default_scheduler;
    use crate::helper::tokyo;

    #[test]
    fn test_new_card_graded_correct() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 10, 0, 0);
        let card = card_at_step(0, now);
        let graded = scheduler.grade_card(&card, true, now)?;
        assert_eq!(graded.step_index, 1);
        assert_eq!(graded.review_count, 1);
        assert_eq!(graded.last_result, Some(true));
        assert_eq!(graded.next_due, tokyo(2024, 1, 16, 0, 0, 0));
        assert_eq!(graded.id(), card.id());
        assert_eq!(graded.question, card.question);
        Ok(())
    }

    #[test]
    fn test_incorrect_resets_to_today() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 10, 0, 0);
        let card = card_at_step(2, now);
        let graded = scheduler.grade_card(&card, false, now)?;
        assert_eq!(graded.step_index, 0);
        assert_eq!(graded.last_result, Some(false));
        assert_eq!(graded.next_due, tokyo(2024, 1, 15, 0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_last_step_advances_past_table() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 10, 0, 0);
        let graded = scheduler.grade_card(&card_at_step(6, now), true, now)?;
        assert_eq!(graded.step_index, 7);
        assert_eq!(graded.next_due, tokyo(2024, 2, 14, 0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_late_night_grading_anchors_to_day() -> Fallible<()> {
        let scheduler = default_scheduler();
        let late = tokyo(2024, 1, 15, 23, 59, 59);
        let early = tokyo(2024, 1, 15, 0, 0, 1);
        let a = scheduler.grade_card(&card_at_step(0, late), true, late)?;
        let b = scheduler.grade_card(&card_at_step(0, early), true, early)?;
        assert_eq!(a.next_due, tokyo(2024, 1, 16, 0, 0, 0));
        assert_eq!(a.next_due, b.next_due);
        Ok(())
    }

    #[test]
    fn test_grading_transitions_for_every_step() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 6, 1, 12, 0, 0);
        for step in 0..20 {
            let mut card = card_at_step(step, now);
            card.review_count = 3;
            let right = scheduler.grade_card(&card, true, now)?;
            assert_eq!(right.step_index, step + 1);
            assert_eq!(right.review_count, 4);
            let wrong = scheduler.grade_card(&card, false, now)?;
            assert_eq!(wrong.step_index, 0);
            assert_eq!(wrong.review_count, 4);
            // The stored step reproduces the stored due date.
            assert_eq!(
                scheduler.calculate_next_due(right.step_index, now)?,
                right.next_due
            );
        }
        Ok(())
    }

    #[test]
    fn test_step_index_saturates() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 10, 0, 0);
        let graded = scheduler.grade_card(&card_at_step(usize::MAX, now), true, now)?;
        assert_eq!(graded.step_index, usize::MAX);
        assert_eq!(graded.next_due, tokyo(2024, 2, 14, 0, 0, 0));
        Ok(())
    }

    #[test]
    fn test_calculate_next_due_table() -> Fallible<()> {
        let scheduler = default_scheduler();
        let base = tokyo(2024, 1, 15, 10, 0, 0);
        let expected = [
            tokyo(2024, 1, 15, 0, 0, 0),
            tokyo(2024, 1, 16, 0, 0, 0),
            tokyo(2024, 1, 17, 0, 0, 0),
            tokyo(2024, 1, 19, 0, 0, 0),
            tokyo(2024, 1, 22, 0, 0, 0),
            tokyo(2024, 1, 30, 0, 0, 0),
            tokyo(2024, 2, 14, 0, 0, 0),
        ];
        for (step, due) in expected.iter().enumerate() {
            assert_eq!(scheduler.calculate_next_due(step, base)?, *due);
        }
        Ok(())
    }

    #[test]
    fn test_calculate_next_due_clamps() -> Fallible<()> {
        let scheduler = default_scheduler();
        let base = tokyo(2024, 1, 15, 10, 0, 0);
        let last = scheduler.calculate_next_due(6, base)?;
        for step in [7, 8, 50, 10_000] {
            assert_eq!(scheduler.calculate_next_due(step, base)?, last);
        }
        Ok(())
    }

    #[test]
    fn test_calculate_next_due_is_deterministic() -> Fallible<()> {
        let scheduler = default_scheduler();
        let base = tokyo(2024, 3, 3, 3, 3, 3);
        assert_eq!(
            scheduler.calculate_next_due(4, base)?,
            scheduler.calculate_next_due(4, base)?
        );
        Ok(())
    }

    #[test]
    fn test_custom_table_and_zone() -> Fallible<()> {
        let calendar = Calendar::new("UTC")?;
        let intervals = IntervalTable::new(vec![1, 3])?;
        let scheduler = Scheduler::new(calendar, intervals);
        let now: Timestamp = "2024-01-15T23:30:00Z".parse()?;
        assert_eq!(
            scheduler.calculate_next_due(1, now)?.to_string(),
            "2024-01-18T00:00:00Z"
        );
        assert_eq!(
            scheduler.calculate_next_due(9, now)?.to_string(),
            "2024-01-18T00:00:00Z"
        );
        Ok(())
    }

    #[test]
    fn test_grade_card_now() -> Fallible<()> {
        let scheduler = default_scheduler();
        let card = card_at_step(0, Timestamp::now());
        let graded = scheduler.grade_card_now(&card, true)?;
        assert_eq!(graded.step_index, 1);
        assert_eq!(graded.review_count, 1);
        assert!(graded.next_due > card.next_due);
        Ok(())
    }
}
