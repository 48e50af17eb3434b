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

use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::Scheduler;
use crate::types::card::Card;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

/// How many days ahead reminders are planned.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// A reminder to deliver on a given day. Delivering it is up to the caller.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub date: Date,
    pub fire_at: Timestamp,
    pub due_count: usize,
    pub body: String,
}

/// Plan one reminder for each of the next `horizon` days that has cards due,
/// firing at `morning_hour:00` in the scheduler's timezone. Today is not
/// included.
pub fn plan_reminders(
    scheduler: &Scheduler,
    cards: &[Card],
    morning_hour: u8,
    now: Timestamp,
    horizon: u32,
) -> Fallible<Vec<Reminder>> {
    if morning_hour > 23 {
        return fail(format!("invalid hour: {morning_hour}"));
    }
    let calendar = scheduler.calendar();
    let mut reminders = Vec::new();
    for offset in 1..=horizon {
        let day = calendar.add_days(now, i64::from(offset))?;
        let due_count = cards
            .iter()
            .filter(|card| scheduler.is_due(card.next_due, day))
            .count();
        if due_count == 0 {
            continue;
        }
        reminders.push(Reminder {
            date: calendar.local_date(day),
            fire_at: calendar.at_hour(day, morning_hour)?,
            due_count,
            body: format!("You have {due_count} cards to review."),
        });
    }
    log::debug!("Planned {} reminders.", reminders.len());
    Ok(reminders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::card_at_step;
    use crate::helper::default_scheduler;
    use crate::helper::tokyo;

    #[test]
    fn test_plan() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 21, 0, 0);
        let cards = vec![
            // Overdue: counted every day.
            card_at_step(0, tokyo(2024, 1, 15, 0, 0, 0)),
            card_at_step(1, tokyo(2024, 1, 17, 0, 0, 0)),
            // Beyond the horizon.
            card_at_step(5, tokyo(2024, 2, 1, 0, 0, 0)),
        ];
        let plan = plan_reminders(&scheduler, &cards, 8, now, DEFAULT_HORIZON_DAYS)?;
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].date.to_string(), "2024-01-16");
        assert_eq!(plan[0].fire_at, tokyo(2024, 1, 16, 8, 0, 0));
        assert_eq!(plan[0].due_count, 1);
        assert_eq!(plan[1].due_count, 2);
        assert_eq!(plan[1].body, "You have 2 cards to review.");
        assert_eq!(plan[6].date.to_string(), "2024-01-22");
        Ok(())
    }

    #[test]
    fn test_days_without_cards_are_skipped() -> Fallible<()> {
        let scheduler = default_scheduler();
        let now = tokyo(2024, 1, 15, 9, 0, 0);
        let cards = vec![card_at_step(3, tokyo(2024, 1, 19, 0, 0, 0))];
        let plan = plan_reminders(&scheduler, &cards, 7, now, 7)?;
        let dates: Vec<String> = plan.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates[0], "2024-01-19");
        assert_eq!(plan.len(), 4);
        Ok(())
    }

    #[test]
    fn test_no_cards() -> Fallible<()> {
        let scheduler = default_scheduler();
        let plan = plan_reminders(&scheduler, &[], 8, Timestamp::now(), 7)?;
        assert!(plan.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_hour() {
        let scheduler = default_scheduler();
        assert!(plan_reminders(&scheduler, &[], 24, Timestamp::now(), 7).is_err());
    }
}
