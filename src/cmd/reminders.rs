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

use std::path::Path;

use crate::cmd::print_json;
use crate::cmd::read_cards;
use crate::error::Fallible;
use crate::reminder::plan_reminders;
use crate::settings::Settings;
use crate::types::timestamp::Timestamp;

pub fn print_reminders(
    settings: &Settings,
    cards_path: &Path,
    at: Timestamp,
    horizon: u32,
) -> Fallible<()> {
    let scheduler = settings.scheduler()?;
    let cards = read_cards(cards_path)?;
    let plan = plan_reminders(&scheduler, &cards, settings.morning_hour, at, horizon)?;
    print_json(&plan)
}
