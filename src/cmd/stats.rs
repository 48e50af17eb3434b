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
use crate::cmd::read_logs;
use crate::error::Fallible;
use crate::settings::Settings;
use crate::stats::Stats;
use crate::types::timestamp::Timestamp;

pub fn print_stats(
    settings: &Settings,
    cards_path: &Path,
    logs_path: Option<&Path>,
    at: Timestamp,
) -> Fallible<()> {
    let scheduler = settings.scheduler()?;
    let cards = read_cards(cards_path)?;
    let logs = match logs_path {
        Some(path) => read_logs(path)?,
        None => Vec::new(),
    };
    let stats = Stats::compute(&scheduler, &cards, &logs, at)?;
    print_json(&stats)
}
