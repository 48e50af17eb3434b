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

pub mod check;
pub mod due;
pub mod grade;
pub mod next_due;
pub mod reminders;
pub mod stats;

use std::fs::read_to_string;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::review_log::ReviewLog;

pub(crate) fn read_cards(path: &Path) -> Fallible<Vec<Card>> {
    let cards: Vec<Card> = read_json(path)?;
    log::debug!("Read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

pub(crate) fn read_logs(path: &Path) -> Fallible<Vec<ReviewLog>> {
    let logs: Vec<ReviewLog> = read_json(path)?;
    log::debug!("Read {} review logs from {}", logs.len(), path.display());
    Ok(logs)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Fallible<T> {
    if !path.exists() {
        return fail(format!("file {} does not exist.", path.display()));
    }
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| ErrorReport::new(format!("{}: invalid JSON: {e}", path.display())))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Fallible<()> {
    let json: String = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
