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
use crate::error::fail;
use crate::scheduler::Scheduler;
use crate::settings::Settings;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;

/// Grade one card in a card list and print the updated list.
pub fn grade_command(
    settings: &Settings,
    cards_path: &Path,
    id: CardId,
    is_correct: bool,
    at: Timestamp,
) -> Fallible<()> {
    let scheduler = settings.scheduler()?;
    let cards = read_cards(cards_path)?;
    let cards = grade_by_id(&scheduler, cards, id, is_correct, at)?;
    print_json(&cards)
}

pub fn grade_by_id(
    scheduler: &Scheduler,
    mut cards: Vec<Card>,
    id: CardId,
    is_correct: bool,
    at: Timestamp,
) -> Fallible<Vec<Card>> {
    let Some(card) = cards.iter_mut().find(|card| card.id() == id) else {
        return fail(format!("no card with id {id}."));
    };
    *card = scheduler.grade_card(card, is_correct, at)?;
    Ok(cards)
}
