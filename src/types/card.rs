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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;

/// A flashcard and its schedule state.
///
/// Only the scheduler changes the schedule fields (`step_index`, `next_due`,
/// `review_count`, `last_result`). The content fields belong to whoever
/// manages the card collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The card's identifier. Never changes.
    id: CardId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Index into the interval table used to compute `next_due`.
    pub step_index: usize,
    /// The instant at which the card becomes eligible for review.
    pub next_due: Timestamp,
    /// How many times the card has been graded.
    pub review_count: u64,
    /// The outcome of the most recent grading, `None` if never graded.
    #[serde(default)]
    pub last_result: Option<bool>,
}

impl Card {
    /// Create a card with a fresh schedule. A new card is due on the day it
    /// is created.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: Vec<String>,
        created_at: Timestamp,
    ) -> Fallible<Self> {
        let question = question.into().trim().to_string();
        let answer = answer.into().trim().to_string();
        if question.is_empty() {
            return fail("card question is empty.");
        }
        if answer.is_empty() {
            return fail("card answer is empty.");
        }
        Ok(Self {
            id: CardId::random(),
            question,
            answer,
            tags: clean_tags(tags),
            step_index: 0,
            next_due: created_at,
            review_count: 0,
            last_result: None,
        })
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// True if the card has never been graded.
    pub fn is_new(&self) -> bool {
        self.review_count == 0
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_defaults() -> Fallible<()> {
        let now: Timestamp = "2024-01-15T01:00:00Z".parse()?;
        let card = Card::new("  What is 2 + 2? ", " 4\n", vec![], now)?;
        assert_eq!(card.question, "What is 2 + 2?");
        assert_eq!(card.answer, "4");
        assert_eq!(card.step_index, 0);
        assert_eq!(card.review_count, 0);
        assert_eq!(card.last_result, None);
        assert_eq!(card.next_due, now);
        assert!(card.is_new());
        Ok(())
    }

    #[test]
    fn test_tags_are_cleaned() -> Fallible<()> {
        let tags = vec![" math ".to_string(), "".to_string(), "   ".to_string()];
        let card = Card::new("Q", "A", tags, Timestamp::now())?;
        assert_eq!(card.tags, vec!["math".to_string()]);
        Ok(())
    }

    #[test]
    fn test_blank_question_rejected() {
        let result = Card::new("   ", "A", vec![], Timestamp::now());
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: card question is empty.".to_string())
        );
    }

    #[test]
    fn test_blank_answer_rejected() {
        assert!(Card::new("Q", "\n", vec![], Timestamp::now()).is_err());
    }

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "question": "Capital of Japan?",
            "answer": "Tokyo",
            "stepIndex": 3,
            "nextDue": "2024-01-15T15:00:00Z",
            "reviewCount": 5
        }"#;
        let card: Card = serde_json::from_str(json)?;
        assert_eq!(card.id().to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(card.step_index, 3);
        assert_eq!(card.review_count, 5);
        assert!(card.tags.is_empty());
        assert_eq!(card.last_result, None);
        assert!(!card.is_new());
        Ok(())
    }

    #[test]
    fn test_negative_step_rejected() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "question": "Q",
            "answer": "A",
            "stepIndex": -1,
            "nextDue": "2024-01-15T15:00:00Z",
            "reviewCount": 0
        }"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }
}
