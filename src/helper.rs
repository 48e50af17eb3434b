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

use std::fs::write;
use std::path::PathBuf;

use jiff::civil;
use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;
use crate::scheduler::Scheduler;
use crate::settings::Settings;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// Build an instant from a wall-clock reading in Asia/Tokyo.
pub fn tokyo(year: i16, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Timestamp {
    let zoned = civil::date(year, month, day)
        .at(hour, minute, second, 0)
        .in_tz("Asia/Tokyo")
        .unwrap();
    Timestamp::new(zoned.timestamp())
}

/// A scheduler built from the default settings.
pub fn default_scheduler() -> Scheduler {
    Settings::default().scheduler().unwrap()
}

/// A card sitting at the given step, due at `next_due`.
pub fn card_at_step(step_index: usize, next_due: Timestamp) -> Card {
    let mut card = Card::new("Question", "Answer", vec![], next_due).unwrap();
    card.step_index = step_index;
    card
}

/// Create a scratch directory and write a file into it. The directory lives
/// as long as the returned handle.
pub fn create_tmp_file(name: &str, contents: &str) -> Fallible<(TempDir, PathBuf)> {
    let dir: TempDir = tempdir()?;
    let path: PathBuf = dir.path().join(name);
    write(&path, contents)?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_file() -> Fallible<()> {
        let (_dir, path) = create_tmp_file("cards.json", "[]")?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_tokyo_is_nine_hours_ahead() {
        let ts = tokyo(2024, 1, 15, 9, 0, 0);
        assert_eq!(ts.to_string(), "2024-01-15T00:00:00Z");
    }
}
