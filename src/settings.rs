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

//! Scheduler settings, read from a TOML file:
//!
//! ```toml
//! intervals = [0, 1, 2, 4, 7, 15, 30]
//! morning-hour = 8
//! time-zone = "Asia/Tokyo"
//! ```
//!
//! Missing keys take their defaults.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::calendar::Calendar;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::intervals::DEFAULT_INTERVALS;
use crate::intervals::IntervalTable;
use crate::scheduler::Scheduler;

pub const DEFAULT_TIME_ZONE: &str = "Asia/Tokyo";

pub const DEFAULT_MORNING_HOUR: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Day offsets indexed by step.
    pub intervals: Vec<u32>,
    /// Hour of the day (0-23) at which reminders fire.
    pub morning_hour: u8,
    /// IANA name of the timezone that defines day boundaries.
    pub time_zone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS.to_vec(),
            morning_hour: DEFAULT_MORNING_HOUR,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl Settings {
    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("settings file {} does not exist.", path.display()));
        }
        log::debug!("Loading settings from {}", path.display());
        let contents = read_to_string(path)?;
        Self::parse(&contents)
            .map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e.message())))
    }

    pub fn parse(contents: &str) -> Fallible<Self> {
        let settings: Self = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value. An invalid timezone or interval table is fatal:
    /// nothing falls back to a default.
    pub fn validate(&self) -> Fallible<()> {
        if self.morning_hour > 23 {
            return fail(format!(
                "morning hour must be between 0 and 23, got {}.",
                self.morning_hour
            ));
        }
        IntervalTable::new(self.intervals.clone())?;
        Calendar::new(&self.time_zone)?;
        Ok(())
    }

    /// Build a scheduler from these settings.
    pub fn scheduler(&self) -> Fallible<Scheduler> {
        self.validate()?;
        let calendar = Calendar::new(&self.time_zone)?;
        let intervals = IntervalTable::new(self.intervals.clone())?;
        Ok(Scheduler::new(calendar, intervals))
    }
}
