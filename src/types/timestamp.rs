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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// An absolute instant, independent of any timezone. Serialized as RFC 3339.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(jiff::Timestamp);

impl Timestamp {
    pub fn new(ts: jiff::Timestamp) -> Self {
        Self(ts)
    }

    pub fn now() -> Self {
        Self(jiff::Timestamp::now())
    }

    pub fn into_inner(self) -> jiff::Timestamp {
        self.0
    }

    /// Whole milliseconds elapsed since `earlier`. Zero if `earlier` is in
    /// the future.
    pub fn millis_since(self, earlier: Timestamp) -> u64 {
        let elapsed = self.0.duration_since(earlier.0);
        u64::try_from(elapsed.as_millis()).unwrap_or(0)
    }
}

impl FromStr for Timestamp {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Fallible<Self> {
        let ts: jiff::Timestamp = s
            .trim()
            .parse()
            .map_err(|e| ErrorReport::new(format!("invalid timestamp '{s}': {e}")))?;
        Ok(Self(ts))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
