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

//! A step-based spaced repetition scheduler.
//!
//! Cards move up a table of day offsets when answered correctly and drop
//! back to the first step when answered incorrectly. Due dates always fall
//! on a day boundary in one fixed, named timezone.

pub mod calendar;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod intervals;
pub mod reminder;
pub mod scheduler;
pub mod settings;
pub mod stats;
pub mod study;
pub mod types;

#[cfg(test)]
mod helper;
