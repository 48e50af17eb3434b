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
use std::path::PathBuf;

use clap::ArgGroup;
use clap::Parser;
use clap::Subcommand;

use crate::cmd::check::check_settings;
use crate::cmd::due::print_due_cards;
use crate::cmd::grade::grade_command;
use crate::cmd::next_due::print_next_due;
use crate::cmd::reminders::print_reminders;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::reminder::DEFAULT_HORIZON_DAYS;
use crate::settings::Settings;
use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a settings TOML file. Defaults are used if omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the due instant for a step index.
    NextDue {
        /// The step index.
        #[arg(long)]
        step: usize,
        /// The grading instant (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Grade a card and print the updated card list.
    #[command(group(ArgGroup::new("outcome").required(true).args(["correct", "incorrect"])))]
    Grade {
        /// Path to the cards JSON file.
        cards: PathBuf,
        /// The card's identifier.
        #[arg(long)]
        id: CardId,
        /// The answer was correct.
        #[arg(long)]
        correct: bool,
        /// The answer was incorrect.
        #[arg(long)]
        incorrect: bool,
        /// The grading instant (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Print the cards that are due.
    Due {
        /// Path to the cards JSON file.
        cards: PathBuf,
        /// The reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Print collection statistics.
    Stats {
        /// Path to the cards JSON file.
        cards: PathBuf,
        /// Path to the review logs JSON file.
        #[arg(long)]
        logs: Option<PathBuf>,
        /// The reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Print the reminder plan for the coming days.
    Reminders {
        /// Path to the cards JSON file.
        cards: PathBuf,
        /// The reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<Timestamp>,
        /// How many days ahead to plan.
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        days: u32,
    },
    /// Check the settings are valid.
    Check,
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config = cli.config.as_deref();
    match cli.command {
        Command::NextDue { step, at } => {
            print_next_due(&load_settings(config)?, step, at_or_now(at))
        }
        // The `outcome` group makes `--correct` and `--incorrect` exclusive.
        Command::Grade {
            cards,
            id,
            correct,
            incorrect,
            at,
        } => {
            debug_assert_ne!(correct, incorrect);
            grade_command(&load_settings(config)?, &cards, id, correct, at_or_now(at))
        }
        Command::Due { cards, at } => {
            print_due_cards(&load_settings(config)?, &cards, at_or_now(at))
        }
        Command::Stats { cards, logs, at } => print_stats(
            &load_settings(config)?,
            &cards,
            logs.as_deref(),
            at_or_now(at),
        ),
        Command::Reminders { cards, at, days } => {
            print_reminders(&load_settings(config)?, &cards, at_or_now(at), days)
        }
        Command::Check => check_settings(config),
    }
}

fn load_settings(config: Option<&Path>) -> Fallible<Settings> {
    match config {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn at_or_now(at: Option<Timestamp>) -> Timestamp {
    at.unwrap_or_else(Timestamp::now)
}
