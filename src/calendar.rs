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

use jiff::SignedDuration;
use jiff::Span;
use jiff::civil;
use jiff::tz::TimeZone;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

/// Day arithmetic anchored to one named timezone, regardless of the host's
/// timezone.
///
/// Day boundaries come from the zone's rules, so zones with daylight saving
/// time get the right start of day even when midnight is skipped. Every
/// operation is total for instants in the supported range (years -9999 to
/// 9999); errors only arise when a result falls outside it.
#[derive(Clone, Debug)]
pub struct Calendar {
    name: String,
    tz: TimeZone,
}

impl Calendar {
    /// Look up an IANA timezone such as `Asia/Tokyo`. Unknown names are an
    /// error, never a silent fallback to UTC or the system zone.
    pub fn new(identifier: &str) -> Fallible<Self> {
        let tz = TimeZone::get(identifier)
            .map_err(|e| ErrorReport::new(format!("unknown time zone '{identifier}': {e}")))?;
        Ok(Self {
            name: identifier.to_string(),
            tz,
        })
    }

    pub fn time_zone_name(&self) -> &str {
        &self.name
    }

    /// The calendar day containing `instant`.
    pub fn local_date(&self, instant: Timestamp) -> Date {
        let zoned = instant.into_inner().to_zoned(self.tz.clone());
        Date::new(zoned.date())
    }

    /// The first instant of the day containing `instant`.
    pub fn start_of_day(&self, instant: Timestamp) -> Fallible<Timestamp> {
        let zoned = instant.into_inner().to_zoned(self.tz.clone());
        Ok(Timestamp::new(zoned.start_of_day()?.timestamp()))
    }

    /// The last instant of the day containing `instant`.
    pub fn end_of_day(&self, instant: Timestamp) -> Fallible<Timestamp> {
        let next = self.add_days(instant, 1)?.into_inner();
        let end = next.checked_sub(SignedDuration::from_nanos(1))?;
        Ok(Timestamp::new(end))
    }

    /// The start of the day `days` calendar days after the day containing
    /// `instant`. `days` may be zero or negative.
    pub fn add_days(&self, instant: Timestamp, days: i64) -> Fallible<Timestamp> {
        let date = self.local_date(instant).into_inner();
        let shifted = date.checked_add(Span::new().try_days(days)?)?;
        self.start_of_date(shifted)
    }

    /// Signed count of calendar days from the day of `a` to the day of `b`.
    pub fn days_between(&self, a: Timestamp, b: Timestamp) -> i64 {
        let a = self.local_date(a).into_inner();
        let b = self.local_date(b).into_inner();
        i64::from((b - a).get_days())
    }

    pub fn is_same_day(&self, a: Timestamp, b: Timestamp) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// True if the day of `date` is on or before the day of `reference_now`.
    pub fn is_due(&self, date: Timestamp, reference_now: Timestamp) -> bool {
        self.local_date(date) <= self.local_date(reference_now)
    }

    /// The instant at `hour:00` on the day containing `instant`.
    pub fn at_hour(&self, instant: Timestamp, hour: u8) -> Fallible<Timestamp> {
        let hour = i8::try_from(hour)
            .ok()
            .filter(|h| (0..=23).contains(h))
            .ok_or_else(|| ErrorReport::new(format!("invalid hour: {hour}")))?;
        let date = self.local_date(instant).into_inner();
        let zoned = date.at(hour, 0, 0, 0).to_zoned(self.tz.clone())?;
        Ok(Timestamp::new(zoned.timestamp()))
    }

    fn start_of_date(&self, date: civil::Date) -> Fallible<Timestamp> {
        let zoned = date.to_zoned(self.tz.clone())?.start_of_day()?;
        Ok(Timestamp::new(zoned.timestamp()))
    }
}
