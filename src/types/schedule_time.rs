// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule trigger times.
//!
//! The bridge encodes when a schedule fires as a string in its
//! `localtime` field:
//!
//! - absolute: `"2024-01-15T10:30:00"`
//! - recurring: `"W124/T07:00:00"` (weekday bitmask, then time of day)
//! - timer: `"PT00:15:00"` (fires once after the given delay)
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveTime, Weekday};
//! use hue_lib::types::{ScheduleTime, Weekdays};
//!
//! let wake_up = ScheduleTime::recurring(
//!     Weekdays::WORKDAYS,
//!     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
//! );
//! assert_eq!(wake_up.to_string(), "W124/T07:00:00");
//!
//! let sunday = Weekdays::from_days([Weekday::Sun]).unwrap();
//! assert_eq!(sunday.bits(), 1);
//! ```

use std::fmt;
use std::time::Duration;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Serialize, Serializer};

use crate::error::ValueError;

/// A set of weekdays, encoded as the bridge bitmask (Monday = 64 ... Sunday = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekdays(u8);

impl Weekdays {
    /// Monday to Friday.
    pub const WORKDAYS: Self = Self(0b111_1100);
    /// Saturday and Sunday.
    pub const WEEKEND: Self = Self(0b000_0011);
    /// Every day.
    pub const ALL: Self = Self(0b111_1111);

    /// Creates a set from the given days.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NoWeekday` if `days` is empty.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Result<Self, ValueError> {
        let bits = days
            .into_iter()
            .fold(0u8, |bits, day| bits | (1 << (6 - day.num_days_from_monday())));
        if bits == 0 {
            return Err(ValueError::NoWeekday);
        }
        Ok(Self(bits))
    }

    /// Returns whether `day` is part of the set.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << (6 - day.num_days_from_monday())) != 0
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.0
    }
}

/// When a schedule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTime {
    /// Once, at a local date and time.
    Absolute(NaiveDateTime),
    /// Every selected weekday at a local time.
    Recurring {
        /// Days the schedule fires on.
        weekdays: Weekdays,
        /// Local time of day.
        time: NaiveTime,
    },
    /// Once, after a delay counted from creation.
    Timer(Duration),
}

impl ScheduleTime {
    /// Fires once at `at`.
    #[must_use]
    pub const fn at(at: NaiveDateTime) -> Self {
        Self::Absolute(at)
    }

    /// Fires on every day of `weekdays` at `time`.
    #[must_use]
    pub const fn recurring(weekdays: Weekdays, time: NaiveTime) -> Self {
        Self::Recurring { weekdays, time }
    }

    /// Fires once after `delay`. Sub-second precision is dropped.
    #[must_use]
    pub const fn timer(delay: Duration) -> Self {
        Self::Timer(delay)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(at) => write!(f, "{}", at.format("%Y-%m-%dT%H:%M:%S")),
            Self::Recurring { weekdays, time } => {
                write!(f, "W{}/T{}", weekdays.bits(), time.format("%H:%M:%S"))
            }
            Self::Timer(delay) => {
                let secs = delay.as_secs();
                write!(
                    f,
                    "PT{:02}:{:02}:{:02}",
                    secs / 3600,
                    (secs / 60) % 60,
                    secs % 60
                )
            }
        }
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
