// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sleep schedule types.
//!
//! The clock blanks its tubes at night. The schedule is stored as two
//! minute-of-day values: the tubes sleep after `sleep_after` and wake up
//! again at `sleep_before`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Minutes elapsed since midnight (0-1439).
///
/// # Examples
///
/// ```
/// use nixie_lib::types::MinuteOfDay;
///
/// let t = MinuteOfDay::from_hm(22, 30).unwrap();
/// assert_eq!(t.minutes(), 1350);
/// assert_eq!(t.hour(), 22);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.to_string(), "22:30");
///
/// assert!(MinuteOfDay::new(1440).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Last minute of the day.
    pub const MAX: u16 = 23 * 60 + 59;

    /// Midnight.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a minute of day.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `minutes` exceeds 1439.
    pub fn new(minutes: u16) -> Result<Self, ValueError> {
        if minutes > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX,
                actual: minutes,
            });
        }
        Ok(Self(minutes))
    }

    /// Creates a minute of day from an hour (0-23) and a minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` naming whichever part is invalid.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, ValueError> {
        if hour > 23 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 23,
                actual: u16::from(hour),
            });
        }
        if minute > 59 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 59,
                actual: u16::from(minute),
            });
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Returns the raw minutes since midnight.
    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour part (0-23).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Returns the minute part (0-59).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<u16> for MinuteOfDay {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(value: MinuteOfDay) -> Self {
        value.0
    }
}

/// Sleep schedule of the clock.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{MinuteOfDay, SleepInfo};
///
/// let info: SleepInfo = serde_json::from_str(r#"{"sleep_before":420,"sleep_after":1380}"#).unwrap();
/// assert_eq!(info.sleep_before(), MinuteOfDay::from_hm(7, 0).unwrap());
/// assert_eq!(info.sleep_after().to_string(), "23:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SleepInfo {
    sleep_before: MinuteOfDay,
    sleep_after: MinuteOfDay,
}

impl SleepInfo {
    /// Creates a sleep schedule.
    #[must_use]
    pub const fn new(sleep_before: MinuteOfDay, sleep_after: MinuteOfDay) -> Self {
        Self {
            sleep_before,
            sleep_after,
        }
    }

    /// Returns the time the tubes wake up.
    #[must_use]
    pub const fn sleep_before(&self) -> MinuteOfDay {
        self.sleep_before
    }

    /// Returns the time the tubes go dark.
    #[must_use]
    pub const fn sleep_after(&self) -> MinuteOfDay {
        self.sleep_after
    }

    /// Returns true if the tubes are asleep at the given minute.
    ///
    /// The tubes go dark after the `sleep_after` minute and are lit again
    /// from the `sleep_before` minute, so both bounds themselves are awake.
    /// A schedule whose two bounds are equal never sleeps. When
    /// `sleep_after` is later than `sleep_before` the sleep window spans
    /// midnight.
    #[must_use]
    pub fn is_asleep_at(&self, at: MinuteOfDay) -> bool {
        let (before, after) = (self.sleep_before, self.sleep_after);
        match after.cmp(&before) {
            std::cmp::Ordering::Equal => false,
            std::cmp::Ordering::Greater => at > after || at < before,
            std::cmp::Ordering::Less => at > after && at < before,
        }
    }
}

impl fmt::Display for SleepInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asleep {} - {}", self.sleep_after, self.sleep_before)
    }
}
