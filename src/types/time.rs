// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock time settings and the time zone catalog.
//!
//! The clock stores its zone twice: the IANA name shown to the user
//! (`tz_zone`) and the POSIX TZ string it actually applies (`tz_offset`).
//! The catalog served at `/zones.json` maps one to the other.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ValueError};

/// Hour display format of the tubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 00-23 hours.
    #[default]
    #[serde(rename = "24h")]
    Hour24,
    /// 1-12 hours.
    #[serde(rename = "12h")]
    Hour12,
}

impl TimeFormat {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hour24 => "24h",
            Self::Hour12 => "12h",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(Self::Hour24),
            "12h" => Ok(Self::Hour12),
            _ => Err(ValueError::InvalidTimeFormat(s.to_string())),
        }
    }
}

/// Time settings of the clock.
///
/// Firmware that predates the 12h mode omits `time_format`; it then reads
/// as [`TimeFormat::Hour24`].
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{TimeFormat, TimeInfo};
///
/// let info: TimeInfo = serde_json::from_str(
///     r#"{"tz_zone":"Europe/Zagreb","tz_offset":"CET-1CEST,M3.5.0,M10.5.0/3"}"#,
/// ).unwrap();
/// assert_eq!(info.tz_zone(), "Europe/Zagreb");
/// assert_eq!(info.time_format(), TimeFormat::Hour24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeInfo {
    tz_zone: String,
    tz_offset: String,
    #[serde(default)]
    time_format: TimeFormat,
}

impl TimeInfo {
    /// Creates time settings.
    #[must_use]
    pub fn new(
        tz_zone: impl Into<String>,
        tz_offset: impl Into<String>,
        time_format: TimeFormat,
    ) -> Self {
        Self {
            tz_zone: tz_zone.into(),
            tz_offset: tz_offset.into(),
            time_format,
        }
    }

    /// Returns the IANA zone name.
    #[must_use]
    pub fn tz_zone(&self) -> &str {
        &self.tz_zone
    }

    /// Returns the POSIX TZ string.
    #[must_use]
    pub fn tz_offset(&self) -> &str {
        &self.tz_offset
    }

    /// Returns the hour display format.
    #[must_use]
    pub const fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// Switches to another time zone, keeping the display format.
    pub fn set_time_zone(&mut self, zone: &TimeZone) {
        self.tz_zone.clone_from(&zone.zone);
        self.tz_offset.clone_from(&zone.offset);
    }

    /// Changes the hour display format.
    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        self.time_format = time_format;
    }
}

/// One entry of the time zone catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone {
    /// IANA name, e.g. `Africa/Abidjan`.
    pub zone: String,
    /// POSIX TZ string, e.g. `GMT0`.
    pub offset: String,
}

impl TimeZone {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(zone: impl Into<String>, offset: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            offset: offset.into(),
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.zone)
    }
}

/// Time zones offered by the clock, sorted by name.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::TimeZoneCatalog;
///
/// let catalog = TimeZoneCatalog::from_json(
///     r#"{"Europe/Zagreb":"CET-1CEST,M3.5.0,M10.5.0/3","Africa/Abidjan":"GMT0"}"#,
/// ).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.zones()[0].zone, "Africa/Abidjan");
/// assert_eq!(catalog.find("Africa/Abidjan").unwrap().offset, "GMT0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TimeZoneCatalog {
    zones: Vec<TimeZone>,
}

impl TimeZoneCatalog {
    /// Parses the `zones.json` object.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a string-to-string map.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Returns all zones, sorted by name.
    #[must_use]
    pub fn zones(&self) -> &[TimeZone] {
        &self.zones
    }

    /// Looks a zone up by its IANA name.
    #[must_use]
    pub fn find(&self, zone: &str) -> Option<&TimeZone> {
        self.zones
            .binary_search_by(|candidate| candidate.zone.as_str().cmp(zone))
            .ok()
            .map(|index| &self.zones[index])
    }

    /// Returns the entry matching the zone currently set on the clock.
    #[must_use]
    pub fn selected(&self, info: &TimeInfo) -> Option<&TimeZone> {
        self.find(info.tz_zone())
    }

    /// Returns the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if the catalog holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates over the zones in name order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeZone> {
        self.zones.iter()
    }
}

impl From<BTreeMap<String, String>> for TimeZoneCatalog {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            zones: map
                .into_iter()
                .map(|(zone, offset)| TimeZone { zone, offset })
                .collect(),
        }
    }
}

impl FromIterator<TimeZone> for TimeZoneCatalog {
    fn from_iter<I: IntoIterator<Item = TimeZone>>(iter: I) -> Self {
        let map: BTreeMap<String, String> = iter
            .into_iter()
            .map(|tz| (tz.zone, tz.offset))
            .collect();
        map.into()
    }
}

impl<'a> IntoIterator for &'a TimeZoneCatalog {
    type Item = &'a TimeZone;
    type IntoIter = std::slice::Iter<'a, TimeZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_format_wire_values() {
        assert_eq!(serde_json::to_string(&TimeFormat::Hour12).unwrap(), "\"12h\"");
        assert_eq!("24h".parse::<TimeFormat>().unwrap(), TimeFormat::Hour24);
        assert!(matches!(
            "am/pm".parse::<TimeFormat>(),
            Err(ValueError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn time_info_round_trips_device_fields() {
        let info = TimeInfo::new("America/New_York", "EST5EDT,M3.2.0,M11.1.0", TimeFormat::Hour12);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tz_zone": "America/New_York",
                "tz_offset": "EST5EDT,M3.2.0,M11.1.0",
                "time_format": "12h"
            })
        );
    }

    #[test]
    fn time_info_rejects_unknown_format() {
        let result: Result<TimeInfo, _> =
            serde_json::from_str(r#"{"tz_zone":"UTC","tz_offset":"UTC0","time_format":"36h"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn set_time_zone_keeps_format() {
        let mut info = TimeInfo::new("UTC", "UTC0", TimeFormat::Hour12);
        info.set_time_zone(&TimeZone::new("Asia/Tokyo", "JST-9"));
        assert_eq!(info.tz_zone(), "Asia/Tokyo");
        assert_eq!(info.tz_offset(), "JST-9");
        assert_eq!(info.time_format(), TimeFormat::Hour12);
    }

    #[test]
    fn catalog_is_sorted_and_searchable() {
        let catalog: TimeZoneCatalog = [
            TimeZone::new("Europe/Zagreb", "CET-1CEST,M3.5.0,M10.5.0/3"),
            TimeZone::new("Africa/Abidjan", "GMT0"),
            TimeZone::new("Asia/Tokyo", "JST-9"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = catalog.iter().map(|tz| tz.zone.as_str()).collect();
        assert_eq!(names, ["Africa/Abidjan", "Asia/Tokyo", "Europe/Zagreb"]);
        assert_eq!(catalog.find("Asia/Tokyo").unwrap().offset, "JST-9");
        assert!(catalog.find("Mars/Olympus").is_none());
    }

    #[test]
    fn catalog_selects_current_zone() {
        let catalog = TimeZoneCatalog::from_json(r#"{"Asia/Tokyo":"JST-9","UTC":"UTC0"}"#).unwrap();
        let info = TimeInfo::new("UTC", "UTC0", TimeFormat::Hour24);
        assert_eq!(catalog.selected(&info).unwrap().offset, "UTC0");
    }

    #[test]
    fn catalog_rejects_non_string_offsets() {
        assert!(TimeZoneCatalog::from_json(r#"{"UTC": 0}"#).is_err());
    }
}
