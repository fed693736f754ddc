// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backlight LED types.
//!
//! The clock exposes its RGB backlight at `/api/v1/led/led_info` as
//! `{"R": 255, "G": 128, "B": 0, "state": "on"}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::Rgb;

/// Operating mode of the backlight.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::LedState;
///
/// let state: LedState = "pulse".parse().unwrap();
/// assert_eq!(state, LedState::Pulse);
/// assert_eq!(LedState::Fade.as_str(), "fade");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedState {
    /// Backlight is off.
    #[default]
    Off,
    /// Backlight shows a steady color.
    On,
    /// Backlight fades through colors.
    Fade,
    /// Backlight pulses the configured color.
    Pulse,
}

impl LedState {
    /// All states, in the order the panel offers them.
    pub const ALL: [Self; 4] = [Self::Off, Self::On, Self::Fade, Self::Pulse];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Fade => "fade",
            Self::Pulse => "pulse",
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "fade" => Ok(Self::Fade),
            "pulse" => Ok(Self::Pulse),
            _ => Err(ValueError::InvalidLedState(s.to_string())),
        }
    }
}

/// Color and state of the backlight.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{LedInfo, LedState, Rgb};
///
/// let info: LedInfo = serde_json::from_str(r#"{"R":255,"G":0,"B":0,"state":"on"}"#).unwrap();
/// assert_eq!(info.color(), Rgb::new(255, 0, 0));
/// assert_eq!(info.state(), LedState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "LedInfoWire", into = "LedInfoWire")]
pub struct LedInfo {
    color: Rgb,
    state: LedState,
}

impl LedInfo {
    /// Creates a new LED info.
    #[must_use]
    pub const fn new(color: Rgb, state: LedState) -> Self {
        Self { color, state }
    }

    /// Returns the backlight color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Returns the backlight state.
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }

    /// Replaces the backlight color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Replaces the backlight state.
    pub fn set_state(&mut self, state: LedState) {
        self.state = state;
    }

    /// Returns a copy with a different color.
    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with a different state.
    #[must_use]
    pub const fn with_state(mut self, state: LedState) -> Self {
        self.state = state;
        self
    }
}

impl fmt::Display for LedInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.color, self.state)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct LedInfoWire {
    #[serde(rename = "R")]
    red: u8,
    #[serde(rename = "G")]
    green: u8,
    #[serde(rename = "B")]
    blue: u8,
    state: LedState,
}

impl From<LedInfoWire> for LedInfo {
    fn from(wire: LedInfoWire) -> Self {
        Self::new(Rgb::new(wire.red, wire.green, wire.blue), wire.state)
    }
}

impl From<LedInfo> for LedInfoWire {
    fn from(info: LedInfo) -> Self {
        Self {
            red: info.color.red(),
            green: info.color.green(),
            blue: info.color.blue(),
            state: info.state,
        }
    }
}
