// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form models for the control panel.
//!
//! Each form holds the values as a user edits them (slider positions,
//! separate hour and minute fields, a repeated password) and converts to and
//! from the device types.

use crate::error::ValueError;
use crate::types::{Hsv, MinuteOfDay, Rgb, SleepInfo, WifiInfo, hsv_to_rgb, rgb_to_hsv};

/// Positions of the hue, saturation and value sliders.
///
/// Hue is in degrees (0-360), saturation and value in percent (0-100).
/// Positions outside those ranges are clamped, and a non-finite position
/// reads as 0.
///
/// # Examples
///
/// ```
/// use nixie_lib::state::ColorSliders;
/// use nixie_lib::types::Rgb;
///
/// let sliders = ColorSliders::from_rgb(Rgb::new(0, 0, 255));
/// assert!((sliders.hue() - 240.0).abs() < 1e-9);
/// assert_eq!(sliders.to_rgb(), Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSliders {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl ColorSliders {
    /// Maximum hue position in degrees.
    pub const MAX_HUE: f64 = 360.0;

    /// Maximum saturation and value position in percent.
    pub const MAX_PERCENT: f64 = 100.0;

    /// Creates slider positions, clamping each into its range.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: clamp_position(hue, Self::MAX_HUE),
            saturation: clamp_position(saturation, Self::MAX_PERCENT),
            value: clamp_position(value, Self::MAX_PERCENT),
        }
    }

    /// Positions the sliders to show an RGB color.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsv = rgb_to_hsv(rgb);
        Self::new(
            hsv.hue() * Self::MAX_HUE,
            hsv.saturation() * Self::MAX_PERCENT,
            hsv.value() * Self::MAX_PERCENT,
        )
    }

    /// Returns the hue position in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation position in percent.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the value position in percent.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the normalized HSV color; a hue of 360° wraps to 0.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let hue = (self.hue / Self::MAX_HUE).rem_euclid(1.0);
        Hsv::new_unchecked(
            hue,
            self.saturation / Self::MAX_PERCENT,
            self.value / Self::MAX_PERCENT,
        )
    }

    /// Returns the RGB color the sliders describe.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(self.to_hsv())
    }
}

fn clamp_position(position: f64, max: f64) -> f64 {
    if position.is_finite() {
        position.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Hour and minute fields of the sleep schedule.
///
/// # Examples
///
/// ```
/// use nixie_lib::state::SleepForm;
///
/// let form = SleepForm {
///     before_hour: 6,
///     before_minute: 45,
///     after_hour: 22,
///     after_minute: 30,
/// };
/// let info = form.to_info().unwrap();
/// assert_eq!(info.sleep_before().minutes(), 405);
/// assert_eq!(SleepForm::from_info(&info), form);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SleepForm {
    /// Wake-up hour (0-23).
    pub before_hour: u8,
    /// Wake-up minute (0-59).
    pub before_minute: u8,
    /// Sleep hour (0-23).
    pub after_hour: u8,
    /// Sleep minute (0-59).
    pub after_minute: u8,
}

impl SleepForm {
    /// Splits a schedule into hour and minute fields.
    #[must_use]
    pub fn from_info(info: &SleepInfo) -> Self {
        Self {
            before_hour: info.sleep_before().hour(),
            before_minute: info.sleep_before().minute(),
            after_hour: info.sleep_after().hour(),
            after_minute: info.sleep_after().minute(),
        }
    }

    /// Builds the schedule from the fields.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if an hour exceeds 23 or a minute
    /// exceeds 59.
    pub fn to_info(&self) -> Result<SleepInfo, ValueError> {
        Ok(SleepInfo::new(
            MinuteOfDay::from_hm(self.before_hour, self.before_minute)?,
            MinuteOfDay::from_hm(self.after_hour, self.after_minute)?,
        ))
    }
}

/// Fields of the WiFi form, including the password confirmation.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct WifiForm {
    /// Network hostname of the clock.
    pub hostname: String,
    /// SSID to join.
    pub ssid: String,
    /// Password.
    pub password: String,
    /// Password typed a second time.
    pub password_verify: String,
}

impl WifiForm {
    /// Fills the form from the current settings, confirmation included.
    #[must_use]
    pub fn from_info(info: &WifiInfo) -> Self {
        Self {
            hostname: info.hostname().to_string(),
            ssid: info.ssid().to_string(),
            password: info.password().to_string(),
            password_verify: info.password().to_string(),
        }
    }

    /// Checks the form and builds the settings to send.
    ///
    /// # Errors
    ///
    /// Returns, in this order of precedence, `ValueError::EmptyHostname`,
    /// `EmptySsid`, `EmptyPassword`, `OutOfRange` (password too long) or
    /// `PasswordMismatch`.
    pub fn validate(&self) -> Result<WifiInfo, ValueError> {
        let info = WifiInfo::new(&*self.hostname, &*self.ssid, &*self.password)?;
        if self.password != self.password_verify {
            return Err(ValueError::PasswordMismatch);
        }
        Ok(info)
    }
}

impl std::fmt::Debug for WifiForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WifiForm")
            .field("hostname", &self.hostname)
            .field("ssid", &self.ssid)
            .finish_non_exhaustive()
    }
}
