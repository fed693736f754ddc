// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the clock's web API.
//!
//! Each type mirrors one JSON object of the clock and checks its ranges at
//! construction or parse time.
//!
//! # Types
//!
//! - [`Hsv`] / [`Rgb`] - Backlight color in both color spaces
//! - [`LedState`] / [`LedInfo`] - Backlight mode and color
//! - [`MinuteOfDay`] / [`SleepInfo`] - Nightly tube blanking schedule
//! - [`TimeFormat`] / [`TimeInfo`] - Time zone and 12h/24h display
//! - [`TimeZone`] / [`TimeZoneCatalog`] - Zones offered by `/zones.json`
//! - [`WifiInfo`] - Station hostname, SSID and password

mod color;
mod led;
mod sleep;
mod time;
mod wifi;

pub use color::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};
pub use led::{LedInfo, LedState};
pub use sleep::{MinuteOfDay, SleepInfo};
pub use time::{TimeFormat, TimeInfo, TimeZone, TimeZoneCatalog};
pub use wifi::WifiInfo;
