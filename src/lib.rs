// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nixie Lib - A Rust library to configure WiFi Nixie tube clocks.
//!
//! The clock exposes a small JSON API over HTTP. This library provides typed
//! async access to it, together with the color conversions and form models a
//! control panel needs.
//!
//! # Supported Features
//!
//! - **Backlight**: RGB color and mode (off, on, fade, pulse)
//! - **Sleep schedule**: Nightly window during which the tubes are blanked
//! - **Time**: Time zone from the clock's catalog, 12h or 24h display
//! - **WiFi**: Hostname, SSID and password of the station the clock joins
//! - **Color conversion**: HSV to 8-bit RGB and back
//!
//! # Quick Start
//!
//! ```no_run
//! use nixie_lib::Clock;
//! use nixie_lib::types::{LedState, Rgb};
//!
//! #[tokio::main]
//! async fn main() -> nixie_lib::Result<()> {
//!     let clock = Clock::http("192.168.4.1")?;
//!
//!     let led = clock.led_info().await?;
//!     let led = led.with_color(Rgb::new(255, 96, 0)).with_state(LedState::Fade);
//!     clock.set_led_info(&led).await?;
//!
//!     let time = clock.time_info().await?;
//!     println!("Clock runs on {} ({})", time.tz_zone(), time.time_format());
//!     Ok(())
//! }
//! ```
//!
//! ## Color Conversion
//!
//! ```
//! use nixie_lib::types::{Hsv, Rgb, hsv_to_rgb};
//!
//! let orange = hsv_to_rgb(Hsv::new(1.0 / 12.0, 1.0, 1.0)?);
//! assert_eq!(orange, Rgb::new(255, 128, 0));
//! # Ok::<(), nixie_lib::ValueError>(())
//! ```

mod clock;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use clock::Clock;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Endpoint, Protocol, Response};
pub use state::PanelState;
pub use types::{Hsv, LedInfo, LedState, Rgb, SleepInfo, TimeFormat, TimeInfo, WifiInfo};
