// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed client for the clock's web API.
//!
//! ```no_run
//! use nixie_lib::Clock;
//! use nixie_lib::types::LedState;
//!
//! # async fn example() -> nixie_lib::Result<()> {
//! let clock = Clock::http("192.168.4.1")?;
//!
//! let led = clock.led_info().await?;
//! clock.set_led_info(&led.with_state(LedState::Pulse)).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError};
#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};
use crate::protocol::{Endpoint, Protocol, Response};
use crate::types::{LedInfo, SleepInfo, TimeInfo, TimeZoneCatalog, WifiInfo};

/// A Nixie clock reachable through a [`Protocol`].
///
/// Every call is an independent request; the client keeps no state about the
/// device. Use [`PanelState`](crate::state::PanelState) to track what was
/// last read.
#[derive(Debug, Clone)]
pub struct Clock<P: Protocol> {
    protocol: P,
}

impl<P: Protocol> Clock<P> {
    /// Creates a clock client over the given transport.
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Returns the underlying transport.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Reads the backlight color and state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a valid LED info.
    pub async fn led_info(&self) -> Result<LedInfo, Error> {
        self.fetch(Endpoint::LedInfo).await
    }

    /// Replaces the backlight color and state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_led_info(&self, info: &LedInfo) -> Result<Response, Error> {
        self.store(Endpoint::LedInfo, info).await
    }

    /// Reads the sleep schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a valid schedule.
    pub async fn sleep_info(&self) -> Result<SleepInfo, Error> {
        self.fetch(Endpoint::SleepInfo).await
    }

    /// Replaces the sleep schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_sleep_info(&self, info: &SleepInfo) -> Result<Response, Error> {
        self.store(Endpoint::SleepInfo, info).await
    }

    /// Reads the time zone and display format.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a valid time info.
    pub async fn time_info(&self) -> Result<TimeInfo, Error> {
        self.fetch(Endpoint::TimeInfo).await
    }

    /// Replaces the time zone and display format.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_time_info(&self, info: &TimeInfo) -> Result<Response, Error> {
        self.store(Endpoint::TimeInfo, info).await
    }

    /// Reads the WiFi settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the body is malformed, or the
    /// password is not valid base64.
    pub async fn wifi_info(&self) -> Result<WifiInfo, Error> {
        self.fetch(Endpoint::WifiInfo).await
    }

    /// Replaces the WiFi settings.
    ///
    /// The clock restarts to join the new network once it has answered.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_wifi_info(&self, info: &WifiInfo) -> Result<Response, Error> {
        self.store(Endpoint::WifiInfo, info).await
    }

    /// Reads the catalog of selectable time zones.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the catalog is malformed.
    pub async fn time_zones(&self) -> Result<TimeZoneCatalog, Error> {
        self.fetch(Endpoint::TimeZones).await
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, Error> {
        let response = self.protocol.get(endpoint).await?;
        let value = response.parse()?;
        Ok(value)
    }

    async fn store<T: Serialize>(&self, endpoint: Endpoint, value: &T) -> Result<Response, Error> {
        let body = serde_json::to_string(value).map_err(ParseError::Json)?;
        let response = self.protocol.post(endpoint, body).await?;
        tracing::debug!(endpoint = %endpoint, "Clock accepted update");
        Ok(response)
    }
}

#[cfg(feature = "http")]
impl Clock<HttpClient> {
    /// Creates an HTTP clock client for a host or base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn http(host: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(HttpClient::new(host)?))
    }

    /// Creates an HTTP clock client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: HttpConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }
}
