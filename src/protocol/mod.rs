// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the clock's web API.
//!
//! The clock serves a handful of JSON resources. Each is read with `GET` and
//! replaced with `POST`; [`Protocol`] abstracts over how those requests
//! reach the device so that [`Clock`](crate::Clock) can be driven by
//! [`HttpClient`] or by an in-memory double in tests.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::fmt;

use crate::error::{ParseError, ProtocolError};

/// A resource exposed by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Backlight color and state.
    LedInfo,
    /// Nightly sleep schedule.
    SleepInfo,
    /// Time zone and display format.
    TimeInfo,
    /// WiFi station settings.
    WifiInfo,
    /// Catalog of selectable time zones (read only).
    TimeZones,
}

impl Endpoint {
    /// Every endpoint, in the order the panel loads them.
    pub const ALL: [Self; 5] = [
        Self::TimeZones,
        Self::TimeInfo,
        Self::SleepInfo,
        Self::LedInfo,
        Self::WifiInfo,
    ];

    /// Returns the request path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::LedInfo => "/api/v1/led/led_info",
            Self::SleepInfo => "/api/v1/clock/sleep_info",
            Self::TimeInfo => "/api/v1/clock/time_info",
            Self::WifiInfo => "/api/v1/wifi/wifi_info",
            Self::TimeZones => "/zones.json",
        }
    }

    /// Returns true if the clock accepts `POST` on this endpoint.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        !matches!(self, Self::TimeZones)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Body returned by the clock.
#[derive(Debug, Clone)]
pub struct Response {
    body: String,
}

impl Response {
    /// Creates a response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Transport that can read and replace the clock's resources.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Fetches an endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the clock answers with
    /// an error status.
    async fn get(&self, endpoint: Endpoint) -> Result<Response, ProtocolError>;

    /// Posts a JSON body to an endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the clock answers with
    /// an error status.
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<Response, ProtocolError>;
}
