// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `nixie_lib` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, protocol communication, response parsing, and panel state.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The panel tried to apply settings that were never loaded from the clock.
    #[error("{0} has not been loaded from the clock")]
    NotLoaded(&'static str),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A normalized hue is outside `[0, 1)`.
    #[error("hue {0} is out of range [0, 1)")]
    InvalidHue(f64),

    /// A normalized saturation is outside `[0, 1]`.
    #[error("saturation {0} is out of range [0, 1]")]
    InvalidSaturation(f64),

    /// A normalized value (brightness) is outside `[0, 1]`.
    #[error("value {0} is out of range [0, 1]")]
    InvalidValue(f64),

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// An unknown LED state string was provided.
    #[error("invalid LED state: {0}")]
    InvalidLedState(String),

    /// An unknown time format string was provided.
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// The WiFi hostname is empty.
    #[error("hostname cannot be empty")]
    EmptyHostname,

    /// The WiFi SSID is empty.
    #[error("WiFi SSID cannot be empty")]
    EmptySsid,

    /// The WiFi password is empty.
    #[error("WiFi password cannot be empty")]
    EmptyPassword,

    /// The password and its confirmation differ.
    #[error("passwords are not matching")]
    PasswordMismatch,
}

/// Errors related to protocol communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The clock answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing clock responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
