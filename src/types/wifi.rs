// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WiFi station settings.
//!
//! The password never travels in clear text: the clock stores and returns it
//! base64 encoded, and expects the same encoding on update.
//!
//! Passwords are encoded as UTF-8. Older control pages encoded them as
//! Latin-1, so a decoded password that is not valid UTF-8 is read as
//! Latin-1 instead of being rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// WiFi settings of the clock.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::WifiInfo;
///
/// let info: WifiInfo = serde_json::from_str(
///     r#"{"hostname":"nixie","SSID":"home","password":"aHVudGVyMg=="}"#,
/// ).unwrap();
/// assert_eq!(info.password(), "hunter2");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WifiInfo {
    hostname: String,
    #[serde(rename = "SSID")]
    ssid: String,
    #[serde(with = "base64_password")]
    password: String,
}

impl WifiInfo {
    /// Longest password the clock can store, in bytes.
    pub const MAX_PASSWORD_LEN: usize = 63;

    /// Creates WiFi settings, rejecting empty fields and passwords the
    /// clock cannot store.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyHostname`, `EmptySsid`, `EmptyPassword` or
    /// `OutOfRange` (password longer than [`Self::MAX_PASSWORD_LEN`] bytes),
    /// checked in that order.
    pub fn new(
        hostname: impl Into<String>,
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValueError> {
        let info = Self {
            hostname: hostname.into(),
            ssid: ssid.into(),
            password: password.into(),
        };
        if info.hostname.is_empty() {
            return Err(ValueError::EmptyHostname);
        }
        if info.ssid.is_empty() {
            return Err(ValueError::EmptySsid);
        }
        if info.password.is_empty() {
            return Err(ValueError::EmptyPassword);
        }
        if info.password.len() > Self::MAX_PASSWORD_LEN {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: 63,
                actual: u16::try_from(info.password.len()).unwrap_or(u16::MAX),
            });
        }
        Ok(info)
    }

    /// Returns the network hostname of the clock.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the SSID the clock joins.
    #[must_use]
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Returns the decoded password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for WifiInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiInfo")
            .field("hostname", &self.hostname)
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

mod base64_password {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(password: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(password))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = STANDARD.decode(encoded.trim()).map_err(de::Error::custom)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_base64_on_the_wire() {
        let info = WifiInfo::new("nixie", "home", "hunter2").unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hostname": "nixie",
                "SSID": "home",
                "password": "aHVudGVyMg=="
            })
        );
    }

    #[test]
    fn decodes_password_from_device() {
        let info: WifiInfo =
            serde_json::from_str(r#"{"hostname":"h","SSID":"s","password":"c2VjcmV0"}"#).unwrap();
        assert_eq!(info.password(), "secret");
        assert_eq!(info.ssid(), "s");
    }

    #[test]
    fn rejects_invalid_base64() {
        let result: Result<WifiInfo, _> =
            serde_json::from_str(r#"{"hostname":"h","SSID":"s","password":"%%%"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn decodes_latin1_password() {
        // "caf\xE9"
        let info: WifiInfo =
            serde_json::from_str(r#"{"hostname":"h","SSID":"s","password":"Y2Fm6Q=="}"#).unwrap();
        assert_eq!(info.password(), "caf\u{e9}");
    }

    #[test]
    fn decodes_utf8_password() {
        let info: WifiInfo =
            serde_json::from_str(r#"{"hostname":"h","SSID":"s","password":"Y2Fmw6k="}"#).unwrap();
        assert_eq!(info.password(), "caf\u{e9}");
    }

    #[test]
    fn password_length_limit() {
        assert!(WifiInfo::new("h", "s", "p".repeat(63)).is_ok());
        assert_eq!(
            WifiInfo::new("h", "s", "p".repeat(64)),
            Err(ValueError::OutOfRange {
                min: 1,
                max: 63,
                actual: 64,
            })
        );
        // Limit counts bytes, not characters
        assert!(WifiInfo::new("h", "s", "\u{e9}".repeat(32)).is_err());
    }

    #[test]
    fn new_checks_fields_in_order() {
        assert_eq!(WifiInfo::new("", "", ""), Err(ValueError::EmptyHostname));
        assert_eq!(WifiInfo::new("h", "", ""), Err(ValueError::EmptySsid));
        assert_eq!(WifiInfo::new("h", "s", ""), Err(ValueError::EmptyPassword));
    }

    #[test]
    fn debug_hides_password() {
        let info = WifiInfo::new("nixie", "home", "hunter2").unwrap();
        let debug = format!("{info:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("home"));
    }
}
