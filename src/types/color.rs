// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSV and RGB color types and the conversion between them.
//!
//! The clock persists its backlight color as an 8-bit RGB triple, while the
//! control panel edits it through hue/saturation/value sliders. [`hsv_to_rgb`]
//! and [`rgb_to_hsv`] keep both views in sync.
//!
//! # Rounding
//!
//! Channels are scaled by 255 and rounded half away from zero
//! ([`f64::round`]). Converting HSV to RGB and back is therefore not exactly
//! reversible: it reproduces the input within `1/255` per component as long
//! as saturation and value are large enough for the hue to survive 8-bit
//! quantization.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// HSV color with every component normalized.
///
/// - hue in `[0, 1)`, where 0 is red, 1/3 is green and 2/3 is blue
/// - saturation in `[0, 1]`
/// - value in `[0, 1]`
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{Hsv, Rgb};
///
/// let green = Hsv::new(1.0 / 3.0, 1.0, 1.0).unwrap();
/// assert_eq!(green.to_rgb(), Rgb::new(0, 255, 0));
///
/// assert!(Hsv::new(1.0, 0.5, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl Hsv {
    /// Creates a new HSV color, validating every component.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHue`, `InvalidSaturation` or `InvalidValue`
    /// if a component is outside its range (or not a number).
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self, ValueError> {
        if !(0.0..1.0).contains(&hue) {
            return Err(ValueError::InvalidHue(hue));
        }
        if !(0.0..=1.0).contains(&saturation) {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValueError::InvalidValue(value));
        }
        Ok(Self {
            hue,
            saturation,
            value,
        })
    }

    /// Creates an HSV color without range checks.
    ///
    /// The conversion to RGB stays total for any input: out-of-range hues
    /// select their sector modulo 6 and channels are clamped to `[0, 255]`.
    #[must_use]
    pub const fn new_unchecked(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns the hue in `[0, 1)`.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation in `[0, 1]`.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the value in `[0, 1]`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Converts this color to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSV({:.1}, {:.1}%, {:.1}%)",
            self.hue * 360.0,
            self.saturation * 100.0,
            self.value * 100.0
        )
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use nixie_lib::types::Rgb;
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.to_hex_with_hash(), "#FF8000");
///
/// let red: Rgb = "#F00".parse().unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
///
/// let hsv = red.to_hsv();
/// assert_eq!(hsv.hue(), 0.0);
/// assert_eq!(hsv.saturation(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pure black, the backlight's "all channels off" color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Full white.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not a valid
    /// hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        match hex.len() {
            3 => {
                let bytes = hex.as_bytes();
                let r = parse_hex_digit(bytes[0])?;
                let g = parse_hex_digit(bytes[1])?;
                let b = parse_hex_digit(bytes[2])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = parse_hex_pair(&hex[0..2])?;
                let g = parse_hex_pair(&hex[2..4])?;
                let b = parse_hex_pair(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as `RRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the color as `#RRGGBB`.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// Converts this color to HSV.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_with_hash())
    }
}

impl FromStr for Rgb {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

fn parse_hex_digit(byte: u8) -> Result<u8, ValueError> {
    char::from(byte)
        .to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidHexColor(char::from(byte).to_string()))
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}

/// Converts an HSV color to 8-bit RGB.
///
/// The hue picks one of six 60° sectors; within it the channels are built
/// from `p = v(1-s)`, `q = v(1-fs)` and `t = v(1-(1-f)s)` where `f` is the
/// position inside the sector.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{hsv_to_rgb, Hsv, Rgb};
///
/// let red = hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0).unwrap());
/// assert_eq!(red, Rgb::new(255, 0, 0));
/// ```
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv {
        hue: h,
        saturation: s,
        value: v,
    } = hsv;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector(i) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Converts an 8-bit RGB color to HSV.
///
/// Black yields saturation 0 and every gray yields hue 0. When two channels
/// share the maximum, red wins over green and green over blue.
///
/// # Examples
///
/// ```
/// use nixie_lib::types::{rgb_to_hsv, Rgb};
///
/// let hsv = rgb_to_hsv(Rgb::new(0, 0, 255));
/// assert!((hsv.hue() - 2.0 / 3.0).abs() < 1e-12);
/// assert_eq!(hsv.saturation(), 1.0);
/// assert_eq!(hsv.value(), 1.0);
/// ```
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.red);
    let g = f64::from(rgb.green);
    let b = f64::from(rgb.blue);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let saturation = if max == 0.0 { 0.0 } else { d / max };
    let value = max / 255.0;

    // Channels are integral, so exact comparisons are sound here.
    let hue = if max == min {
        0.0
    } else if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsv {
        hue,
        saturation,
        value,
    }
}

/// Maps a (possibly negative or huge) sector index into `0..6`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sector(i: f64) -> u8 {
    if !i.is_finite() {
        return 0;
    }
    (i as i64).rem_euclid(6) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f64) -> u8 {
    let scaled = (component * 255.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1.0 / 255.0 + 1e-9;

    fn hsv(h: f64, s: f64, v: f64) -> Hsv {
        Hsv::new_unchecked(h, s, v)
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn hsv_to_rgb_boundaries() {
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.0, 0.0)), Rgb::black());
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.0, 1.0)), Rgb::white());
    }

    #[test]
    fn hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(hsv(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        // 1/3 * 6 rounds to exactly 2.0, landing at the start of sector 2
        assert_eq!(hsv_to_rgb(hsv(1.0 / 3.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(hsv(2.0 / 3.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsv_to_rgb_every_sector() {
        let expected = [
            (0.0, Rgb::new(255, 0, 0)),
            (1.0 / 6.0, Rgb::new(255, 255, 0)),
            (0.5, Rgb::new(0, 255, 255)),
            (5.0 / 6.0, Rgb::new(255, 0, 255)),
            (1.0 / 12.0, Rgb::new(255, 128, 0)),
            (0.75, Rgb::new(128, 0, 255)),
        ];
        for (h, rgb) in expected {
            assert_eq!(hsv_to_rgb(hsv(h, 1.0, 1.0)), rgb, "hue {h}");
        }
    }

    #[test]
    fn hsv_to_rgb_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5 exactly
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.0, 0.5)), Rgb::new(128, 128, 128));
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.5, 1.0)), Rgb::new(255, 128, 128));
    }

    #[test]
    fn hsv_to_rgb_negative_hue_wraps_into_last_sector() {
        let expected = Rgb::new(255, 0, 153);
        assert_eq!(hsv_to_rgb(hsv(-0.1, 1.0, 1.0)), expected);
        assert_eq!(hsv_to_rgb(hsv(0.9, 1.0, 1.0)), expected);
    }

    #[test]
    fn hsv_to_rgb_clamps_out_of_range_components() {
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.0, 1.5)), Rgb::white());
        assert_eq!(hsv_to_rgb(hsv(0.0, 0.0, -0.5)), Rgb::black());
        assert_eq!(hsv_to_rgb(hsv(f64::NAN, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn rgb_to_hsv_vectors() {
        assert_eq!(rgb_to_hsv(Rgb::black()), hsv(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), hsv(0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)), hsv(1.0 / 3.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(Rgb::white()), hsv(0.0, 0.0, 1.0));
    }

    #[test]
    fn rgb_to_hsv_red_with_blue_above_green_wraps_hue() {
        let result = rgb_to_hsv(Rgb::new(255, 0, 153));
        assert!((result.hue() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn rgb_to_hsv_tie_prefers_red_then_green() {
        // red == green is resolved through the red branch
        let yellow = rgb_to_hsv(Rgb::new(200, 200, 0));
        assert!((yellow.hue() - 1.0 / 6.0).abs() < 1e-12);
        // green == blue is resolved through the green branch
        let cyan = rgb_to_hsv(Rgb::new(0, 200, 200));
        assert!((cyan.hue() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rgb_to_hsv_achromatic_has_no_saturation() {
        for level in 0..=255u8 {
            let result = rgb_to_hsv(Rgb::new(level, level, level));
            assert_eq!(result.saturation(), 0.0);
            assert_eq!(result.hue(), 0.0);
        }
    }

    #[test]
    fn rgb_to_hsv_stays_in_range() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let result = rgb_to_hsv(Rgb::new(r, g, b));
                    assert!((0.0..1.0).contains(&result.hue()), "{r},{g},{b}");
                    assert!((0.0..=1.0).contains(&result.saturation()));
                    assert!((0.0..=1.0).contains(&result.value()));
                }
            }
        }
    }

    #[test]
    fn round_trip_within_quantization() {
        let levels = [0.75, 0.8, 0.9, 1.0];
        for step in 0..36 {
            let h = f64::from(step) / 36.0;
            for s in levels {
                for v in levels {
                    let back = rgb_to_hsv(hsv_to_rgb(hsv(h, s, v)));
                    assert!(hue_distance(back.hue(), h) <= TOLERANCE, "h {h} s {s} v {v}");
                    assert!((back.saturation() - s).abs() <= TOLERANCE);
                    assert!((back.value() - v).abs() <= TOLERANCE);
                }
            }
        }
    }

    #[test]
    fn hsv_new_validates_ranges() {
        assert!(Hsv::new(0.5, 0.5, 0.5).is_ok());
        assert!(matches!(Hsv::new(1.0, 0.5, 0.5), Err(ValueError::InvalidHue(_))));
        assert!(matches!(
            Hsv::new(0.5, 1.5, 0.5),
            Err(ValueError::InvalidSaturation(_))
        ));
        assert!(matches!(
            Hsv::new(0.5, 0.5, -0.1),
            Err(ValueError::InvalidValue(_))
        ));
        assert!(Hsv::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn conversions_through_from() {
        let rgb: Rgb = hsv(0.0, 1.0, 1.0).into();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        let back: Hsv = rgb.into();
        assert_eq!(back, hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn rgb_hex_parsing() {
        assert_eq!(Rgb::from_hex("#FF5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hex("#F00").unwrap(), Rgb::new(255, 0, 0));
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#FF00").is_err());
        assert!(Rgb::from_hex("a€bc").is_err());
    }

    #[test]
    fn rgb_hex_formatting() {
        let color = Rgb::new(255, 128, 0);
        assert_eq!(color.to_hex(), "FF8000");
        assert_eq!(color.to_string(), "#FF8000");
    }

    #[test]
    fn hsv_display() {
        assert_eq!(hsv(0.5, 1.0, 0.5).to_string(), "HSV(180.0, 100.0%, 50.0%)");
    }
}
