// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state bodies.
//!
//! [`LightState`] builds the body of `set_light_state` and `set_group_state`
//! requests. Each value type checks its range at construction, so a built
//! state only contains values the bridge accepts.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use hue_lib::types::{Brightness, ColorTemperature, LightState, TransitionTime};
//!
//! let state = LightState::new()
//!     .on()
//!     .brightness(Brightness::new(200).unwrap())
//!     .color_temperature(ColorTemperature::WARM)
//!     .transition(TransitionTime::new(Duration::from_secs(2)).unwrap());
//!
//! assert_eq!(
//!     serde_json::to_string(&state).unwrap(),
//!     r#"{"on":true,"bri":200,"ct":370,"transitiontime":20}"#
//! );
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Brightness on the bridge scale (1-254).
///
/// 1 is the dimmest level the light supports, not off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest level.
    pub const MIN: Self = Self(1);

    /// Full brightness.
    pub const MAX: Self = Self(254);

    /// Creates a brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is 0 or 255.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(1..=254).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: 254,
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness from a percentage, rounding to the nearest step.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if percent exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lib::types::Brightness;
    ///
    /// assert_eq!(Brightness::from_percent(100).unwrap(), Brightness::MAX);
    /// assert_eq!(Brightness::from_percent(0).unwrap(), Brightness::MIN);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_percent(percent: u8) -> Result<Self, ValueError> {
        if percent > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u32::from(percent),
            });
        }
        // Safe: result is at most 254
        let scaled = (u16::from(percent) * 254 + 50) / 100;
        Ok(Self((scaled as u8).max(1)))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

/// Hue on the bridge color wheel (0-65535, both ends red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorHue(u16);

impl ColorHue {
    /// Red.
    pub const RED: Self = Self(0);
    /// Green.
    pub const GREEN: Self = Self(21845);
    /// Blue.
    pub const BLUE: Self = Self(43690);

    /// Creates a hue value. Every `u16` is a valid hue.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Creates a hue from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if degrees exceeds 360.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lib::types::ColorHue;
    ///
    /// assert_eq!(ColorHue::from_degrees(120).unwrap(), ColorHue::GREEN);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_degrees(degrees: u16) -> Result<Self, ValueError> {
        if degrees > 360 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 360,
                actual: u32::from(degrees),
            });
        }
        // Safe: 360 maps to 65535
        let value = (u32::from(degrees) * 65535 + 180) / 360;
        Ok(Self(value as u16))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

/// Saturation (0-254).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Saturation(u8);

impl Saturation {
    /// White.
    pub const MIN: Self = Self(0);
    /// Fully colored.
    pub const MAX: Self = Self(254);

    /// Creates a saturation value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is 255.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 254 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 254,
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Saturation {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Saturation> for u8 {
    fn from(value: Saturation) -> Self {
        value.0
    }
}

/// Color temperature in mireds (153-500).
///
/// - 153 (6500K) - Cool daylight
/// - 370 (2700K) - Warm white
/// - 500 (2000K) - Candlelight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature (coolest).
    pub const MIN: u16 = 153;
    /// Maximum color temperature (warmest).
    pub const MAX: u16 = 500;

    /// Cool daylight (~6500K).
    pub const COOL: Self = Self(153);
    /// Neutral white (~4000K).
    pub const NEUTRAL: Self = Self(250);
    /// Warm white (~2700K).
    pub const WARM: Self = Self(370);
    /// Candlelight (~2000K).
    pub const CANDLE: Self = Self(500);

    /// Creates a color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if mireds is outside 153-500.
    pub fn new(mireds: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&mireds) {
            return Err(ValueError::OutOfRange {
                min: u32::from(Self::MIN),
                max: u32::from(Self::MAX),
                actual: u32::from(mireds),
            });
        }
        Ok(Self(mireds))
    }

    /// Creates a color temperature from Kelvin.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the converted value is outside 153-500.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lib::types::ColorTemperature;
    ///
    /// assert_eq!(ColorTemperature::from_kelvin(4000).unwrap().value(), 250);
    /// assert!(ColorTemperature::from_kelvin(10000).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_kelvin(kelvin: u32) -> Result<Self, ValueError> {
        if kelvin == 0 {
            return Err(ValueError::OutOfRange {
                min: 2000,
                max: 6500,
                actual: 0,
            });
        }
        let mireds = (1_000_000 + kelvin / 2) / kelvin;
        if mireds > u32::from(u16::MAX) {
            return Err(ValueError::OutOfRange {
                min: u32::from(Self::MIN),
                max: u32::from(Self::MAX),
                actual: mireds,
            });
        }
        // Safe: checked above
        Self::new(mireds as u16)
    }

    /// Returns the value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ColorTemperature {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorTemperature> for u16 {
    fn from(value: ColorTemperature) -> Self {
        value.0
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

/// A CIE 1931 color space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct XyColor {
    x: f64,
    y: f64,
}

impl XyColor {
    /// Creates a coordinate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCoordinate` if either value is outside [0, 1].
    pub fn new(x: f64, y: f64) -> Result<Self, ValueError> {
        for value in [x, y] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValueError::InvalidCoordinate(value));
            }
        }
        Ok(Self { x, y })
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

impl From<XyColor> for [f64; 2] {
    fn from(value: XyColor) -> Self {
        [value.x, value.y]
    }
}

impl TryFrom<[f64; 2]> for XyColor {
    type Error = ValueError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

/// Transition duration, sent in steps of 100ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTime(u16);

impl TransitionTime {
    /// Instant change.
    pub const INSTANT: Self = Self(0);

    /// Bridge default (400ms).
    pub const DEFAULT: Self = Self(4);

    /// Creates a transition time, rounding to the nearest 100ms.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the duration exceeds 65535 steps.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(duration: Duration) -> Result<Self, ValueError> {
        let steps = (duration.as_millis() + 50) / 100;
        if steps > u128::from(u16::MAX) {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u32::from(u16::MAX),
                actual: u32::try_from(steps).unwrap_or(u32::MAX),
            });
        }
        // Safe: checked above
        Ok(Self(steps as u16))
    }

    /// Returns the number of 100ms steps.
    #[must_use]
    pub const fn steps(&self) -> u16 {
        self.0
    }

    /// Returns the transition as a `Duration`.
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.0) * 100)
    }
}

impl Default for TransitionTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Alert effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// Stop any running alert.
    None,
    /// One breathe cycle.
    Select,
    /// Breathe cycles for 15 seconds.
    #[serde(rename = "lselect")]
    LongSelect,
}

/// Dynamic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// No effect.
    None,
    /// Cycle through all hues.
    ColorLoop,
}

/// Body of a light state or group action change.
///
/// Fields left unset are omitted from the request, leaving them unchanged
/// on the bridge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<ColorHue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<Saturation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xy: Option<XyColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct: Option<ColorTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitiontime: Option<TransitionTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene: Option<String>,
}

impl LightState {
    /// Creates an empty state change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the light on.
    #[must_use]
    pub fn on(mut self) -> Self {
        self.on = Some(true);
        self
    }

    /// Turns the light off.
    #[must_use]
    pub fn off(mut self) -> Self {
        self.on = Some(false);
        self
    }

    /// Sets the brightness.
    #[must_use]
    pub fn brightness(mut self, brightness: Brightness) -> Self {
        self.bri = Some(brightness);
        self
    }

    /// Sets the hue.
    #[must_use]
    pub fn hue(mut self, hue: ColorHue) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation.
    #[must_use]
    pub fn saturation(mut self, saturation: Saturation) -> Self {
        self.sat = Some(saturation);
        self
    }

    /// Sets the xy color. Takes precedence over hue, saturation and color
    /// temperature on the bridge.
    #[must_use]
    pub fn xy(mut self, xy: XyColor) -> Self {
        self.xy = Some(xy);
        self
    }

    /// Sets the color temperature.
    #[must_use]
    pub fn color_temperature(mut self, ct: ColorTemperature) -> Self {
        self.ct = Some(ct);
        self
    }

    /// Sets the alert effect.
    #[must_use]
    pub fn alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    /// Sets the dynamic effect.
    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Sets the transition time.
    #[must_use]
    pub fn transition(mut self, transition: TransitionTime) -> Self {
        self.transitiontime = Some(transition);
        self
    }

    /// Changes the brightness relative to its current value (-254 to 254).
    #[must_use]
    pub fn brightness_increment(mut self, delta: i16) -> Self {
        self.bri_inc = Some(delta.clamp(-254, 254));
        self
    }

    /// Changes the saturation relative to its current value (-254 to 254).
    #[must_use]
    pub fn saturation_increment(mut self, delta: i16) -> Self {
        self.sat_inc = Some(delta.clamp(-254, 254));
        self
    }

    /// Changes the hue relative to its current value (-65534 to 65534).
    #[must_use]
    pub fn hue_increment(mut self, delta: i32) -> Self {
        self.hue_inc = Some(delta.clamp(-65534, 65534));
        self
    }

    /// Changes the color temperature relative to its current value
    /// (-65534 to 65534).
    #[must_use]
    pub fn color_temperature_increment(mut self, delta: i32) -> Self {
        self.ct_inc = Some(delta.clamp(-65534, 65534));
        self
    }

    /// Recalls a scene. Only meaningful for group actions.
    #[must_use]
    pub fn scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }

    /// Returns whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
