// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculator configuration.
//!
//! [`CalculatorConfig`] is a plain value: every builder consumes it and
//! returns a new one, so a configuration can be shared freely between
//! threads and calls.
//!
//! ```
//! use qamar::{CalculationMethod, CalculatorConfig, JuristicMethod, TimeFormat};
//!
//! let config = CalculatorConfig::default()
//!     .with_method(CalculationMethod::Mwl)
//!     .with_asr_juristic(JuristicMethod::Hanafi)
//!     .with_time_format(TimeFormat::Time12);
//! assert_eq!(config.method, CalculationMethod::Mwl);
//! ```

use crate::method::{
    CalculationMethod, HighLatitudeRule, JuristicMethod, MethodParams, TimeFormat,
};
use crate::prayer::Prayer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text rendered in place of a time that cannot be computed.
pub const DEFAULT_INVALID_TIME: &str = "-----";

/// Manual minute adjustments, one per output time, applied last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrayerOffsets {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub sunset: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl PrayerOffsets {
    /// Offsets in [`Prayer::ALL`] order.
    #[inline]
    pub const fn as_minutes(&self) -> [i32; 7] {
        [
            self.fajr,
            self.sunrise,
            self.dhuhr,
            self.asr,
            self.sunset,
            self.maghrib,
            self.isha,
        ]
    }

    /// Offset for a single prayer.
    #[inline]
    pub const fn get(&self, prayer: Prayer) -> i32 {
        self.as_minutes()[prayer.index()]
    }
}

impl From<[i32; 7]> for PrayerOffsets {
    fn from(m: [i32; 7]) -> Self {
        Self {
            fajr: m[0],
            sunrise: m[1],
            dhuhr: m[2],
            asr: m[3],
            sunset: m[4],
            maghrib: m[5],
            isha: m[6],
        }
    }
}

/// Everything the prayer engine needs besides date and place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    pub method: CalculationMethod,
    /// Parameters used when `method` is [`CalculationMethod::Custom`].
    pub custom_params: MethodParams,
    pub asr_juristic: JuristicMethod,
    pub high_latitude_rule: HighLatitudeRule,
    pub time_format: TimeFormat,
    /// Minutes added to Dhuhr after solar noon.
    pub dhuhr_minutes: f64,
    pub offsets: PrayerOffsets,
    /// Fixed-point refinements of the initial guess.
    pub iterations: u32,
    pub invalid_time_text: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            method: CalculationMethod::Qmdb,
            custom_params: MethodParams::default(),
            asr_juristic: JuristicMethod::Shafii,
            high_latitude_rule: HighLatitudeRule::MidNight,
            time_format: TimeFormat::Time24,
            dhuhr_minutes: 0.0,
            offsets: PrayerOffsets::default(),
            iterations: 1,
            invalid_time_text: DEFAULT_INVALID_TIME.to_owned(),
        }
    }
}

impl CalculatorConfig {
    /// Parameters of the active method.
    pub fn method_params(&self) -> MethodParams {
        match self.method {
            CalculationMethod::Custom => self.custom_params,
            preset => preset.params(),
        }
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Store `params` and switch to [`CalculationMethod::Custom`].
    pub fn with_custom_method(mut self, params: MethodParams) -> Self {
        self.method = CalculationMethod::Custom;
        self.custom_params = params;
        self
    }

    pub fn with_asr_juristic(mut self, juristic: JuristicMethod) -> Self {
        self.asr_juristic = juristic;
        self
    }

    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    pub fn with_offsets(mut self, offsets: impl Into<PrayerOffsets>) -> Self {
        self.offsets = offsets.into();
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_invalid_time_text(mut self, text: impl Into<String>) -> Self {
        self.invalid_time_text = text.into();
        self
    }
}
