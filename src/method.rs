// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation conventions.
//!
//! A convention fixes the solar depression of Fajr and how Maghrib and Isha
//! are derived: either from a depression angle, or as a fixed number of
//! minutes after the preceding event.
//!
//! | Method | Fajr | Maghrib | Isha |
//! |--------|------|---------|------|
//! | [`Qmdb`](CalculationMethod::Qmdb) | 15° | 0° | 15° |
//! | [`Karachi`](CalculationMethod::Karachi) | 18° | 0 min | 18° |
//! | [`Isna`](CalculationMethod::Isna) | 15° | 0 min | 15° |
//! | [`Mwl`](CalculationMethod::Mwl) | 18° | 0 min | 17° |
//! | [`Makkah`](CalculationMethod::Makkah) | 18.5° | 0 min | 90 min |
//! | [`Egypt`](CalculationMethod::Egypt) | 19.5° | 0 min | 17.5° |
//! | [`Tehran`](CalculationMethod::Tehran) | 17.7° | 4.5° | 14° |
//! | [`Jafari`](CalculationMethod::Jafari) | 16° | 4° | 14° |
//! | [`Diyanet`](CalculationMethod::Diyanet) | 18° | 0° | 17° |
//! | [`Custom`](CalculationMethod::Custom) | 18° | 0 min | 17° |

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How Maghrib or Isha is derived.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TwilightParameter {
    /// Solar depression angle, in degrees.
    Angle(f64),
    /// Minutes after the preceding event (sunset for Maghrib, Maghrib for Isha).
    Minutes(f64),
}

impl TwilightParameter {
    /// The raw numeric parameter, whatever its kind.
    #[inline]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Angle(v) | Self::Minutes(v) => v,
        }
    }

    /// The depression angle, if this parameter is angle-based.
    #[inline]
    pub const fn angle(&self) -> Option<f64> {
        match *self {
            Self::Angle(v) => Some(v),
            Self::Minutes(_) => None,
        }
    }

    /// The minute offset, if this parameter is minute-based.
    #[inline]
    pub const fn minutes(&self) -> Option<f64> {
        match *self {
            Self::Minutes(v) => Some(v),
            Self::Angle(_) => None,
        }
    }
}

/// The defining numbers of one calculation convention.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodParams {
    /// Solar depression of Fajr, in degrees.
    pub fajr_angle: f64,
    pub maghrib: TwilightParameter,
    pub isha: TwilightParameter,
}

impl MethodParams {
    pub const fn new(fajr_angle: f64, maghrib: TwilightParameter, isha: TwilightParameter) -> Self {
        Self {
            fajr_angle,
            maghrib,
            isha,
        }
    }
}

impl Default for MethodParams {
    fn default() -> Self {
        CalculationMethod::Custom.params()
    }
}

/// Named calculation conventions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalculationMethod {
    /// QMDB default preset.
    #[default]
    Qmdb,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Islamic Society of North America.
    Isna,
    /// Muslim World League.
    Mwl,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Ithna Ashari (Shia Jafari).
    Jafari,
    /// Presidency of Religious Affairs, Turkey.
    Diyanet,
    /// Caller-supplied parameters.
    Custom,
}

impl CalculationMethod {
    /// Every convention, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Qmdb,
        Self::Karachi,
        Self::Isna,
        Self::Mwl,
        Self::Makkah,
        Self::Egypt,
        Self::Tehran,
        Self::Jafari,
        Self::Diyanet,
        Self::Custom,
    ];

    /// Preset parameters. For [`Custom`](Self::Custom) these are the
    /// defaults used until the caller supplies its own.
    pub const fn params(&self) -> MethodParams {
        use TwilightParameter::{Angle, Minutes};
        match self {
            Self::Qmdb => MethodParams::new(15.0, Angle(0.0), Angle(15.0)),
            Self::Karachi => MethodParams::new(18.0, Minutes(0.0), Angle(18.0)),
            Self::Isna => MethodParams::new(15.0, Minutes(0.0), Angle(15.0)),
            Self::Mwl => MethodParams::new(18.0, Minutes(0.0), Angle(17.0)),
            Self::Makkah => MethodParams::new(18.5, Minutes(0.0), Minutes(90.0)),
            Self::Egypt => MethodParams::new(19.5, Minutes(0.0), Angle(17.5)),
            Self::Tehran => MethodParams::new(17.7, Angle(4.5), Angle(14.0)),
            Self::Jafari => MethodParams::new(16.0, Angle(4.0), Angle(14.0)),
            Self::Diyanet => MethodParams::new(18.0, Angle(0.0), Angle(17.0)),
            Self::Custom => MethodParams::new(18.0, Minutes(0.0), Angle(17.0)),
        }
    }

    /// Short name accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Qmdb => "qmdb",
            Self::Karachi => "karachi",
            Self::Isna => "isna",
            Self::Mwl => "mwl",
            Self::Makkah => "makkah",
            Self::Egypt => "egypt",
            Self::Tehran => "tehran",
            Self::Jafari => "jafari",
            Self::Diyanet => "diyanet",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Qmdb => "QMDB",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Isna => "Islamic Society of North America",
            Self::Mwl => "Muslim World League",
            Self::Makkah => "Umm al-Qura, Makkah",
            Self::Egypt => "Egyptian General Authority of Survey",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
            Self::Jafari => "Ithna Ashari (Jafari)",
            Self::Diyanet => "Diyanet, Turkey",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculation method `{0}`")]
pub struct UnknownMethod(pub String);

impl FromStr for CalculationMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

/// Juristic school for the Asr shadow ratio.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JuristicMethod {
    /// Shadow equals object length (Shafii, Maliki, Hanbali).
    #[default]
    Shafii,
    /// Shadow equals twice the object length.
    Hanafi,
}

impl JuristicMethod {
    /// Shadow-length multiplier in the Asr formula.
    #[inline]
    pub const fn shadow_factor(&self) -> f64 {
        match self {
            Self::Shafii => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Correction applied where twilight angles are unreachable or extreme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HighLatitudeRule {
    None,
    /// Bound Fajr/Isha by half of the night.
    #[default]
    MidNight,
    /// Bound Fajr/Isha by a seventh of the night.
    OneSeventh,
    /// Bound Fajr/Isha by `angle / 60` of the night.
    AngleBased,
}

impl HighLatitudeRule {
    /// Fraction of the night allotted to a twilight of depression `angle`.
    #[inline]
    pub fn night_portion(&self, angle: f64) -> f64 {
        match self {
            Self::AngleBased => angle / 60.0,
            Self::MidNight => 0.5,
            Self::OneSeventh => 1.0 / 7.0,
            Self::None => 0.0,
        }
    }
}

/// Output format of formatted prayer times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeFormat {
    /// `HH:MM`, 24-hour clock.
    #[default]
    Time24,
    /// `HH:MM AM`/`HH:MM PM`.
    Time12,
    /// `HH:MM`, 12-hour clock without suffix.
    Time12NoSuffix,
    /// The raw decimal hour.
    Floating,
}
