// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Qamar
//!
//! Pure computational engines for Islamic practice: daily prayer times from
//! solar geometry, the Qibla bearing, and tajweed annotation of Quranic text.
//! Nothing here performs I/O; platform concerns (time zones, sensors,
//! location) are injected through small traits.
//!
//! # Prayer times
//!
//! - [`PrayerTimesCalculator`] — solves the seven daily instants for a date
//!   and place under a [`CalculatorConfig`].
//! - [`CalculationMethod`] — the ten named conventions and their
//!   [`MethodParams`].
//! - [`PrayerTimesRaw`] / [`PrayerTimes`] — decimal hours and formatted strings.
//! - [`PrayerTimeApi`] — the calculator paired with a [`TimeZoneOffsetProvider`].
//!
//! ```
//! use qamar::{CalculationMethod, CalculatorConfig, Coordinates, DateComponents,
//!             PrayerTimesCalculator};
//!
//! let config = CalculatorConfig::default().with_method(CalculationMethod::Isna);
//! let calc = PrayerTimesCalculator::new(config);
//! let new_york = Coordinates::new(40.7128, -74.0060).unwrap();
//! let date = DateComponents::new(2025, 3, 20).unwrap();
//!
//! let raw = calc.compute_day(&date, &new_york, -4.0);
//! assert!(raw.fajr < raw.sunrise && raw.maghrib < raw.isha);
//! ```
//!
//! # Astronomy
//!
//! | Type | Role |
//! |------|------|
//! | [`JulianDate`] | continuous day count from a civil [`DateComponents`] |
//! | [`SunPosition`] | solar declination and equation of time |
//!
//! # Qibla
//!
//! [`qibla_direction_from`] gives the great-circle bearing to the Kaaba;
//! [`QiblaFinder`] combines a [`DeviceLocationSource`] and a
//! [`CompassSource`] into a [`QiblaAlignmentState`].
//!
//! # Tajweed
//!
//! [`annotate`] returns the [`TajweedSpan`]s of a verse; see [`tajweed`].
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for configuration and value types.
//!   Validated types deserialize through their constructors.

mod calendar;
mod config;
mod coordinates;
mod error;
mod format;
mod julian;
mod method;
mod prayer;
mod provider;
mod qibla;
mod solar;
pub mod tajweed;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{days_in_month, is_leap_year, DateComponents, MAX_YEAR, MIN_YEAR};
pub use config::{CalculatorConfig, PrayerOffsets, DEFAULT_INVALID_TIME};
pub use coordinates::Coordinates;
pub use error::{QamarError, Result};
pub use format::format_time;
pub use julian::JulianDate;
pub use method::{
    CalculationMethod, HighLatitudeRule, JuristicMethod, MethodParams, TimeFormat,
    TwilightParameter, UnknownMethod,
};
pub use prayer::{
    compute_day_times, format_times, Prayer, PrayerTimes, PrayerTimesCalculator, PrayerTimesRaw,
    ISHA_FALLBACK_ANGLE, MAGHRIB_FALLBACK_ANGLE, SUNRISE_ANGLE,
};
pub use provider::{FixedOffsetProvider, PrayerTimeApi, SystemTimeZone, TimeZoneOffsetProvider};
pub use qibla::{
    is_qibla_aligned, qibla_direction_from, CompassSource, DeviceLocationSource,
    QiblaAlignmentState, QiblaFinder, QiblaInfo, DEFAULT_ALIGNMENT_TOLERANCE, KAABA_LATITUDE,
    KAABA_LONGITUDE,
};
pub use solar::SunPosition;
pub use tajweed::{annotate, TajweedRule, TajweedSpan};
