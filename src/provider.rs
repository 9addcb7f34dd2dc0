// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-zone capability and the high-level prayer-time facade.
//!
//! The engine never looks up a zone itself. Callers inject a
//! [`TimeZoneOffsetProvider`]; a closure is enough:
//!
//! ```
//! use qamar::{DateComponents, PrayerTimeApi};
//!
//! let api = PrayerTimeApi::new(|_lat: f64, _lon: f64| 3.0);
//! let date = DateComponents::new(2025, 6, 15).unwrap();
//! let times = api.prayer_times(&date, 21.4225, 39.8262).unwrap();
//! assert_eq!(times.date, Some(date));
//! ```

use crate::calendar::DateComponents;
use crate::config::CalculatorConfig;
use crate::coordinates::Coordinates;
use crate::error::Result;
use crate::prayer::{PrayerTimes, PrayerTimesCalculator, PrayerTimesRaw};
use chrono::{FixedOffset, Local, Offset};

/// Resolves the UTC offset, in hours, of a location.
pub trait TimeZoneOffsetProvider {
    fn utc_offset_hours(&self, latitude: f64, longitude: f64) -> f64;
}

impl<F> TimeZoneOffsetProvider for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn utc_offset_hours(&self, latitude: f64, longitude: f64) -> f64 {
        self(latitude, longitude)
    }
}

/// The same offset everywhere.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedOffsetProvider(pub FixedOffset);

impl FixedOffsetProvider {
    /// Offset of whole seconds east of UTC; `None` outside ±24 h.
    pub fn east_seconds(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self)
    }
}

impl TimeZoneOffsetProvider for FixedOffsetProvider {
    fn utc_offset_hours(&self, _latitude: f64, _longitude: f64) -> f64 {
        f64::from(self.0.local_minus_utc()) / 3600.0
    }
}

/// The host's current local offset, ignoring the location.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SystemTimeZone;

impl TimeZoneOffsetProvider for SystemTimeZone {
    fn utc_offset_hours(&self, _latitude: f64, _longitude: f64) -> f64 {
        let offset = Local::now().offset().fix();
        f64::from(offset.local_minus_utc()) / 3600.0
    }
}

/// A calculator paired with a zone provider.
///
/// Coordinates come in as plain degrees and are validated on every call.
#[derive(Debug, Clone)]
pub struct PrayerTimeApi<P> {
    calculator: PrayerTimesCalculator,
    provider: P,
}

impl<P: TimeZoneOffsetProvider> PrayerTimeApi<P> {
    /// Facade with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_calculator(PrayerTimesCalculator::default(), provider)
    }

    pub fn with_calculator(calculator: PrayerTimesCalculator, provider: P) -> Self {
        Self {
            calculator,
            provider,
        }
    }

    /// A new facade whose configuration is `f` applied to the current one.
    ///
    /// ```
    /// use qamar::{CalculationMethod, PrayerTimeApi, SystemTimeZone};
    ///
    /// let api = PrayerTimeApi::new(SystemTimeZone)
    ///     .with_config(|c| c.with_method(CalculationMethod::Egypt));
    /// assert_eq!(api.config().method, CalculationMethod::Egypt);
    /// ```
    pub fn with_config<F>(self, f: F) -> Self
    where
        F: FnOnce(CalculatorConfig) -> CalculatorConfig,
    {
        let config = f(self.calculator.config().clone());
        Self {
            calculator: PrayerTimesCalculator::new(config),
            provider: self.provider,
        }
    }

    #[inline]
    pub fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn resolve(&self, latitude: f64, longitude: f64) -> Result<(Coordinates, f64)> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let offset = self.provider.utc_offset_hours(latitude, longitude);
        Ok((coordinates, offset))
    }

    pub fn prayer_times(
        &self,
        date: &DateComponents,
        latitude: f64,
        longitude: f64,
    ) -> Result<PrayerTimes> {
        let (coordinates, offset) = self.resolve(latitude, longitude)?;
        Ok(self.calculator.prayer_times(date, &coordinates, offset))
    }

    pub fn prayer_times_raw(
        &self,
        date: &DateComponents,
        latitude: f64,
        longitude: f64,
    ) -> Result<PrayerTimesRaw> {
        let (coordinates, offset) = self.resolve(latitude, longitude)?;
        Ok(self.calculator.compute_day(date, &coordinates, offset))
    }

    pub fn prayer_times_for_month(
        &self,
        year: i32,
        month: u32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<PrayerTimes>> {
        let (coordinates, offset) = self.resolve(latitude, longitude)?;
        self.calculator
            .prayer_times_for_month(year, month, &coordinates, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QamarError;
    use crate::method::CalculationMethod;

    #[test]
    fn closure_provider() {
        let by_longitude = |_lat: f64, lon: f64| (lon / 15.0).round();
        assert_eq!(by_longitude.utc_offset_hours(0.0, 44.0), 3.0);
        assert_eq!(by_longitude.utc_offset_hours(0.0, -74.0), -5.0);
    }

    #[test]
    fn fixed_offset_provider() {
        let ist = FixedOffsetProvider::east_seconds(5 * 3600 + 1800).unwrap();
        assert_eq!(ist.utc_offset_hours(0.0, 0.0), 5.5);
        assert!(FixedOffsetProvider::east_seconds(25 * 3600).is_none());
    }

    #[test]
    fn system_zone_is_within_a_day() {
        let hours = SystemTimeZone.utc_offset_hours(0.0, 0.0);
        assert!((-24.0..=24.0).contains(&hours));
    }

    #[test]
    fn facade_matches_calculator() {
        let api = PrayerTimeApi::new(|_: f64, _: f64| 3.0)
            .with_config(|c| c.with_method(CalculationMethod::Makkah));
        let date = DateComponents::new(2025, 6, 15).unwrap();
        let coords = Coordinates::new(21.4225, 39.8262).unwrap();

        let calc = PrayerTimesCalculator::new(
            CalculatorConfig::default().with_method(CalculationMethod::Makkah),
        );
        assert_eq!(
            api.prayer_times_raw(&date, 21.4225, 39.8262).unwrap(),
            calc.compute_day(&date, &coords, 3.0)
        );
        assert_eq!(
            api.prayer_times(&date, 21.4225, 39.8262).unwrap(),
            calc.prayer_times(&date, &coords, 3.0)
        );
    }

    #[test]
    fn facade_validates_input() {
        let api = PrayerTimeApi::new(SystemTimeZone);
        let date = DateComponents::new(2025, 6, 15).unwrap();
        assert_eq!(
            api.prayer_times(&date, 95.0, 0.0),
            Err(QamarError::LatitudeOutOfRange(95.0))
        );
        assert!(api.prayer_times_for_month(2025, 0, 10.0, 10.0).is_err());
        assert_eq!(
            api.prayer_times_for_month(2024, 2, 10.0, 10.0).unwrap().len(),
            29
        );
    }
}
