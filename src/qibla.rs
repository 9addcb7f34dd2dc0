// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Qibla bearing and compass alignment.
//!
//! The bearing is the initial great-circle course from a point to the Kaaba,
//! clockwise from true north in `[0, 360)`. Location and heading come from
//! injected [`DeviceLocationSource`] and [`CompassSource`] implementations.

use crate::coordinates::Coordinates;
use crate::solar::{darctan2, dcos, dsin, dtan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latitude of the Kaaba, degrees north.
pub const KAABA_LATITUDE: f64 = 21.422517;

/// Longitude of the Kaaba, degrees east.
pub const KAABA_LONGITUDE: f64 = 39.826166;

/// Default half-width of the alignment window, in degrees.
pub const DEFAULT_ALIGNMENT_TOLERANCE: f64 = 14.0;

/// Qibla bearing from a point, in degrees clockwise from north.
///
/// The bearing is undefined at the Kaaba itself; there this returns NaN.
///
/// ```
/// let bearing = qamar::qibla_direction_from(-0.1278, 51.5074);
/// assert!((bearing - 118.99).abs() < 0.05);
/// ```
pub fn qibla_direction_from(longitude: f64, latitude: f64) -> f64 {
    if latitude == KAABA_LATITUDE && longitude == KAABA_LONGITUDE {
        return f64::NAN;
    }
    let a = KAABA_LONGITUDE - longitude;
    let b = 90.0 - latitude;
    let c = 90.0 - KAABA_LATITUDE;
    // cot(c) = tan(90° - c)
    let s = darctan2(dsin(a), dsin(b) * dtan(90.0 - c) - dcos(b) * dcos(a));
    if s < 0.0 {
        s + 360.0
    } else {
        s
    }
}

/// Whether a compass reading points at the Qibla.
///
/// The reading is rounded to the nearest whole degree (ties to even) and
/// must lie strictly within `tolerance` of the bearing. No wrap-around is
/// applied across north.
pub fn is_qibla_aligned(qibla_direction: f64, device_azimuth: f64, tolerance: f64) -> bool {
    (device_azimuth.round_ties_even() - qibla_direction).abs() < tolerance
}

impl Coordinates {
    /// Qibla bearing from this point. NaN at the Kaaba.
    pub fn qibla_direction(&self) -> f64 {
        qibla_direction_from(self.longitude(), self.latitude())
    }
}

/// A point and its Qibla bearing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QiblaInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub direction: f64,
}

impl From<Coordinates> for QiblaInfo {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude(),
            longitude: c.longitude(),
            direction: c.qibla_direction(),
        }
    }
}

/// Bearing, corrected heading and the verdict for one compass reading.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QiblaAlignmentState {
    pub direction: f64,
    pub current_azimuth: f64,
    pub is_aligned: bool,
}

// ── Device capabilities ───────────────────────────────────────────────────

/// Supplies the device position, if known.
pub trait DeviceLocationSource {
    fn current_location(&self) -> Option<Coordinates>;
}

/// Supplies the current compass heading in degrees, if available.
pub trait CompassSource {
    fn azimuth(&self) -> Option<f64>;
}

impl DeviceLocationSource for Coordinates {
    fn current_location(&self) -> Option<Coordinates> {
        Some(*self)
    }
}

impl DeviceLocationSource for Option<Coordinates> {
    fn current_location(&self) -> Option<Coordinates> {
        *self
    }
}

impl CompassSource for f64 {
    fn azimuth(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

/// Combines a location and a compass into alignment readings.
#[derive(Debug, Clone)]
pub struct QiblaFinder<L, C> {
    location: L,
    compass: C,
    azimuth_fix: f64,
    tolerance: f64,
}

impl<L: DeviceLocationSource, C: CompassSource> QiblaFinder<L, C> {
    pub fn new(location: L, compass: C) -> Self {
        Self {
            location,
            compass,
            azimuth_fix: 0.0,
            tolerance: DEFAULT_ALIGNMENT_TOLERANCE,
        }
    }

    /// Degrees added to every compass reading (device-specific mounting error).
    pub fn with_azimuth_fix(mut self, fix: f64) -> Self {
        self.azimuth_fix = fix;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn azimuth_fix(&self) -> f64 {
        self.azimuth_fix
    }

    /// Bearing from the current location.
    pub fn qibla_info(&self) -> Option<QiblaInfo> {
        self.location.current_location().map(QiblaInfo::from)
    }

    /// Alignment of the corrected compass heading. `None` while either the
    /// location or the heading is unavailable.
    pub fn alignment(&self) -> Option<QiblaAlignmentState> {
        let info = self.qibla_info()?;
        let azimuth = self.compass.azimuth()? + self.azimuth_fix;
        Some(QiblaAlignmentState {
            direction: info.direction,
            current_azimuth: azimuth,
            is_aligned: is_qibla_aligned(info.direction, azimuth, self.tolerance),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearings_of_known_cities() {
        assert!((qibla_direction_from(-0.1278, 51.5074) - 118.99).abs() < 0.05);
        assert!((qibla_direction_from(-74.0060, 40.7128) - 58.48).abs() < 0.05);
        assert!((qibla_direction_from(106.8456, -6.2088) - 295.15).abs() < 0.05);
    }

    #[test]
    fn bearing_is_in_turn() {
        let mut lat = -89.0;
        while lat < 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let b = qibla_direction_from(lon, lat);
                assert!((0.0..360.0).contains(&b), "{lat} {lon} -> {b}");
                lon += 7.3;
            }
            lat += 4.9;
        }
    }

    #[test]
    fn due_north_and_south() {
        // Same meridian, south of the Kaaba: face north.
        let b = qibla_direction_from(KAABA_LONGITUDE, 0.0);
        assert!(b.abs() < 1e-9 || (b - 360.0).abs() < 1e-9);
        // Same meridian, north of the Kaaba: face south.
        assert!((qibla_direction_from(KAABA_LONGITUDE, 45.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn undefined_at_the_kaaba() {
        assert!(qibla_direction_from(KAABA_LONGITUDE, KAABA_LATITUDE).is_nan());
    }

    #[test]
    fn alignment_tolerance_is_strict() {
        assert!(is_qibla_aligned(100.0, 112.4, DEFAULT_ALIGNMENT_TOLERANCE));
        assert!(!is_qibla_aligned(100.0, 114.4, DEFAULT_ALIGNMENT_TOLERANCE));
        assert!(is_qibla_aligned(100.0, 86.6, DEFAULT_ALIGNMENT_TOLERANCE));
        assert!(!is_qibla_aligned(100.0, 86.4, DEFAULT_ALIGNMENT_TOLERANCE));
    }

    #[test]
    fn finder_applies_azimuth_fix() {
        let london = Coordinates::new(51.5074, -0.1278).unwrap();
        let finder = QiblaFinder::new(london, 100.0).with_azimuth_fix(19.0);
        let state = finder.alignment().unwrap();
        assert_eq!(state.current_azimuth, 119.0);
        assert!(state.is_aligned);

        let off = QiblaFinder::new(london, 100.0).with_tolerance(5.0);
        assert!(!off.alignment().unwrap().is_aligned);
    }

    #[test]
    fn finder_without_inputs() {
        let nowhere: Option<Coordinates> = None;
        assert!(QiblaFinder::new(nowhere, 10.0).alignment().is_none());

        let london = Coordinates::new(51.5074, -0.1278).unwrap();
        assert!(QiblaFinder::new(london, f64::NAN).alignment().is_none());
        assert!(QiblaFinder::new(london, f64::NAN).qibla_info().is_some());
    }
}
