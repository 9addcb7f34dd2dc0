// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-precision solar position
//!
//! Apparent solar declination and the equation of time from the simplified
//! model published by the U.S. Naval Observatory (*Approximate Solar
//! Coordinates*), accurate to about one arcminute between 1950 and 2050.
//!
//! All angles are degrees in and degrees out. Every derived angle is wrapped
//! into `[0, 360)` and every derived hour into `[0, 24)` so that quantities
//! crossing midnight or a full turn keep a consistent sign.
//!
//! ## References
//! * USNO, *Approximate Solar Coordinates* (2014)
//! * Meeus, *Astronomical Algorithms* (2nd ed. 1998), ch. 25

use crate::julian::JulianDate;
use qtty::{Degree, Degrees, Hours, Radians};

/// Wrap an angle into `[0, 360)` degrees.
#[inline]
pub(crate) fn fix_angle(angle: f64) -> f64 {
    let a = angle - 360.0 * (angle / 360.0).floor();
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Wrap a decimal hour into `[0, 24)`.
#[inline]
pub(crate) fn fix_hour(hour: f64) -> f64 {
    let h = hour - 24.0 * (hour / 24.0).floor();
    if h < 0.0 {
        h + 24.0
    } else {
        h
    }
}

// ── Degree trigonometry ───────────────────────────────────────────────────

#[inline]
pub(crate) fn dsin(d: f64) -> f64 {
    Degrees::new(d).sin()
}

#[inline]
pub(crate) fn dcos(d: f64) -> f64 {
    Degrees::new(d).cos()
}

#[inline]
pub(crate) fn dtan(d: f64) -> f64 {
    Degrees::new(d).tan()
}

#[inline]
fn to_degrees(radians: f64) -> f64 {
    Radians::new(radians).to::<Degree>().value()
}

#[inline]
pub(crate) fn darcsin(x: f64) -> f64 {
    to_degrees(x.asin())
}

#[inline]
pub(crate) fn darccos(x: f64) -> f64 {
    to_degrees(x.acos())
}

#[inline]
pub(crate) fn darctan2(y: f64, x: f64) -> f64 {
    to_degrees(y.atan2(x))
}

/// Inverse cotangent, `atan2(1, x)`, in degrees.
#[inline]
pub(crate) fn darccot(x: f64) -> f64 {
    to_degrees(1.0_f64.atan2(x))
}

// ── Sun position ──────────────────────────────────────────────────────────

/// Declination of the Sun and the equation of time at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SunPosition {
    /// Apparent declination.
    pub declination: Degrees,
    /// Apparent minus mean solar time.
    ///
    /// Mean longitude and right ascension are wrapped independently, so for
    /// a few days around the March equinox this carries a whole-day offset.
    /// Consumers wrap it again (see [`SunPosition::solar_noon`]).
    pub equation_of_time: Hours,
}

impl SunPosition {
    /// Evaluate the solar model at `jd`.
    ///
    /// ```
    /// use qamar::{JulianDate, SunPosition};
    ///
    /// let sun = SunPosition::at(JulianDate::J2000);
    /// assert!((sun.declination.value() + 23.03).abs() < 0.05);
    /// ```
    pub fn at(jd: JulianDate) -> Self {
        let d = jd.days_since_j2000().value();

        // Mean anomaly and mean longitude
        let g = fix_angle(357.529 + 0.985_600_28 * d);
        let q = fix_angle(280.459 + 0.985_647_36 * d);
        // Geocentric apparent ecliptic longitude
        let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
        // Mean obliquity of the ecliptic
        let e = 23.439 - 0.000_000_36 * d;

        let declination = darcsin(dsin(e) * dsin(l));
        let right_ascension = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

        Self {
            declination: Degrees::new(declination),
            equation_of_time: Hours::new(q / 15.0 - right_ascension),
        }
    }

    /// Local apparent noon in decimal solar hours, `12 − EqT` wrapped.
    #[inline]
    pub fn solar_noon(&self) -> f64 {
        fix_hour(12.0 - self.equation_of_time.value())
    }

    /// Hour angle, in hours, at which the Sun is `angle` degrees below the
    /// horizon (negative angles are elevations).
    ///
    /// The cosine is clamped into `[-1, 1]`, so latitudes where the Sun never
    /// reaches the requested depression yield the nearest reachable instant
    /// (midnight or noon) instead of NaN.
    pub fn hour_angle(&self, angle: f64, latitude: f64) -> f64 {
        let decl = self.declination.value();
        let numerator = -dsin(angle) - dsin(decl) * dsin(latitude);
        let denominator = dcos(decl) * dcos(latitude);
        let cos_h = (numerator / denominator).clamp(-1.0, 1.0);
        darccos(cos_h) / 15.0
    }
}
