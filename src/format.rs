// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rendering decimal hours as clock strings.

use crate::method::TimeFormat;
use crate::solar::fix_hour;

/// Render a decimal hour in the requested format.
///
/// Clock formats add half a minute before truncating, so `5.4999` reads
/// `05:30`. Non-finite input renders as `placeholder`.
///
/// ```
/// use qamar::{format_time, TimeFormat};
///
/// assert_eq!(format_time(5.5, TimeFormat::Time24, "-----"), "05:30");
/// assert_eq!(format_time(13.25, TimeFormat::Time12, "-----"), "01:15 PM");
/// assert_eq!(format_time(f64::NAN, TimeFormat::Time24, "-----"), "-----");
/// ```
pub fn format_time(time: f64, format: TimeFormat, placeholder: &str) -> String {
    if !time.is_finite() {
        return placeholder.to_owned();
    }
    match format {
        TimeFormat::Floating => time.to_string(),
        TimeFormat::Time24 => {
            let (hours, minutes) = clock(time);
            format!("{hours:02}:{minutes:02}")
        }
        TimeFormat::Time12 | TimeFormat::Time12NoSuffix => {
            let (hours, minutes) = clock(time);
            let suffix = if hours >= 12 { "PM" } else { "AM" };
            let hours = (hours + 11) % 12 + 1;
            if format == TimeFormat::Time12 {
                format!("{hours:02}:{minutes:02} {suffix}")
            } else {
                format!("{hours:02}:{minutes:02}")
            }
        }
    }
}

/// Whole hours and minutes of a rounded, wrapped decimal hour.
fn clock(time: f64) -> (u32, u32) {
    let t = fix_hour(time + 0.5 / 60.0);
    let hours = t.floor();
    let minutes = ((t - hours) * 60.0).floor().min(59.0);
    // `fix_hour` can land on 24.0 when the input is a hair below a multiple of 24.
    let hours = if hours >= 24.0 { 0 } else { hours as u32 };
    (hours, minutes as u32)
}
