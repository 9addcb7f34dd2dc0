// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the Qibla bearing.

use crate::catch_panic;
use crate::error::QamarStatus;
use qamar::{is_qibla_aligned, Coordinates};

/// Qibla bearing, degrees clockwise from north, from a validated point.
/// NaN at the Kaaba itself.
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`.
#[no_mangle]
pub unsafe extern "C" fn qamar_qibla_direction(
    latitude: f64,
    longitude: f64,
    out: *mut f64,
) -> QamarStatus {
    catch_panic!(QamarStatus::Panic, {
        if out.is_null() {
            return QamarStatus::NullPointer;
        }
        match Coordinates::new(latitude, longitude) {
            Ok(c) => {
                unsafe { *out = c.qibla_direction() };
                QamarStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Whether `device_azimuth` (rounded to a whole degree) lies strictly
/// within `tolerance` of `qibla_direction`.
#[no_mangle]
pub extern "C" fn qamar_is_qibla_aligned(
    qibla_direction: f64,
    device_azimuth: f64,
    tolerance: f64,
) -> bool {
    is_qibla_aligned(qibla_direction, device_azimuth, tolerance)
}
