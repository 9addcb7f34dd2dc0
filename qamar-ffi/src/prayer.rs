// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the prayer-time engine and calendar helpers.

use crate::catch_panic;
use crate::error::QamarStatus;
use qamar::{
    compute_day_times, days_in_month, format_time, CalculationMethod, CalculatorConfig,
    Coordinates, DateComponents, HighLatitudeRule, JuristicMethod, PrayerTimesRaw, TimeFormat,
    DEFAULT_INVALID_TIME,
};
use std::os::raw::c_char;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian calendar date.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct QamarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Calculation settings. Enum fields take the codes documented on each
/// field; unknown codes yield `InvalidArgument`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct QamarCalculationParams {
    /// 0 QMDB, 1 Karachi, 2 ISNA, 3 MWL, 4 Makkah, 5 Egypt, 6 Tehran,
    /// 7 Jafari, 8 Diyanet.
    pub method: i32,
    /// 0 Shafii, 1 Hanafi.
    pub asr_juristic: i32,
    /// 0 none, 1 mid-night, 2 one-seventh, 3 angle-based.
    pub high_latitude_rule: i32,
    pub dhuhr_minutes: f64,
    /// Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha.
    pub offsets: [i32; 7],
    pub iterations: u32,
}

/// Seven decimal-hour results in zone time.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QamarPrayerTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl From<PrayerTimesRaw> for QamarPrayerTimes {
    fn from(t: PrayerTimesRaw) -> Self {
        Self {
            fajr: t.fajr,
            sunrise: t.sunrise,
            dhuhr: t.dhuhr,
            asr: t.asr,
            sunset: t.sunset,
            maghrib: t.maghrib,
            isha: t.isha,
        }
    }
}

impl QamarCalculationParams {
    fn into_config(self) -> Option<CalculatorConfig> {
        let method = match self.method {
            code @ 0..=8 => CalculationMethod::ALL[code as usize],
            _ => return None,
        };
        let juristic = match self.asr_juristic {
            0 => JuristicMethod::Shafii,
            1 => JuristicMethod::Hanafi,
            _ => return None,
        };
        let rule = match self.high_latitude_rule {
            0 => HighLatitudeRule::None,
            1 => HighLatitudeRule::MidNight,
            2 => HighLatitudeRule::OneSeventh,
            3 => HighLatitudeRule::AngleBased,
            _ => return None,
        };
        Some(
            CalculatorConfig::default()
                .with_method(method)
                .with_asr_juristic(juristic)
                .with_high_latitude_rule(rule)
                .with_dhuhr_minutes(self.dhuhr_minutes)
                .with_offsets(self.offsets)
                .with_iterations(self.iterations),
        )
    }
}

fn time_format(code: i32) -> Option<TimeFormat> {
    match code {
        0 => Some(TimeFormat::Time24),
        1 => Some(TimeFormat::Time12),
        2 => Some(TimeFormat::Time12NoSuffix),
        3 => Some(TimeFormat::Floating),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Prayer times
// ═══════════════════════════════════════════════════════════════════════════

/// Compute the raw prayer times of one day.
///
/// `params` may be null, in which case the library defaults apply.
///
/// # Safety
/// `params` must be null or point to a valid `QamarCalculationParams`;
/// `out` must be a valid, writable pointer to `QamarPrayerTimes`.
#[no_mangle]
pub unsafe extern "C" fn qamar_prayer_times_raw(
    date: QamarDate,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    params: *const QamarCalculationParams,
    out: *mut QamarPrayerTimes,
) -> QamarStatus {
    catch_panic!(QamarStatus::Panic, {
        if out.is_null() {
            return QamarStatus::NullPointer;
        }
        let config = if params.is_null() {
            CalculatorConfig::default()
        } else {
            match unsafe { *params }.into_config() {
                Some(config) => config,
                None => return QamarStatus::InvalidArgument,
            }
        };
        let date = match DateComponents::new(date.year, date.month, date.day) {
            Ok(date) => date,
            Err(err) => return err.into(),
        };
        let coordinates = match Coordinates::new(latitude, longitude) {
            Ok(c) => c,
            Err(err) => return err.into(),
        };
        let times = compute_day_times(&date, &coordinates, utc_offset_hours, &config);
        unsafe { *out = times.into() };
        QamarStatus::Ok
    })
}

/// Format a decimal hour into `buf` as a NUL-terminated string.
///
/// `format`: 0 `HH:MM`, 1 `HH:MM AM/PM`, 2 12-hour without suffix,
/// 3 raw decimal. Non-finite times render as `-----`.
///
/// # Safety
/// `buf` must be valid for writes of `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn qamar_format_time(
    time: f64,
    format: i32,
    buf: *mut c_char,
    buf_len: usize,
) -> QamarStatus {
    catch_panic!(QamarStatus::Panic, {
        if buf.is_null() {
            return QamarStatus::NullPointer;
        }
        let Some(format) = time_format(format) else {
            return QamarStatus::InvalidArgument;
        };
        let text = format_time(time, format, DEFAULT_INVALID_TIME);
        let bytes = text.as_bytes();
        if bytes.len() >= buf_len {
            return QamarStatus::BufferTooSmall;
        }
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), bytes.len());
            *buf.add(bytes.len()) = 0;
        }
        QamarStatus::Ok
    })
}

/// Days in `month` of `year` (Gregorian), or 0 for an invalid month.
#[no_mangle]
pub extern "C" fn qamar_days_in_month(year: i32, month: u32) -> u32 {
    days_in_month(year, month)
}
