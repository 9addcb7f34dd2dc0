// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for tajweed annotation.

use crate::catch_panic;
use crate::error::QamarStatus;
use qamar::{annotate, TajweedRule, TajweedSpan};
use std::ffi::CStr;
use std::os::raw::c_char;

/// Rule codes, in the order the library declares them.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QamarTajweedRule {
    Mad = 0,
    Ghunna = 1,
    Qalqala = 2,
    Iqlab = 3,
    Idgham = 4,
    IdghamWithoutGhunna = 5,
    Ikhfa = 6,
    HamzatWasl = 7,
    MadHey = 8,
    OneMad = 9,
    Maddah = 10,
}

impl From<TajweedRule> for QamarTajweedRule {
    fn from(rule: TajweedRule) -> Self {
        match rule {
            TajweedRule::Mad => Self::Mad,
            TajweedRule::Ghunna => Self::Ghunna,
            TajweedRule::Qalqala => Self::Qalqala,
            TajweedRule::Iqlab => Self::Iqlab,
            TajweedRule::Idgham => Self::Idgham,
            TajweedRule::IdghamWithoutGhunna => Self::IdghamWithoutGhunna,
            TajweedRule::Ikhfa => Self::Ikhfa,
            TajweedRule::HamzatWasl => Self::HamzatWasl,
            TajweedRule::MadHey => Self::MadHey,
            TajweedRule::OneMad => Self::OneMad,
            TajweedRule::Maddah => Self::Maddah,
        }
    }
}

/// Half-open span `[start, end)` in Unicode scalar values.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QamarTajweedSpan {
    pub start: usize,
    pub end: usize,
    pub rule: QamarTajweedRule,
}

impl From<TajweedSpan> for QamarTajweedSpan {
    fn from(s: TajweedSpan) -> Self {
        Self {
            start: s.start,
            end: s.end,
            rule: s.rule.into(),
        }
    }
}

/// Annotate a NUL-terminated UTF-8 verse.
///
/// Writes up to `capacity` spans into `out` and the total span count into
/// `out_len`. Returns `BufferTooSmall` when the count exceeds `capacity`;
/// call again with a buffer of `*out_len` spans. `out` may be null when
/// `capacity` is 0.
///
/// # Safety
/// `verse` must be a valid NUL-terminated string; `out` must be valid for
/// writes of `capacity` spans; `out_len` must be a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn qamar_tajweed_spans(
    verse: *const c_char,
    out: *mut QamarTajweedSpan,
    capacity: usize,
    out_len: *mut usize,
) -> QamarStatus {
    catch_panic!(QamarStatus::Panic, {
        if verse.is_null() || out_len.is_null() || (out.is_null() && capacity > 0) {
            return QamarStatus::NullPointer;
        }
        let Ok(text) = unsafe { CStr::from_ptr(verse) }.to_str() else {
            return QamarStatus::InvalidArgument;
        };
        let spans = annotate(text);
        unsafe { *out_len = spans.len() };
        if spans.len() > capacity {
            return QamarStatus::BufferTooSmall;
        }
        for (i, span) in spans.into_iter().enumerate() {
            unsafe { *out.add(i) = span.into() };
        }
        QamarStatus::Ok
    })
}
