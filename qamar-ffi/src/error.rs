// SPDX-License-Identifier: AGPL-3.0-or-later

use qamar::QamarError;

/// Status codes returned by qamar-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QamarStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// Latitude or longitude out of range.
    InvalidCoordinates = 2,
    /// Year, month or day out of range.
    InvalidDate = 3,
    /// An enum code or string argument was not recognised.
    InvalidArgument = 4,
    /// The caller's buffer cannot hold the result.
    BufferTooSmall = 5,
    /// The library panicked; the output is unspecified.
    Panic = 6,
}

impl From<&QamarError> for QamarStatus {
    fn from(err: &QamarError) -> Self {
        match err {
            QamarError::LatitudeOutOfRange(_) | QamarError::LongitudeOutOfRange(_) => {
                Self::InvalidCoordinates
            }
            QamarError::YearOutOfRange(_)
            | QamarError::MonthOutOfRange(_)
            | QamarError::DayOutOfRange { .. } => Self::InvalidDate,
        }
    }
}

impl From<QamarError> for QamarStatus {
    fn from(err: QamarError) -> Self {
        Self::from(&err)
    }
}
