// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Construction-time validation errors.
//!
//! Only value constructors fail. Once a [`Coordinates`](crate::Coordinates)
//! or [`DateComponents`](crate::DateComponents) exists, every computation over
//! it is a total function.

use thiserror::Error;

/// Errors raised while building validated input values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QamarError {
    /// Latitude outside `[-90, 90]` degrees (or NaN).
    #[error("latitude {0} must be between -90 and 90 degrees")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` degrees (or NaN).
    #[error("longitude {0} must be between -180 and 180 degrees")]
    LongitudeOutOfRange(f64),

    /// Year outside the supported `[1900, 2100]` window.
    #[error("year {0} must be between 1900 and 2100")]
    YearOutOfRange(i32),

    /// Month outside `[1, 12]`.
    #[error("month {0} must be between 1 and 12")]
    MonthOutOfRange(u32),

    /// Day that does not exist in the given month.
    #[error("day {day} is not valid for {month}/{year}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QamarError>;
