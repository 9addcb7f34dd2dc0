// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian calendar dates.
//!
//! [`DateComponents`] is the validated civil date every prayer-time
//! computation starts from. Validation happens once, at construction; the
//! value is immutable afterwards.

use crate::error::{QamarError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First supported civil year.
pub const MIN_YEAR: i32 = 1900;

/// Last supported civil year.
pub const MAX_YEAR: i32 = 2100;

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Returns `0` for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A validated Gregorian date in `[1900-01-01, 2100-12-31]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate", into = "RawDate"))]
pub struct DateComponents {
    year: i32,
    month: u32,
    day: u32,
}

impl DateComponents {
    /// Build a date, rejecting out-of-range years, months and days.
    ///
    /// ```
    /// use qamar::DateComponents;
    ///
    /// assert!(DateComponents::new(2024, 2, 29).is_ok());
    /// assert!(DateComponents::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(QamarError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(QamarError::MonthOutOfRange(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(QamarError::DayOutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Days in this date's month.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Every date of the given month, in order.
    pub fn month_days(year: i32, month: u32) -> Result<Vec<Self>> {
        let first = Self::new(year, month, 1)?;
        (1..=first.days_in_month())
            .map(|day| Self::new(year, month, day))
            .collect()
    }

    /// The same date as a `chrono` calendar date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for DateComponents {
    type Error = QamarError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// Unvalidated wire shape; deserialization routes through `DateComponents::new`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for DateComponents {
    type Error = QamarError;

    fn try_from(raw: RawDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "serde")]
impl From<DateComponents> for RawDate {
    fn from(date: DateComponents) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}
