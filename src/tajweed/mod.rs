// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Tajweed annotation
//!
//! [`annotate`] runs a fixed battery of independent scans over an Arabic
//! verse and reports every place a recitation rule applies as a
//! [`TajweedSpan`]. Scans never see each other's output, so spans of
//! different rules may overlap.
//!
//! Indices count Unicode scalar values (`char`s), not bytes:
//!
//! ```
//! use qamar::{annotate, TajweedRule, TajweedSpan};
//!
//! let verse = "\u{0625}\u{0646}\u{0651}"; // inna
//! let spans = annotate(verse);
//! assert_eq!(spans, vec![TajweedSpan::new(1, 3, TajweedRule::Ghunna)]);
//! assert_eq!(spans[0].text(verse), "\u{0646}\u{0651}");
//! ```
//!
//! Scan order, which is also the order of the returned spans:
//!
//! | Rule | Anchor |
//! |------|--------|
//! | [`Mad`](TajweedRule::Mad) | superscript alif |
//! | [`Ghunna`](TajweedRule::Ghunna) | nun or meem with shadda |
//! | [`Iqlab`](TajweedRule::Iqlab) | small meem before ba |
//! | [`HamzatWasl`](TajweedRule::HamzatWasl) | alif wasla, or alif with rounded zero |
//! | [`MadHey`](TajweedRule::MadHey) | maddah above |
//! | [`Qalqala`](TajweedRule::Qalqala) | qaf, tah, ba, jim, dal at rest |
//! | [`Idgham`](TajweedRule::Idgham) | nun sound before nun, meem, ya, waw |
//! | [`IdghamWithoutGhunna`](TajweedRule::IdghamWithoutGhunna) | nun sound before ra, lam |
//! | [`Ikhfa`](TajweedRule::Ikhfa) | nun sound before an ikhfa letter |
//! | [`OneMad`](TajweedRule::OneMad) | nun or meem before alif |
//! | [`Maddah`](TajweedRule::Maddah) | alif madda, or a long vowel closing the verse |

pub mod alphabet;
mod engine;

pub use engine::annotate;

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recitation rules the engine detects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TajweedRule {
    Mad,
    Ghunna,
    Qalqala,
    Iqlab,
    Idgham,
    IdghamWithoutGhunna,
    Ikhfa,
    HamzatWasl,
    MadHey,
    OneMad,
    Maddah,
}

impl TajweedRule {
    pub const ALL: [Self; 11] = [
        Self::Mad,
        Self::Ghunna,
        Self::Qalqala,
        Self::Iqlab,
        Self::Idgham,
        Self::IdghamWithoutGhunna,
        Self::Ikhfa,
        Self::HamzatWasl,
        Self::MadHey,
        Self::OneMad,
        Self::Maddah,
    ];

    /// Stable snake_case identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mad => "mad",
            Self::Ghunna => "ghunna",
            Self::Qalqala => "qalqala",
            Self::Iqlab => "iqlab",
            Self::Idgham => "idgham",
            Self::IdghamWithoutGhunna => "idgham_without_ghunna",
            Self::Ikhfa => "ikhfa",
            Self::HamzatWasl => "hamzat_wasl",
            Self::MadHey => "mad_hey",
            Self::OneMad => "one_mad",
            Self::Maddah => "maddah",
        }
    }
}

impl fmt::Display for TajweedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A half-open `[start, end)` run of chars governed by one rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TajweedSpan {
    pub start: usize,
    pub end: usize,
    pub rule: TajweedRule,
}

impl TajweedSpan {
    pub const fn new(start: usize, end: usize, rule: TajweedRule) -> Self {
        Self { start, end, rule }
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The covered slice of `verse`. Empty if the span lies outside it.
    pub fn text<'a>(&self, verse: &'a str) -> &'a str {
        let byte = |n: usize| {
            verse
                .char_indices()
                .nth(n)
                .map_or(verse.len(), |(i, _)| i)
        };
        let (start, end) = (byte(self.start), byte(self.end));
        verse.get(start..end).unwrap_or_default()
    }
}
