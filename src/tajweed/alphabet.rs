// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Code points the tajweed scans match on.

// ── Harakat ───────────────────────────────────────────────────────────────

pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
/// Quranic annotation sukun (dotless head of khah).
pub const CURVY_SUKUN: char = '\u{06E1}';
/// Superscript (dagger) alif.
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';

// Tanween: the small forms are the Quranic-annotation variants.
pub const SMALL_FATHATAN: char = '\u{0618}';
pub const SMALL_DAMMATAN: char = '\u{0619}';
pub const SMALL_KASRATAN: char = '\u{061A}';
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';

// ── Letters ───────────────────────────────────────────────────────────────

pub const ALIF: char = '\u{0627}';
pub const ALIF_MAQSURA: char = '\u{0649}';
pub const ALIF_MADDA: char = '\u{0622}';
pub const ALIF_WASLA: char = '\u{0671}';
pub const BA: char = '\u{0628}';
pub const TA: char = '\u{062A}';
pub const THA: char = '\u{062B}';
pub const JIM: char = '\u{062C}';
pub const DAL: char = '\u{062F}';
pub const DHAL: char = '\u{0630}';
pub const RA: char = '\u{0631}';
pub const ZAY: char = '\u{0632}';
pub const SIN: char = '\u{0633}';
pub const SHIN: char = '\u{0634}';
pub const SAD: char = '\u{0635}';
pub const DAD: char = '\u{0636}';
pub const TAH: char = '\u{0637}';
pub const ZAH: char = '\u{0638}';
pub const FA: char = '\u{0641}';
pub const QAF: char = '\u{0642}';
pub const KAF: char = '\u{0643}';
pub const LAM: char = '\u{0644}';
pub const MIM: char = '\u{0645}';
pub const NUN: char = '\u{0646}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';
/// Keheh, the kaf of Indo-Pak script.
pub const KEHEH: char = '\u{06A9}';

// ── Quranic marks ─────────────────────────────────────────────────────────

/// Small high meem (iqlab sign).
pub const SMALL_HIGH_MEEM: char = '\u{06E2}';
/// Small low meem (iqlab sign, Indo-Pak).
pub const SMALL_LOW_MEEM: char = '\u{06ED}';
/// Maddah above.
pub const MADDAH_ABOVE: char = '\u{0653}';
/// Small high rounded zero, marks an unpronounced alif.
pub const SMALL_HIGH_ROUNDED_ZERO: char = '\u{06DF}';

/// Pause marks that may sit between two words, plus the space itself.
pub const STOP_SIGNS: &str = " \u{06DB}\u{06DA}\u{06D7}\u{06D6}\u{06D9}\u{06D8}";

/// Tanween marks that carry the nun sound.
pub const TANWEEN: [char; 6] = [
    SMALL_FATHATAN,
    SMALL_DAMMATAN,
    SMALL_KASRATAN,
    DAMMATAN,
    FATHATAN,
    KASRATAN,
];

/// Harakat and tanween accepted before a low-meem iqlab sign.
pub const DIACRITICS: [char; 11] = [
    DAMMA,
    SHADDA,
    KASRA,
    FATHA,
    SMALL_FATHATAN,
    SMALL_DAMMATAN,
    SMALL_KASRATAN,
    DAMMATAN,
    FATHATAN,
    KASRATAN,
    SUKUN,
];

/// Letters pronounced with ikhfa after a nun sound.
pub const IKHFA_LETTERS: [char; 16] = [
    SAD, DHAL, THA, KAF, JIM, SHIN, QAF, SIN, DAL, TAH, ZAY, FA, TA, DAD, ZAH, KEHEH,
];

/// The five qalqala letters.
pub const QALQALA_LETTERS: [char; 5] = [QAF, TAH, BA, JIM, DAL];

/// Concatenate code points into a regex character-class body.
pub(crate) fn class(chars: &[char]) -> String {
    chars.iter().collect()
}
