// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pattern scans behind [`annotate`].
//!
//! Regexes run on the UTF-8 text; their byte offsets are mapped back to char
//! indices before any boundary arithmetic. Scans the regex engine cannot
//! express (look-behind on the previous letter) walk the char vector.

use super::alphabet::*;
use super::{TajweedRule, TajweedSpan};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid tajweed pattern")
}

/// Nun sound, optional resting mark, optional pause sign.
fn nun_sound() -> String {
    format!(
        "[{NUN}{}][{SUKUN}{CURVY_SUKUN}{ALIF}{ALIF_MAQSURA}]?[{STOP_SIGNS}]?",
        class(&TANWEEN)
    )
}

static GHUNNA: Lazy<Regex> = Lazy::new(|| compile(&format!("[{NUN}{MIM}]{SHADDA}")));

/// Line terminators a verse may end with.
const EOL: &str = "\r\n|[\n\r\u{85}\u{2028}\u{2029}]";
/// As [`EOL`], minus the lone `\n` that would split a `\r\n`.
const EOL_AFTER_CR: &str = "\r\n|[\r\u{85}\u{2028}\u{2029}]";

/// A verse-final match may be followed by one line terminator, captured as
/// `eol`/`eol_cr` so it stays outside the span.
static QALQALA: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        "[{}](?:[{SUKUN}{CURVY_SUKUN}]|[^{SUKUN}]?\
         (?:[^{ALIF_MAQSURA}{ALIF}\r](?P<eol>{EOL})?|\r(?P<eol_cr>{EOL_AFTER_CR})?)\\z)",
        class(&QALQALA_LETTERS)
    ))
});

static IDGHAM: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        "{} [{NUN}{MIM}{YA}{WAW}]{SHADDA}?|{MIM}[{STOP_SIGNS}{SUKUN}{CURVY_SUKUN}]? {MIM}",
        nun_sound()
    ))
});

static IDGHAM_WITHOUT_GHUNNA: Lazy<Regex> =
    Lazy::new(|| compile(&format!("{} [{RA}{LAM}]", nun_sound())));

static IKHFA: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        "{} ?[{}]|{MIM}[{SUKUN}{CURVY_SUKUN}]? ?{BA}",
        nun_sound(),
        class(&IKHFA_LETTERS)
    ))
});

static ONE_MAD: Lazy<Regex> = Lazy::new(|| compile(&format!("[{NUN}{MIM}]{ALIF}")));

const WASLA_DIGRAPH: [char; 2] = [ALIF, SMALL_HIGH_ROUNDED_ZERO];
const TANWEEN_IQLAB: [char; 4] = [DAMMATAN, SMALL_HIGH_MEEM, ' ', BA];

/// Tajweed spans of `verse`, in scan order.
///
/// Total: empty or non-Arabic input yields an empty list, and every span
/// satisfies `start < end <= verse.chars().count()`.
pub fn annotate(verse: &str) -> Vec<TajweedSpan> {
    if verse.is_empty() {
        return Vec::new();
    }
    let v = Verse::new(verse);
    let mut out = Spans::new(v.len());

    scan_mad(&v, &mut out);
    scan_ghunna(&v, &mut out);
    scan_iqlab(&v, &mut out);
    scan_hamzat_wasl(&v, &mut out);
    scan_mad_hey(&v, &mut out);
    scan_qalqala(&v, &mut out);
    scan_idgham(&v, &mut out);
    scan_idgham_without_ghunna(&v, &mut out);
    scan_ikhfa(&v, &mut out);
    scan_one_mad(&v, &mut out);
    scan_maddah(&v, &mut out);

    out.spans
}

// ── Text view ─────────────────────────────────────────────────────────────

struct Verse<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of every char, then the text length.
    offsets: Vec<usize>,
}

impl<'a> Verse<'a> {
    fn new(text: &'a str) -> Self {
        let (mut offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    fn before(&self, i: usize) -> Option<char> {
        i.checked_sub(1).and_then(|p| self.at(p))
    }

    fn char_index(&self, byte: usize) -> usize {
        self.offsets.binary_search(&byte).unwrap_or_else(|i| i)
    }

    /// Char ranges `(start, end_exclusive)` of every match of `re`.
    fn matches<'r>(&'r self, re: &'r Regex) -> impl Iterator<Item = (usize, usize)> + 'r {
        re.find_iter(self.text)
            .map(|m| (self.char_index(m.start()), self.char_index(m.end())))
    }

    /// Every index where `needle` starts, overlapping occurrences included.
    fn positions<'n>(&'n self, needle: &'n [char]) -> impl Iterator<Item = usize> + 'n {
        (0..self.len()).filter(move |&i| self.chars[i..].starts_with(needle))
    }

    /// Extend a match end over a following shadda and superscript alif.
    fn extend_end(&self, end: usize) -> usize {
        let len = self.len();
        if len <= 6 {
            return len;
        }
        if self.at(end) == Some(SHADDA) {
            if self.at(end + 2) == Some(SUPERSCRIPT_ALIF) {
                (end + 3).min(len)
            } else {
                (end + 2).min(len)
            }
        } else if matches!(self.at(end + 1), Some(SUPERSCRIPT_ALIF | SHADDA)) {
            (end + 2).min(len)
        } else {
            (end + 1).min(len)
        }
    }

    /// Pull a start sitting on a small tanween back onto its letter.
    fn extend_start(&self, start: usize) -> usize {
        match self.at(start) {
            Some(SMALL_FATHATAN | SMALL_DAMMATAN | SMALL_KASRATAN) => {
                if self.before(start) == Some(SHADDA) {
                    start.saturating_sub(2)
                } else {
                    start.saturating_sub(1)
                }
            }
            _ => start,
        }
    }

    fn nun_sound_start(&self, start: usize) -> usize {
        match self.at(start) {
            Some(FATHATAN | KASRATAN) => self.extend_start(start).saturating_sub(1),
            _ => self.extend_start(start),
        }
    }
}

struct Spans {
    len: usize,
    spans: Vec<TajweedSpan>,
}

impl Spans {
    fn new(len: usize) -> Self {
        Self {
            len,
            spans: Vec::with_capacity(len / 4),
        }
    }

    /// Clamp into the text and drop empty results.
    fn add(&mut self, start: usize, end: usize, rule: TajweedRule) {
        let start = start.min(self.len);
        let end = end.clamp(start, self.len);
        if start < end {
            self.spans.push(TajweedSpan::new(start, end, rule));
        }
    }

    fn count(&self, rule: TajweedRule) -> usize {
        self.spans.iter().filter(|s| s.rule == rule).count()
    }
}

// ── Scans ─────────────────────────────────────────────────────────────────

fn scan_mad(v: &Verse<'_>, out: &mut Spans) {
    for i in v.positions(&[SUPERSCRIPT_ALIF]) {
        out.add(i, i + 1, TajweedRule::Mad);
    }
    trace!("mad: {}", out.count(TajweedRule::Mad));
}

fn scan_ghunna(v: &Verse<'_>, out: &mut Spans) {
    for (s, e) in v.matches(&GHUNNA) {
        out.add(v.extend_start(s), v.extend_end(e), TajweedRule::Ghunna);
    }
    trace!("ghunna: {}", out.count(TajweedRule::Ghunna));
}

fn scan_iqlab(v: &Verse<'_>, out: &mut Spans) {
    let len = v.len();
    let space_then_ba = |i: usize| v.at(i) == Some(' ') && v.at(i + 1) == Some(BA);

    for s in v.positions(&[SMALL_HIGH_MEEM]) {
        if s == 0 || s + 2 >= len {
            continue;
        }
        let prev = v.chars[s - 1];
        if prev != NUN && !TANWEEN.contains(&prev) {
            continue;
        }
        if v.at(s + 1) == Some(BA) {
            out.add(s - 1, s + 3, TajweedRule::Iqlab);
        } else if space_then_ba(s + 1) {
            out.add(s - 1, s + 4, TajweedRule::Iqlab);
        } else if v.at(s + 1) == Some(ALIF) && space_then_ba(s + 2) {
            out.add(s - 1, s + 4, TajweedRule::Iqlab);
        }
    }

    for s in v.positions(&[SMALL_LOW_MEEM]) {
        if s == 0 || s + 2 >= len || !space_then_ba(s + 1) {
            continue;
        }
        out.add(s, s + 4, TajweedRule::Iqlab);
        let prev = v.chars[s - 1];
        if prev == NUN || DIACRITICS.contains(&prev) {
            out.add(s - 1, s + 4, TajweedRule::Iqlab);
        }
    }

    for s in v.positions(&TANWEEN_IQLAB) {
        if s > 0 && s + 2 < len {
            out.add(s, s + 4, TajweedRule::Iqlab);
        }
    }
    trace!("iqlab: {}", out.count(TajweedRule::Iqlab));
}

fn scan_hamzat_wasl(v: &Verse<'_>, out: &mut Spans) {
    let len = v.len();
    for s in v.positions(&[ALIF_WASLA]) {
        if s == 0 || s + 2 >= len {
            continue;
        }
        let (next, after) = (v.chars[s + 1], v.chars[s + 2]);
        let width = if next == LAM && after != LAM && after != SHADDA && after != SUKUN {
            2
        } else {
            1
        };
        out.add(s, s + width, TajweedRule::HamzatWasl);
    }
    for s in v.positions(&WASLA_DIGRAPH) {
        out.add(s, s + 2, TajweedRule::HamzatWasl);
    }
    trace!("hamzat wasl: {}", out.count(TajweedRule::HamzatWasl));
}

fn scan_mad_hey(v: &Verse<'_>, out: &mut Spans) {
    for i in v.positions(&[MADDAH_ABOVE]) {
        out.add(i.saturating_sub(1), i + 1, TajweedRule::MadHey);
    }
    trace!("mad hey: {}", out.count(TajweedRule::MadHey));
}

fn scan_qalqala(v: &Verse<'_>, out: &mut Spans) {
    for caps in QALQALA.captures_iter(v.text) {
        let Some(m) = caps.get(0) else { continue };
        let end = caps
            .name("eol")
            .or_else(|| caps.name("eol_cr"))
            .map_or(m.end(), |eol| eol.start());
        out.add(v.char_index(m.start()), v.char_index(end), TajweedRule::Qalqala);
    }
    trace!("qalqala: {}", out.count(TajweedRule::Qalqala));
}

fn scan_idgham(v: &Verse<'_>, out: &mut Spans) {
    for (s, e) in v.matches(&IDGHAM) {
        out.add(v.nun_sound_start(s), v.extend_end(e), TajweedRule::Idgham);
    }
    trace!("idgham: {}", out.count(TajweedRule::Idgham));
}

fn scan_idgham_without_ghunna(v: &Verse<'_>, out: &mut Spans) {
    for (s, e) in v.matches(&IDGHAM_WITHOUT_GHUNNA) {
        // Cover the doubled ra/lam and its vowel.
        out.add(v.nun_sound_start(s), e + 2, TajweedRule::IdghamWithoutGhunna);
    }
    trace!(
        "idgham without ghunna: {}",
        out.count(TajweedRule::IdghamWithoutGhunna)
    );
}

fn scan_ikhfa(v: &Verse<'_>, out: &mut Spans) {
    for (s, e) in v.matches(&IKHFA) {
        out.add(v.nun_sound_start(s), v.extend_end(e), TajweedRule::Ikhfa);
    }
    trace!("ikhfa: {}", out.count(TajweedRule::Ikhfa));
}

fn scan_one_mad(v: &Verse<'_>, out: &mut Spans) {
    for (s, e) in v.matches(&ONE_MAD) {
        out.add(v.extend_start(s), v.extend_end(e), TajweedRule::OneMad);
    }
    trace!("one mad: {}", out.count(TajweedRule::OneMad));
}

fn scan_maddah(v: &Verse<'_>, out: &mut Spans) {
    let len = v.len();
    if len > 4 && matches!(v.chars[len - 3], YA | ALIF | WAW) {
        out.add(len - 3, len - 2, TajweedRule::Maddah);
    }
    for i in v.positions(&[ALIF_MADDA]) {
        out.add(i, i + 1, TajweedRule::Maddah);
    }
    trace!("maddah: {}", out.count(TajweedRule::Maddah));
}

#[cfg(test)]
mod tests {
    use super::*;
    use TajweedRule::*;

    fn spans(chars: &[char]) -> Vec<(TajweedRule, usize, usize)> {
        let verse: String = chars.iter().collect();
        annotate(&verse)
            .into_iter()
            .map(|s| (s.rule, s.start, s.end))
            .collect()
    }

    #[test]
    fn empty_and_foreign_text() {
        assert!(annotate("").is_empty());
        assert!(annotate("hello world").is_empty());
        assert!(annotate("   ").is_empty());
    }

    #[test]
    fn ghunna_on_nun_with_shadda() {
        assert_eq!(spans(&[ALIF_WITH_HAMZA_BELOW, NUN, SHADDA]), vec![(Ghunna, 1, 3)]);
    }

    #[test]
    fn maddah_on_alif_madda() {
        assert_eq!(spans(&[ALIF_MADDA, YA, TEH_MARBUTA]), vec![(Maddah, 0, 1)]);
    }

    #[test]
    fn mad_on_superscript_alif() {
        let rahman = [RA, FATHA, HAH, SUKUN, MIM, FATHA, SUPERSCRIPT_ALIF, NUN];
        assert_eq!(spans(&rahman), vec![(Mad, 6, 7)]);
    }

    #[test]
    fn qalqala_on_resting_qaf() {
        assert_eq!(spans(&[MIM, KASRA, QAF, SUKUN]), vec![(Qalqala, 2, 4)]);
    }

    #[test]
    fn iqlab_across_words() {
        let min_bad = [
            MIM, KASRA, NUN, SMALL_HIGH_MEEM, ' ', BA, FATHA, AIN, SUKUN, DAL, KASRA,
        ];
        assert_eq!(spans(&min_bad), vec![(Iqlab, 2, 7), (Qalqala, 9, 11)]);
    }

    #[test]
    fn iqlab_on_low_meem_covers_sign_and_letter() {
        let min_baad = [MIM, KASRA, NUN, SMALL_LOW_MEEM, ' ', BA, FATHA, AIN];
        assert_eq!(
            spans(&min_baad),
            vec![(Iqlab, 3, 7), (Iqlab, 2, 7), (Qalqala, 5, 8)]
        );
    }

    #[test]
    fn iqlab_after_dammatan() {
        let summun_bukmun = [
            SAD, FATHA, MIM, DAMMATAN, SMALL_HIGH_MEEM, ' ', BA, DAMMA, KAF, SUKUN, MIM, DAMMA,
        ];
        assert_eq!(spans(&summun_bukmun), vec![(Iqlab, 3, 8), (Iqlab, 3, 7)]);
    }

    #[test]
    fn iqlab_inside_word() {
        let anbaa = [ALIF, FATHA, NUN, SMALL_HIGH_MEEM, BA, FATHA, ALIF, HAMZA];
        assert_eq!(spans(&anbaa), vec![(Iqlab, 2, 6)]);
    }

    #[test]
    fn iqlab_skips_seat_alif() {
        let aliman_bima = [
            AIN, FATHA, LAM, KASRA, YA, MIM, FATHATAN, SMALL_HIGH_MEEM, ALIF, ' ', BA, KASRA, MIM,
            FATHA, ALIF,
        ];
        assert_eq!(spans(&aliman_bima), vec![(Iqlab, 6, 11)]);
    }

    #[test]
    fn hamzat_wasl_on_alif_with_rounded_zero() {
        let wa_alim = [WAW, FATHA, ALIF, SMALL_HIGH_ROUNDED_ZERO, LAM, KASRA, MIM];
        assert_eq!(spans(&wa_alim), vec![(HamzatWasl, 2, 4)]);
    }

    #[test]
    fn idgham_of_meem_into_meem() {
        let lahum_ma = [LAM, FATHA, HEH, DAMMA, MIM, SUKUN, ' ', MIM, FATHA, ALIF];
        assert_eq!(spans(&lahum_ma), vec![(Idgham, 4, 9)]);
    }

    #[test]
    fn ikhfa_of_meem_before_ba() {
        let alayhim_bih = [
            AIN, FATHA, LAM, FATHA, YA, SUKUN, HEH, KASRA, MIM, SUKUN, ' ', BA, KASRA, HAH,
        ];
        assert_eq!(spans(&alayhim_bih), vec![(Qalqala, 11, 14), (Ikhfa, 8, 13)]);
    }

    #[test]
    fn span_end_reaches_past_shadda_and_superscript_alif() {
        let yawma_in_dhallika = [
            YA, FATHA, WAW, SUKUN, MIM, FATHA, AIN, KASRA, NUN, ' ', DHAL, SHADDA, FATHA,
            SUPERSCRIPT_ALIF, LAM, KASRA, KAF, FATHA,
        ];
        assert_eq!(spans(&yawma_in_dhallika), vec![(Mad, 13, 14), (Ikhfa, 8, 14)]);
    }

    #[test]
    fn kasratan_start_moves_onto_letter() {
        let shayin_qadir = [
            SHIN, FATHA, YA, SUKUN, HAMZA, KASRATAN, ' ', QAF, FATHA, DAL, KASRA, YA, RA, DAMMA,
        ];
        assert_eq!(spans(&shayin_qadir), vec![(Ikhfa, 4, 9), (Maddah, 11, 12)]);
    }

    #[test]
    fn qalqala_at_verse_end_ignores_trailing_line_break() {
        assert_eq!(spans(&[ALIF, BA, DAD, LAM]), vec![(Qalqala, 1, 4)]);
        assert_eq!(spans(&[ALIF, BA, DAD, LAM, '\n']), vec![(Qalqala, 1, 4)]);
        assert_eq!(spans(&[ALIF, BA, DAD, LAM, '\r', '\n']), vec![(Qalqala, 1, 4)]);
        // A lone break can still be the closing letter slot.
        assert_eq!(spans(&[BA, LAM, '\n']), vec![(Qalqala, 0, 3)]);
        // But never the `\n` of a `\r\n` pair.
        assert_eq!(spans(&[BA, LAM, '\r', '\n']), vec![(Qalqala, 0, 2)]);
    }

    #[test]
    fn idgham_before_ya() {
        let man_yamal = [
            MIM, FATHA, NUN, ' ', YA, FATHA, AIN, SUKUN, MIM, FATHA, LAM, SUKUN,
        ];
        assert_eq!(spans(&man_yamal), vec![(Idgham, 2, 6)]);
    }

    #[test]
    fn idgham_without_ghunna_before_ra() {
        let min_rabbihim = [
            MIM, KASRA, NUN, ' ', RA, SHADDA, FATHA, BA, KASRA, SHADDA, HEH, KASRA, MIM, SUKUN,
        ];
        assert_eq!(spans(&min_rabbihim), vec![(IdghamWithoutGhunna, 2, 7)]);
    }

    #[test]
    fn ikhfa_before_qaf() {
        let min_qabli = [MIM, KASRA, NUN, ' ', QAF, FATHA, BA, SUKUN, LAM, KASRA];
        assert_eq!(spans(&min_qabli), vec![(Qalqala, 6, 8), (Ikhfa, 2, 6)]);
    }

    #[test]
    fn one_mad_on_nun_alif() {
        assert_eq!(spans(&[NUN, ALIF]), vec![(OneMad, 0, 2)]);
    }

    #[test]
    fn mad_hey_backs_up_one_char() {
        let sua = [SIN, DAMMA, WAW, MADDAH_ABOVE, HAMZA, FATHA];
        assert_eq!(spans(&sua), vec![(MadHey, 2, 4)]);
    }

    #[test]
    fn maddah_on_closing_long_vowel() {
        let alim = [AIN, FATHA, LAM, KASRA, YA, MIM, DAMMATAN];
        assert_eq!(spans(&alim), vec![(Maddah, 4, 5)]);
    }

    #[test]
    fn ghunna_and_hamzat_wasl() {
        let inna_allah = [
            ALIF_WITH_HAMZA_BELOW, KASRA, NUN, SHADDA, FATHA, ' ', ALIF_WASLA, LAM, LAM, SHADDA,
            FATHA, HEH, FATHA,
        ];
        assert_eq!(spans(&inna_allah), vec![(Ghunna, 2, 5), (HamzatWasl, 6, 7)]);
    }

    #[test]
    fn idgham_after_fathatan_starts_on_letter() {
        let khayran_yarah = [
            KHAH, FATHA, YA, SUKUN, RA, FATHATAN, ALIF, ' ', YA, FATHA, RA, FATHA, HEH, DAMMA,
            SMALL_WAW,
        ];
        assert_eq!(spans(&khayran_yarah), vec![(Idgham, 4, 10)]);
    }

    #[test]
    fn hamzat_wasl_before_plain_lam_covers_two() {
        let spans = annotate("\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} \u{0671}\u{0644}\u{0631}\u{0651}");
        assert!(spans.contains(&TajweedSpan::new(7, 9, HamzatWasl)));
    }

    #[test]
    fn fatiha_spans_are_bounded_and_stable() {
        let verse = "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} \
                     \u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650} \
                     \u{0671}\u{0644}\u{0631}\u{0651}\u{064E}\u{062D}\u{0652}\u{0645}\u{064E}\u{0670}\u{0646}\u{0650} \
                     \u{0671}\u{0644}\u{0631}\u{0651}\u{064E}\u{062D}\u{0650}\u{064A}\u{0645}\u{0650}";
        let len = verse.chars().count();
        let first = annotate(verse);
        assert!(!first.is_empty());
        for span in &first {
            assert!(span.start < span.end && span.end <= len, "{span:?}");
        }
        assert_eq!(first, annotate(verse));
        assert!(first.iter().any(|s| s.rule == Mad));
        assert!(first.iter().any(|s| s.rule == HamzatWasl));
    }

    #[test]
    fn byte_offsets_map_to_chars() {
        let v = Verse::new("a\u{0646}b");
        assert_eq!(v.char_index(0), 0);
        assert_eq!(v.char_index(1), 1);
        assert_eq!(v.char_index(3), 2);
        assert_eq!(v.char_index(4), 3);
    }

    const ALIF_WITH_HAMZA_BELOW: char = '\u{0625}';
    const TEH_MARBUTA: char = '\u{0629}';
    const HAH: char = '\u{062D}';
    const KHAH: char = '\u{062E}';
    const AIN: char = '\u{0639}';
    const HEH: char = '\u{0647}';
    const HAMZA: char = '\u{0621}';
    const SMALL_WAW: char = '\u{06E5}';
}
