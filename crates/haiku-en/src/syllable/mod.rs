// Syllable estimation -- rule-based English syllable counting
//
// The estimator works by:
// 1. Normalizing the line to lowercase ASCII letters (everything else dropped)
// 2. Collapsing common diphthongs that would otherwise be overcounted
// 3. Counting maximal vowel runs, one syllable unit per run
// 4. Subtracting a trailing silent-'e' occurrence
// The result is clamped so every line counts as at least one syllable.
//
// The estimate is approximate on purpose. It uses no dictionary and no
// phonetic analysis; the same input always produces the same count.

use haiku_core::character::{is_vowel_class, normalize};

/// Two-letter vowel pairs collapsed to a single `a` before counting.
///
/// Applied as sequential whole-string replacements in exactly this order,
/// one left-to-right non-overlapping pass per entry. Later entries see the
/// output of earlier ones, but an entry never re-scans its own output, so
/// the order of this table is part of the estimator's contract.
const DIPHTHONGS: &[&str] = &[
    "aa", "ae", "ai", "ao", "au",
    "ea", "ee", "ei", "eo", "eu",
    "ia", "ie", "ii", "io", "iu",
    "oa", "oe", "oi", "oo", "ou",
    "ua", "ue", "ui", "uo", "uu",
];

/// Replace every diphthong table entry with `a`, one pass per entry.
fn collapse_diphthongs(normalized: &str) -> String {
    let mut collapsed = normalized.to_string();
    for pair in DIPHTHONGS {
        if collapsed.contains(pair) {
            collapsed = collapsed.replace(pair, "a");
        }
    }
    collapsed
}

/// Count maximal runs of vowel-class characters. Each run is one syllable
/// unit.
fn vowel_runs(s: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in s.chars() {
        if is_vowel_class(c) {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs
}

/// Check for a silent `e`: a vowel run directly before a trailing `e`.
///
/// Normalization strips the characters that would mark interior word
/// boundaries, so the only boundary left is end-of-string. Silent e's on
/// non-final words of a multi-word line are therefore never detected.
fn ends_with_silent_e(s: &str) -> bool {
    let mut chars = s.chars().rev();
    chars.next() == Some('e') && chars.next().is_some_and(is_vowel_class)
}

/// Estimate the syllable count of a line.
///
/// Deterministic and total: any input, including the empty string, yields a
/// count of at least 1.
pub fn estimate_syllables(line: &str) -> usize {
    let collapsed = collapse_diphthongs(&normalize(line));
    let mut syllables = vowel_runs(&collapsed);
    if ends_with_silent_e(&collapsed) {
        syllables = syllables.saturating_sub(1);
    }
    syllables.max(1)
}
