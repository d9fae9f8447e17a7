// Character classification and normalization utilities

// ---------------------------------------------------------------------------
// Vowel-class characters
// ---------------------------------------------------------------------------

/// Vowel-class characters for syllable counting (lowercase): a e i o u y
///
/// `y` is counted as a vowel unconditionally. Distinguishing its consonant
/// role ("yes") from its vowel role ("rhythm") would need phonetic context
/// the estimator deliberately does not model.
const VOWEL_CLASS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Check whether a character belongs to the vowel class used for syllable
/// counting. Expects normalized (lowercase ASCII) input; uppercase letters
/// are not vowel-class.
pub fn is_vowel_class(c: char) -> bool {
    VOWEL_CLASS.contains(&c)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a line for syllable counting.
///
/// Each character is ASCII-lowercased and everything outside `a`-`z` is
/// removed entirely. Digits, punctuation, whitespace, and non-ASCII letters
/// are dropped, not treated as separators, so word boundaries do not survive
/// normalization.
pub fn normalize(line: &str) -> String {
    line.chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            c.is_ascii_lowercase().then_some(c)
        })
        .collect()
}
