// Validation verdict types
//
// A validation run produces `Result<(), HaikuError>`: success carries no
// payload, failure carries exactly one structured reason. The `Display`
// output of `HaikuError` is the user-facing notice text; embedding it safely
// in any particular output format (HTML escaping etc.) is the presentation
// layer's responsibility.

/// Why a text failed haiku validation.
///
/// Exactly one reason is produced per validation call; checking stops at the
/// first violation, so a text with several problems reports only the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HaikuError {
    /// The blank-filtered text does not have exactly three lines.
    #[error("Content must contain exactly three lines to be a haiku.")]
    LineCount,

    /// A line's estimated syllable count differs from the 5-7-5 pattern.
    /// `line_index` is zero-based; the message shows the 1-based line number.
    #[error("Line {number} must contain {expected} syllables: \"{line}\".", number = .line_index + 1)]
    SyllableCount {
        /// Zero-based index of the offending line.
        line_index: usize,
        /// Syllable count the pattern requires at this line.
        expected: usize,
        /// Syllable count the estimator produced.
        actual: usize,
        /// The trimmed text of the offending line, verbatim (unescaped).
        line: String,
    },
}

impl HaikuError {
    /// Machine-checkable reason tag, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            HaikuError::LineCount => "line_count",
            HaikuError::SyllableCount { .. } => "syllable_count",
        }
    }
}

/// Result of a validation call: `Ok(())` for a valid haiku, or the first
/// failure reason.
pub type Verdict = Result<(), HaikuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_message() {
        assert_eq!(
            HaikuError::LineCount.to_string(),
            "Content must contain exactly three lines to be a haiku."
        );
    }

    #[test]
    fn syllable_count_message_is_one_based() {
        let err = HaikuError::SyllableCount {
            line_index: 0,
            expected: 5,
            actual: 2,
            line: "Hello".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 1 must contain 5 syllables: \"Hello\"."
        );
    }

    #[test]
    fn syllable_count_message_second_line() {
        let err = HaikuError::SyllableCount {
            line_index: 1,
            expected: 7,
            actual: 4,
            line: "too short".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 2 must contain 7 syllables: \"too short\"."
        );
    }

    #[test]
    fn reason_codes() {
        assert_eq!(HaikuError::LineCount.code(), "line_count");
        let err = HaikuError::SyllableCount {
            line_index: 2,
            expected: 5,
            actual: 6,
            line: String::new(),
        };
        assert_eq!(err.code(), "syllable_count");
    }

    #[test]
    fn errors_compare_by_payload() {
        let a = HaikuError::SyllableCount {
            line_index: 0,
            expected: 5,
            actual: 2,
            line: "Hello".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, HaikuError::LineCount);
    }
}
