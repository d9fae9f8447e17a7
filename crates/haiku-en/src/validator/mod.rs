// Haiku structure validation
//
// Validates that plain text forms a 5-7-5 haiku: exactly three non-blank
// lines whose estimated syllable counts match the fixed pattern. Checking
// is a linear pass that stops at the first violation, so a verdict carries
// exactly one failure reason.
//
// The validator consumes plain text only. Flattening markup into plain text
// is the markup module's job (or the host's); nothing here parses tags.

use haiku_core::pattern::{HAIKU_LINES, SYLLABLE_PATTERN};
use haiku_core::verdict::{HaikuError, Verdict};

use crate::syllable::estimate_syllables;

/// Split text on any line-break sequence (CRLF, CR, or LF) and keep the
/// trimmed non-blank lines, in order.
///
/// Splitting on the individual break characters makes a CRLF pair yield one
/// empty candidate in between; blank filtering removes it, so the result is
/// the same dense sequence for all three break conventions.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Validate the 5-7-5 haiku structure of `text`.
///
/// Returns `Ok(())` for a valid haiku. Otherwise returns the first failure:
/// a line-count mismatch (checked before any syllable counting), or the
/// lowest-indexed line whose estimated syllable count differs from the
/// pattern. Line text embedded in the error is the trimmed line verbatim;
/// display escaping is the caller's concern.
pub fn validate_haiku(text: &str) -> Verdict {
    let lines = content_lines(text);

    if lines.len() != HAIKU_LINES {
        return Err(HaikuError::LineCount);
    }

    for (line_index, line) in lines.iter().enumerate() {
        let expected = SYLLABLE_PATTERN[line_index];
        let actual = estimate_syllables(line);
        if actual != expected {
            return Err(HaikuError::SyllableCount {
                line_index,
                expected,
                actual,
                line: (*line).to_string(),
            });
        }
    }

    Ok(())
}
