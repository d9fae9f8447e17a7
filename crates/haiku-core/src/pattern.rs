// The fixed haiku syllable pattern

/// Required syllable counts per line: 5-7-5.
///
/// Constant for the lifetime of the system; not user-configurable.
pub const SYLLABLE_PATTERN: [usize; 3] = [5, 7, 5];

/// Number of non-blank lines a haiku must contain.
pub const HAIKU_LINES: usize = SYLLABLE_PATTERN.len();
