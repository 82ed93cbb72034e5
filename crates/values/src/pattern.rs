use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unsupported pattern flag `{0}`")]
    UnsupportedFlag(char),
    #[error(transparent)]
    Syntax(#[from] regex::Error),
}

/// A textual match pattern plus flags, compiled on construction.
///
/// The recognized flags are `i` (case-insensitive), `m` (multi-line),
/// `s` (dot matches newline), and the no-op markers `g`, `u` and `y`,
/// which are retained in [`Pattern::flags`] but do not affect matching.
///
/// # Examples
///
/// ```
/// use kitbag_values::Pattern;
///
/// let pattern = Pattern::new("^(true|t|yes|y)$", "i").unwrap();
/// assert!(pattern.is_match("YES"));
/// assert!(!pattern.is_match("no"));
/// assert_eq!(pattern.source(), "^(true|t|yes|y)$");
/// assert_eq!(pattern.flags(), "i");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from source text and flags.
    pub fn new(source: &str, flags: &str) -> Result<Pattern, PatternError> {
        let mut builder = RegexBuilder::new(source);

        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                // Stickiness, global matching and unicode mode carry no
                // meaning here; keep them so the flags string round-trips.
                'g' | 'u' | 'y' => {}
                other => return Err(PatternError::UnsupportedFlag(other)),
            }
        }

        Ok(Pattern {
            source: source.to_string(),
            flags: flags.to_string(),
            regex: builder.build()?,
        })
    }

    /// The pattern source text, exactly as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags string, exactly as given.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Test the pattern against a string.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The compiled matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Pattern) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}
