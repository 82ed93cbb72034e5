use std::collections::HashSet;

// Words left lowercase in title case unless they open or close the text.
const DEFAULT_SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "near", "nor", "of",
    "on", "onto", "or", "per", "the", "to", "via", "with",
];

// Spellings applied whenever a word matches case-insensitively.
const DEFAULT_SPECIAL_WORDS: &[&str] = &[
    "iPhone", "iPad", "iPod", "iMac", "iOS", "macOS", "iTunes", "eBay",
];

/// True when the text is entirely uppercase letters.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::is_all_uppercase;
///
/// assert!(is_all_uppercase("FOOBAR"));
/// assert!(!is_all_uppercase("FooBar"));
/// assert!(!is_all_uppercase("FOO BAR BAZ, 123"));
/// ```
pub fn is_all_uppercase(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_uppercase)
}

/// True when no word in the text contains a lowercase letter.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::is_all_uppercase_words;
///
/// assert!(is_all_uppercase_words("FOO BAR BAZ, 123"));
/// assert!(!is_all_uppercase_words("FOO BaR BAZ, 123"));
/// ```
pub fn is_all_uppercase_words(s: &str) -> bool {
    !s.chars().any(char::is_lowercase)
}

// Apostrophes belong to words; everything else non-alphanumeric separates.
fn joins_word(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

/// Capitalize the first letter of every word and lowercase the rest.
/// Letters directly after an apostrophe stay lowercase.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::to_mixed_case;
///
/// assert_eq!(to_mixed_case("isn't this working?"), "Isn't This Working?");
/// assert_eq!(to_mixed_case("ISN\u{2019}T THIS WORKING?"), "Isn\u{2019}t This Working?");
/// assert_eq!(to_mixed_case("one two-three 4x j99"), "One Two-Three 4X J99");
/// ```
pub fn to_mixed_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            let at_word_start = match prev {
                None => true,
                Some(p) => !p.is_alphabetic() && !joins_word(p),
            };
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}

/// Adjustments to [`to_title_case`].
#[derive(Debug, Clone, Default)]
pub struct TitleCaseOptions {
    /// Keep words that arrive fully uppercase (acronyms) as they are.
    pub keep_all_caps: bool,
    /// Extra words to treat as small (kept lowercase mid-title). An entry
    /// starting with `-` removes the rest of it from the small-word list.
    pub short_small: Vec<String>,
    /// Extra special-cased spellings, applied on a case-insensitive match.
    pub special: Vec<String>,
}

/// Title-case the text: capitalize each word, keep small words lowercase
/// except at the ends, and apply special-cased spellings.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::to_title_case;
///
/// assert_eq!(to_title_case("isn't this working?", None), "Isn't This Working?");
/// assert_eq!(to_title_case("from the ëarth to the moon", None), "From the Ëarth to the Moon");
/// assert_eq!(to_title_case("YOUR NEW IPHONE", None), "Your New iPhone");
/// ```
pub fn to_title_case(s: &str, options: Option<TitleCaseOptions>) -> String {
    let options = options.unwrap_or_default();

    let mut small: HashSet<String> = DEFAULT_SMALL_WORDS.iter().map(|w| w.to_string()).collect();
    for entry in &options.short_small {
        match entry.strip_prefix('-') {
            Some(removed) => {
                small.remove(&normalize_word(removed));
            }
            None => {
                small.insert(normalize_word(entry));
            }
        }
    }

    let mut special: Vec<&str> = DEFAULT_SPECIAL_WORDS.to_vec();
    special.extend(options.special.iter().map(String::as_str));

    let tokens = tokenize(s);
    let word_count = tokens.iter().filter(|t| t.is_word).count();

    let mut out = String::with_capacity(s.len());
    let mut word_index = 0usize;

    for token in &tokens {
        if !token.is_word {
            out.push_str(&token.text);
            continue;
        }

        let is_first = word_index == 0;
        let is_last = word_index + 1 == word_count;
        word_index += 1;

        let normalized = normalize_word(&token.text);
        if let Some(spelling) = special
            .iter()
            .find(|candidate| candidate.to_lowercase() == normalized)
        {
            out.push_str(spelling);
        } else if options.keep_all_caps && word_is_all_caps(&token.text) {
            out.push_str(&token.text);
        } else if !is_first && !is_last && small.contains(&normalized) {
            out.push_str(&token.text.to_lowercase());
        } else {
            out.push_str(&capitalize_word(&token.text));
        }
    }
    out
}

struct Token {
    text: String,
    is_word: bool,
}

fn tokenize(s: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for ch in s.chars() {
        let is_word = ch.is_alphanumeric() || joins_word(ch);
        match tokens.last_mut() {
            Some(token) if token.is_word == is_word => token.text.push(ch),
            _ => tokens.push(Token {
                text: ch.to_string(),
                is_word,
            }),
        }
    }
    tokens
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

fn word_is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

// Uppercase the first letter, lowercase everything after it; leading
// apostrophes pass through untouched.
fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut seen_letter = false;
    for ch in word.chars() {
        if !ch.is_alphabetic() && !seen_letter {
            out.push(ch);
        } else if !seen_letter {
            seen_letter = true;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_detection() {
        assert!(!is_all_uppercase("FooBar"));
        assert!(is_all_uppercase("FOOBAR"));
        assert!(!is_all_uppercase("FOO BAR BAZ, 123"));
        assert!(!is_all_uppercase_words("FooBar"));
        assert!(is_all_uppercase_words("FOOBAR"));
        assert!(is_all_uppercase_words("FOO BAR BAZ, 123"));
        assert!(!is_all_uppercase_words("FOO BaR BAZ, 123"));
    }

    #[test]
    fn test_to_mixed_case() {
        assert_eq!(to_mixed_case("isn't this working?"), "Isn't This Working?");
        assert_eq!(
            to_mixed_case("ISN\u{2019}T THIS WORKING?"),
            "Isn\u{2019}t This Working?"
        );
        assert_eq!(to_mixed_case("one two-three 4x j99"), "One Two-Three 4X J99");
    }

    #[test]
    fn test_title_case_basics() {
        assert_eq!(to_title_case("isn't this (working)?", None), "Isn't This (Working)?");
        assert_eq!(
            to_title_case("\u{ed}SN\u{2019}T THIS W\u{d6}RKING?", None),
            "\u{cd}sn\u{2019}t This W\u{f6}rking?"
        );
        assert_eq!(
            to_title_case("from the \u{2019}\u{eb}arth to the moon", None),
            "From the \u{2019}\u{cb}arth to the Moon"
        );
    }

    #[test]
    fn test_title_case_small_words() {
        let options = TitleCaseOptions {
            short_small: vec!["'em".to_string()],
            ..TitleCaseOptions::default()
        };
        assert_eq!(
            to_title_case("read \u{2019}em and weep", Some(options)),
            "Read \u{2019}em and Weep"
        );
    }

    #[test]
    fn test_title_case_specials() {
        assert_eq!(to_title_case("YOUR NEW IPHONE", None), "Your New iPhone");
        let options = TitleCaseOptions {
            special: vec!["USA".to_string()],
            ..TitleCaseOptions::default()
        };
        assert_eq!(
            to_title_case("born in the usa", Some(options)),
            "Born in the USA"
        );
    }

    #[test]
    fn test_title_case_keep_all_caps() {
        let options = TitleCaseOptions {
            keep_all_caps: true,
            ..TitleCaseOptions::default()
        };
        assert_eq!(
            to_title_case("born in the USA", Some(options)),
            "Born in the USA"
        );

        let options = TitleCaseOptions {
            keep_all_caps: true,
            short_small: vec!["-in".to_string(), "ol'".to_string()],
            ..TitleCaseOptions::default()
        };
        assert_eq!(
            to_title_case("born in the ol' USA", Some(options)),
            "Born In the ol' USA"
        );
    }
}
