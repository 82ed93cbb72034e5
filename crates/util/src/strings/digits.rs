/// A decimal digit script: its name and its zero character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitScript {
    pub name: &'static str,
    pub zero: char,
}

// Scripts with a contiguous 0..9 decimal digit run, by zero code point.
const DIGIT_SCRIPTS: &[(&str, u32)] = &[
    ("ASCII", 0x0030),
    ("Arabic", 0x0660),
    ("Extended Arabic", 0x06F0),
    ("Devanagari", 0x0966),
    ("Bengali", 0x09E6),
    ("Gurmukhi", 0x0A66),
    ("Gujarati", 0x0AE6),
    ("Oriya", 0x0B66),
    ("Tamil", 0x0BE6),
    ("Telugu", 0x0C66),
    ("Kannada", 0x0CE6),
    ("Malayalam", 0x0D66),
    ("Sinhala", 0x0DE6),
    ("Thai", 0x0E50),
    ("Lao", 0x0ED0),
    ("Tibetan", 0x0F20),
    ("Myanmar", 0x1040),
    ("Khmer", 0x17E0),
    ("Mongolian", 0x1810),
    ("Limbu", 0x1946),
    ("New Tai Lue", 0x19D0),
    ("Balinese", 0x1B50),
    ("Sundanese", 0x1BB0),
    ("Lepcha", 0x1C40),
    ("Ol Chiki", 0x1C50),
    ("Vai", 0xA620),
    ("Saurashtra", 0xA8D0),
    ("Kayah Li", 0xA900),
    ("Javanese", 0xA9D0),
    ("Cham", 0xAA50),
    ("Meetei Mayek", 0xABF0),
    ("Fullwidth", 0xFF10),
];

fn script_and_value(ch: char) -> Option<(DigitScript, u32)> {
    let code = ch as u32;
    DIGIT_SCRIPTS.iter().find_map(|&(name, zero)| {
        (zero..=zero + 9).contains(&code).then(|| {
            (
                DigitScript {
                    name,
                    zero: char::from_u32(zero).expect("table holds valid zeros"),
                },
                code - zero,
            )
        })
    })
}

/// True for a decimal digit of any known script.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));
/// assert!(!is_digit('q'));
/// ```
pub fn is_digit(ch: char) -> bool {
    script_and_value(ch).is_some()
}

/// The digit script of the first character, when it is a digit.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::digit_script;
///
/// assert_eq!(digit_script("4"), Some("ASCII"));
/// assert_eq!(digit_script("٣"), Some("Arabic"));
/// assert_eq!(digit_script("foo"), None);
/// ```
pub fn digit_script(s: &str) -> Option<&'static str> {
    let first = s.chars().next()?;
    script_and_value(first).map(|(script, _)| script.name)
}

/// Replace every non-ASCII digit with its ASCII counterpart. Also reports
/// the digit script that was last replaced, if any, so a later
/// [`convert_digits`] can restore the original presentation.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::convert_digits_to_ascii;
///
/// let (ascii, script) = convert_digits_to_ascii("foo ٠١٢٣٤ bar");
/// assert_eq!(ascii, "foo 01234 bar");
/// assert_eq!(script.unwrap().name, "Arabic");
/// ```
pub fn convert_digits_to_ascii(s: &str) -> (String, Option<DigitScript>) {
    let mut found = None;
    let converted = s
        .chars()
        .map(|ch| match script_and_value(ch) {
            Some((script, value)) if script.name != "ASCII" => {
                found = Some(script);
                char::from_u32('0' as u32 + value).expect("digits stay in ASCII")
            }
            _ => ch,
        })
        .collect();
    (converted, found)
}

/// Replace ASCII digits with the digits of the script containing
/// `sample`, which may be any digit of that script. Text comes back
/// unchanged when `sample` is not a known digit, or names the ASCII
/// script itself.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::convert_digits;
///
/// assert_eq!(convert_digits("foo 01234 bar", '٠'), "foo ٠١٢٣٤ bar");
/// assert_eq!(convert_digits("baz 56789 qux", '০'), "baz ৫৬৭৮৯ qux");
/// ```
pub fn convert_digits(s: &str, sample: char) -> String {
    let Some((script, _)) = script_and_value(sample) else {
        return s.to_string();
    };
    let zero = script.zero as u32;
    s.chars()
        .map(|ch| {
            if ch.is_ascii_digit() {
                char::from_u32(zero + (ch as u32 - '0' as u32)).expect("table holds valid runs")
            } else {
                ch
            }
        })
        .collect()
}
