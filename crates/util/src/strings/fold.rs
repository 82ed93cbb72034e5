use once_cell::sync::Lazy;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

// Base letters for U+00C0..=U+00FF, in order. Characters with no plain
// base letter (Æ, Ð, Þ, ß, ×, ÷) map to themselves.
const LATIN_1_FOLD: &str =
    "AAAAAAÆCEEEEIIIIÐNOOOOO×OUUUUYÞßaaaaaaæceeeeiiiiðnooooo÷ouuuuyþy";

static LATIN_1_TABLE: Lazy<Vec<char>> = Lazy::new(|| LATIN_1_FOLD.chars().collect());

fn fold_latin_1(ch: char) -> Option<char> {
    let code = ch as u32;
    (0xC0..=0xFF)
        .contains(&code)
        .then(|| LATIN_1_TABLE[(code - 0xC0) as usize])
}

// Canonical decomposition, accepted only when everything after the base
// character is a combining mark. Characters that do not decompose come
// back unchanged.
fn decomposed_base(ch: char) -> Option<char> {
    let mut base = None;
    let mut clean = true;
    decompose_canonical(ch, |piece| {
        if base.is_none() {
            base = Some(piece);
        } else if !is_combining_mark(piece) {
            clean = false;
        }
    });
    if clean {
        base
    } else {
        None
    }
}

/// Replace accented Latin letters with their base letters. Latin-1 and the
/// extended Latin blocks only; everything else passes through, as do the
/// Latin characters with no base letter (Æ, Ð, Þ, ß, ×, ÷).
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::strip_latin_diacriticals;
///
/// assert_eq!(strip_latin_diacriticals("café"), "cafe");
/// assert_eq!(strip_latin_diacriticals("Ångström"), "Angstrom");
/// ```
pub fn strip_latin_diacriticals(s: &str) -> String {
    s.chars()
        .map(|ch| {
            if let Some(folded) = fold_latin_1(ch) {
                return folded;
            }
            let code = ch as u32;
            if (0x100..=0x24F).contains(&code) {
                match decomposed_base(ch) {
                    Some(base) if base.is_ascii_alphabetic() => base,
                    _ => ch,
                }
            } else {
                ch
            }
        })
        .collect()
}

/// Replace accented letters of any script with their base letters, and
/// drop freestanding combining marks.
pub fn strip_diacriticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if is_combining_mark(ch) {
            continue;
        }
        if let Some(folded) = fold_latin_1(ch) {
            out.push(folded);
        } else {
            out.push(decomposed_base(ch).unwrap_or(ch));
        }
    }
    out
}

/// [`strip_diacriticals`], lowercased.
pub fn strip_diacriticals_lc(s: &str) -> String {
    strip_diacriticals(s).to_lowercase()
}

/// Fold to plain ASCII: strip diacriticals, expand the Latin letters with
/// no base form (Æ → Ae, Ð → Dh, Þ → Th, ß → ss), and replace anything
/// still outside ASCII with `_`. Expansions uppercase fully when the whole
/// input is uppercase. With `for_file_name`, characters that are unsafe in
/// file names are substituted as well.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::make_plain_ascii;
///
/// assert_eq!(make_plain_ascii("Þjóð", false), "Thjodh");
/// assert_eq!(make_plain_ascii("ÞJÓÐ", false), "THJODH");
/// assert_eq!(make_plain_ascii("[café*]", false), "[cafe*]");
/// assert_eq!(make_plain_ascii("[café*]", true), "(cafe-)");
/// ```
pub fn make_plain_ascii(s: &str, for_file_name: bool) -> String {
    let all_upper = s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase);

    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'Æ' => out.push_str(if all_upper { "AE" } else { "Ae" }),
            'æ' => out.push_str("ae"),
            'Ð' => out.push_str(if all_upper { "DH" } else { "Dh" }),
            'ð' => out.push_str("dh"),
            'Þ' => out.push_str(if all_upper { "TH" } else { "Th" }),
            'þ' => out.push_str("th"),
            'ß' => out.push_str("ss"),
            'Œ' => out.push_str(if all_upper { "OE" } else { "Oe" }),
            'œ' => out.push_str("oe"),
            '×' | '÷' => out.push('_'),
            _ if ch.is_ascii() => {
                if for_file_name {
                    out.push(match ch {
                        '[' | '<' => '(',
                        ']' | '>' => ')',
                        '*' | '?' | ':' | '/' | '\\' | '|' => '-',
                        '"' => '\'',
                        safe => safe,
                    });
                } else {
                    out.push(ch);
                }
            }
            _ => {
                let folded = fold_latin_1(ch)
                    .or_else(|| decomposed_base(ch))
                    .unwrap_or(ch);
                if folded.is_ascii() {
                    out.push(folded);
                } else {
                    out.push('_');
                }
            }
        }
    }
    out
}

/// [`make_plain_ascii`], lowercased.
pub fn make_plain_ascii_lc(s: &str, for_file_name: bool) -> String {
    make_plain_ascii(s, for_file_name).to_lowercase()
}

/// [`make_plain_ascii`], uppercased.
pub fn make_plain_ascii_uc(s: &str, for_file_name: bool) -> String {
    make_plain_ascii(s, for_file_name).to_uppercase()
}
