//! String transforms: line splitting, padding, case conversion,
//! diacritical stripping, ASCII folding, digit-script conversion,
//! checksums, and bounded-precision number rendering.

mod case;
mod checksum;
mod compare;
mod digits;
mod escape;
mod fold;
mod lines;
mod numfmt;
mod pad;

pub use case::{
    is_all_uppercase, is_all_uppercase_words, to_mixed_case, to_title_case, TitleCaseOptions,
};
pub use checksum::{checksum53, checksum53_seeded};
pub use compare::{compare_case_insensitive, compare_case_secondary, compare_strings};
pub use digits::{
    convert_digits, convert_digits_to_ascii, digit_script, is_digit, DigitScript,
};
pub use escape::regex_escape;
pub use fold::{
    make_plain_ascii, make_plain_ascii_lc, make_plain_ascii_uc, strip_diacriticals,
    strip_diacriticals_lc, strip_latin_diacriticals,
};
pub use lines::{as_lines, as_lines_trimmed, extend_delimited, extend_delimited_with};
pub use numfmt::{
    to_max_fixed, to_max_fixed_grouped, to_max_significant, to_max_significant_grouped,
};
pub use pad::{pad_left, pad_left_num, pad_right, zero_pad};
