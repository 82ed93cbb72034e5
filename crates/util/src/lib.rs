//! kitbag-util: deep clone, deep structural equality, and the small pure
//! utilities that surround them.
//!
//! The two core algorithms operate over the `kitbag-values` model:
//! [`deep_clone::clone`] produces a fully independent copy of an arbitrary
//! value graph (cycles and shared sub-graphs included), and
//! [`deep_equal::is_equal`] judges recursive structural equivalence. The
//! remaining modules are independent, stateless helpers: type predicates,
//! array access, string/number coercion, date formatting, and a grab-bag of
//! string transforms.

pub mod arrays;
pub mod class_of;
pub mod coerce;
pub mod date_format;
pub mod deep_clone;
pub mod deep_equal;
pub mod misc;
pub mod predicates;
pub mod random;
pub mod strings;

// Re-exports for convenience
pub use arrays::{first, flatten, flatten_deep, last, nfe, nth, num_sort, reverse_num_sort, ufe};
pub use class_of::{class_of, class_of_or_kind};
pub use coerce::{
    to_boolean, to_int, to_int_radix, to_number, to_valid_int, to_valid_number, value_to_number,
};
pub use date_format::{format_date_time, format_date_time_now, DateTimeOptions};
pub use deep_clone::{clone, clone_shallow, clone_with, ClonePolicy, Cutoff, Deep, Shallow, TagSet, TypeTag};
pub use deep_equal::{is_equal, is_equal_with, EqualityOptions};
pub use misc::{
    compare_dotted_values, get_or_set, get_or_set_btree, is_valid_json, process_millis, repeat,
    sort_object_entries, sort_object_entries_by,
};
pub use predicates::{
    is_array, is_array_like, is_big_int, is_boolean, is_function, is_non_function_object,
    is_number, is_object, is_string, is_symbol,
};
pub use random::RandomValues;
pub use strings::{
    as_lines, as_lines_trimmed, checksum53, checksum53_seeded, compare_case_insensitive,
    compare_case_secondary, compare_strings, convert_digits, convert_digits_to_ascii, digit_script,
    extend_delimited, extend_delimited_with, is_all_uppercase, is_all_uppercase_words, is_digit,
    make_plain_ascii, make_plain_ascii_lc, make_plain_ascii_uc, pad_left, pad_left_num, pad_right,
    regex_escape, strip_diacriticals, strip_diacriticals_lc, strip_latin_diacriticals,
    to_max_fixed, to_max_fixed_grouped, to_max_significant, to_max_significant_grouped,
    to_mixed_case, to_title_case, zero_pad, DigitScript, TitleCaseOptions,
};
