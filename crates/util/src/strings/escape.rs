/// Escape text for literal use inside a regular expression.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::regex_escape;
///
/// assert_eq!(regex_escape("foo[*]"), "foo\\[\\*\\]");
/// assert_eq!(regex_escape("abc.def$g"), "abc\\.def\\$g");
/// ```
pub fn regex_escape(s: &str) -> String {
    regex::escape(s)
}
