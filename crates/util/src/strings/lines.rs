use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new("\r\n|\r|\n").expect("valid literal pattern"));

/// Split text into lines at `\r\n`, `\r`, or `\n`.
///
/// An empty input has no lines; a trailing break produces a final empty
/// line, the same way the text would render.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::as_lines;
///
/// assert_eq!(as_lines(""), Vec::<String>::new());
/// assert_eq!(as_lines("no breaks"), vec!["no breaks"]);
/// assert_eq!(as_lines("foo\nbar\r\nbaz\rqux"), vec!["foo", "bar", "baz", "qux"]);
/// assert_eq!(as_lines("The end\n"), vec!["The end", ""]);
/// ```
pub fn as_lines(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    LINE_BREAK.split(s).map(str::to_string).collect()
}

/// Like [`as_lines`], dropping any run of trailing empty lines.
pub fn as_lines_trimmed(s: &str) -> Vec<String> {
    let mut lines = as_lines(s);
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Append an item to a delimited list, adding `", "` only when the base is
/// non-empty.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::extend_delimited;
///
/// let mut s = String::new();
/// s = extend_delimited(&s, "A");
/// assert_eq!(s, "A");
/// s = extend_delimited(&s, "B");
/// assert_eq!(s, "A, B");
/// ```
pub fn extend_delimited(base: &str, item: &str) -> String {
    extend_delimited_with(base, item, ", ")
}

/// [`extend_delimited`] with a caller-chosen delimiter.
pub fn extend_delimited_with(base: &str, item: &str, delimiter: &str) -> String {
    if base.is_empty() {
        item.to_string()
    } else {
        format!("{base}{delimiter}{item}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_lines() {
        assert_eq!(as_lines(""), Vec::<String>::new());
        assert_eq!(as_lines("no breaks"), vec!["no breaks"]);
        assert_eq!(as_lines("foo\nbar\r\nbaz\rqux"), vec!["foo", "bar", "baz", "qux"]);
        assert_eq!(as_lines("The end\n"), vec!["The end", ""]);
    }

    #[test]
    fn test_as_lines_trimmed() {
        assert_eq!(as_lines_trimmed("The\n\nend\n\n\n"), vec!["The", "", "end"]);
        assert_eq!(as_lines_trimmed("\n\n"), Vec::<String>::new());
        assert_eq!(as_lines_trimmed("solo"), vec!["solo"]);
    }

    #[test]
    fn test_extend_delimited() {
        let mut s = String::new();
        s = extend_delimited(&s, "A");
        assert_eq!(s, "A");
        s = extend_delimited(&s, "B");
        assert_eq!(s, "A, B");
        assert_eq!(extend_delimited_with("x", "y", "; "), "x; y");
    }
}
