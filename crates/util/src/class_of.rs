//! Nominal class tag readout.

use kitbag_values::Value;

/// The nominal class of a value: a record's class tag, or the
/// conventional name of a built-in reference kind. `None` for primitives,
/// functions and untagged records.
///
/// # Examples
///
/// ```
/// use kitbag_util::class_of::class_of;
/// use kitbag_values::Value;
///
/// assert_eq!(class_of(&Value::number(3.0)), None);
/// assert_eq!(class_of(&Value::date(0)).as_deref(), Some("Date"));
/// ```
pub fn class_of(value: &Value) -> Option<String> {
    value.class_of()
}

/// Like [`class_of`], but untagged values report as `no-class:<kind>`.
pub fn class_of_or_kind(value: &Value) -> String {
    value.class_of_or_kind()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitbag_values::ElementKind;

    #[test]
    fn test_class_of() {
        assert_eq!(class_of(&Value::number(3.0)), None);
        assert_eq!(class_of_or_kind(&Value::number(3.0)), "no-class:number");
        assert_eq!(class_of(&Value::date(0)).as_deref(), Some("Date"));
        assert_eq!(
            class_of(&Value::record_with_class("TestClass")).as_deref(),
            Some("TestClass")
        );
        assert_eq!(
            class_of(&Value::buffer_from(ElementKind::F32, &[1.0])).as_deref(),
            Some("Float32Array")
        );
    }
}
