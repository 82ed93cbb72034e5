//! Runtime type predicates over [`Value`].

use kitbag_values::{Kind, Value};

/// True for indexed sequences.
pub fn is_array(value: &Value) -> bool {
    value.kind() == Kind::Array
}

/// True for anything indexable by position with a known length: arrays and
/// numeric buffers.
pub fn is_array_like(value: &Value) -> bool {
    matches!(value.kind(), Kind::Array | Kind::Buffer)
}

pub fn is_boolean(value: &Value) -> bool {
    value.kind() == Kind::Bool
}

pub fn is_big_int(value: &Value) -> bool {
    value.kind() == Kind::BigInt
}

pub fn is_function(value: &Value) -> bool {
    value.kind() == Kind::Function
}

/// True for numbers, `NaN` included.
pub fn is_number(value: &Value) -> bool {
    value.kind() == Kind::Number
}

pub fn is_string(value: &Value) -> bool {
    value.kind() == Kind::Str
}

pub fn is_symbol(value: &Value) -> bool {
    value.kind() == Kind::Symbol
}

/// True for every reference kind and for functions: anything held by
/// identity rather than by value.
pub fn is_object(value: &Value) -> bool {
    value.kind().is_reference() || value.kind() == Kind::Function
}

/// Like [`is_object`], excluding functions.
pub fn is_non_function_object(value: &Value) -> bool {
    value.kind().is_reference()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_predicates() {
        assert!(!is_array(&Value::number(5.0)));
        assert!(!is_array(&Value::str("foo")));
        assert!(is_array(&Value::array(vec![Value::from(-7.0)])));

        assert!(!is_array_like(&Value::number(-7.0)));
        assert!(is_array_like(&Value::array(vec![Value::from(-7.0)])));
        assert!(is_array_like(&Value::buffer_from(
            kitbag_values::ElementKind::U8,
            &[1.0]
        )));
    }

    #[test]
    fn test_scalar_predicates() {
        assert!(!is_boolean(&Value::number(-7.0)));
        assert!(is_boolean(&Value::Bool(false)));

        assert!(is_number(&Value::number(std::f64::consts::PI)));
        assert!(is_number(&Value::number(f64::NAN)));
        assert!(!is_number(&Value::function(None)));

        assert!(is_string(&Value::str("bar")));
        assert!(!is_string(&Value::number(f64::NAN)));

        assert!(is_symbol(&Value::symbol(Some("bar"))));
        assert!(!is_symbol(&Value::number(std::f64::consts::PI)));

        assert!(is_big_int(&Value::bigint(7)));
        assert!(!is_big_int(&Value::number(7.0)));
    }

    #[test]
    fn test_object_predicates() {
        assert!(!is_function(&Value::number(-7.0)));
        assert!(is_function(&Value::function(Some("bar"))));

        assert!(!is_non_function_object(&Value::number(std::f64::consts::PI)));
        assert!(is_non_function_object(&Value::record()));
        assert!(!is_non_function_object(&Value::function(None)));
        assert!(!is_non_function_object(&Value::str("baz")));

        assert!(!is_object(&Value::number(std::f64::consts::PI)));
        assert!(is_object(&Value::record()));
        assert!(is_object(&Value::function(None)));
        assert!(!is_object(&Value::str("baz")));
    }
}
