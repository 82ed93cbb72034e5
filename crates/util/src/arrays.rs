//! Positional access and reshaping of array-like values.
//!
//! These helpers accept any array-like [`Value`] (arrays and numeric
//! buffers). A hole in a sparse array reads as `Undefined`, the way an
//! unassigned index reads anywhere else.

use std::cmp::Ordering;

use kitbag_values::Value;

use crate::coerce::value_to_number;

fn array_like_len(value: &Value) -> Option<usize> {
    match value {
        Value::Array(cell) => Some(cell.borrow().len()),
        Value::Buffer(cell) => Some(cell.borrow().len()),
        _ => None,
    }
}

fn element_at(value: &Value, index: usize) -> Option<Value> {
    match value {
        Value::Array(cell) => {
            let array = cell.borrow();
            if index < array.len() {
                Some(array.get(index).cloned().unwrap_or(Value::Undefined))
            } else {
                None
            }
        }
        Value::Buffer(cell) => cell.borrow().get(index).map(Value::number),
        _ => None,
    }
}

/// The first element of an array-like value.
pub fn first(value: &Value) -> Option<Value> {
    element_at(value, 0)
}

/// The last element of an array-like value; `None` when empty.
pub fn last(value: &Value) -> Option<Value> {
    let len = array_like_len(value)?;
    element_at(value, len.checked_sub(1)?)
}

/// The element at `index`; negative indexes count back from the end.
///
/// # Examples
///
/// ```
/// use kitbag_util::arrays::nth;
/// use kitbag_values::Value;
///
/// let a = Value::array(vec![Value::from(1.1), Value::from(2.0), Value::from(4.0)]);
/// assert_eq!(nth(&a, 1).unwrap().as_number(), Some(2.0));
/// assert_eq!(nth(&a, -1).unwrap().as_number(), Some(4.0));
/// assert!(nth(&a, 10).is_none());
/// ```
pub fn nth(value: &Value, index: i64) -> Option<Value> {
    let len = array_like_len(value)? as i64;
    let at = if index < 0 { len + index } else { index };
    if (0..len).contains(&at) {
        element_at(value, at as usize)
    } else {
        None
    }
}

/// Flatten one level of nesting. Non-array elements are kept; holes are
/// dropped. A non-array input is returned unchanged.
pub fn flatten(value: &Value) -> Value {
    flatten_to_depth(value, 1)
}

/// Flatten nested arrays completely.
pub fn flatten_deep(value: &Value) -> Value {
    flatten_to_depth(value, usize::MAX)
}

fn flatten_to_depth(value: &Value, depth: usize) -> Value {
    let Some(cell) = value.as_array() else {
        return value.clone();
    };
    let mut out = Vec::new();
    for slot in cell.borrow().elements.iter() {
        let Some(element) = slot else { continue };
        match element.as_array() {
            Some(_) if depth > 0 => {
                let flattened = flatten_to_depth(element, depth - 1);
                let inner = flattened.as_array().expect("flatten returns arrays");
                for nested in inner.borrow().elements.iter() {
                    if let Some(v) = nested {
                        out.push(v.clone());
                    }
                }
            }
            _ => out.push(element.clone()),
        }
    }
    Value::array(out)
}

/// `None` for an empty vector, the vector otherwise.
pub fn nfe<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Alias of [`nfe`]; kept so both spellings of "empty collapses to
/// absence" read naturally at call sites.
pub fn ufe<T>(values: Vec<T>) -> Option<Vec<T>> {
    nfe(values)
}

/// Numeric sort comparator: orders by numeric value, coercing numeric
/// strings; values with no numeric reading sort last.
///
/// # Examples
///
/// ```
/// use kitbag_util::arrays::num_sort;
/// use kitbag_values::Value;
///
/// let mut values = vec![
///     Value::from(10.0),
///     Value::from(2.0),
///     Value::str("5"),
///     Value::from(20.0),
/// ];
/// values.sort_by(num_sort);
/// let order: Vec<_> = values.iter().map(|v| kitbag_util::coerce::value_to_number(v).unwrap()).collect();
/// assert_eq!(order, vec![2.0, 5.0, 10.0, 20.0]);
/// ```
pub fn num_sort(a: &Value, b: &Value) -> Ordering {
    match (value_to_number(a), value_to_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// [`num_sort`] reversed.
pub fn reverse_num_sort(a: &Value, b: &Value) -> Ordering {
    num_sort(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitbag_values::ElementKind;

    fn sample() -> Value {
        Value::array(vec![
            Value::from(1.1),
            Value::from(2.0),
            Value::from(4.0),
            Value::from(-3.0),
        ])
    }

    #[test]
    fn test_first_last_nth() {
        let a = sample();
        assert_eq!(first(&a).unwrap().as_number(), Some(1.1));
        assert_eq!(last(&a).unwrap().as_number(), Some(-3.0));
        assert_eq!(nth(&a, 2).unwrap().as_number(), Some(4.0));
        assert!(nth(&a, 10).is_none());
        assert_eq!(nth(&a, -2).unwrap().as_number(), Some(4.0));

        assert!(last(&Value::array(vec![])).is_none());
        assert!(last(&Value::Null).is_none());
        assert_eq!(
            last(&Value::array(vec![Value::str("alpha"), Value::str("omega")]))
                .unwrap()
                .as_str(),
            Some("omega")
        );
    }

    #[test]
    fn test_buffers_are_array_like() {
        let buffer = Value::buffer_from(ElementKind::U8, &[7.0, 9.0]);
        assert_eq!(first(&buffer).unwrap().as_number(), Some(7.0));
        assert_eq!(last(&buffer).unwrap().as_number(), Some(9.0));
    }

    #[test]
    fn test_hole_reads_as_undefined() {
        let sparse = Value::array_empty();
        sparse.as_array().unwrap().borrow_mut().push_hole();
        assert!(matches!(first(&sparse), Some(Value::Undefined)));
    }

    #[test]
    fn test_flatten() {
        let nested = Value::array(vec![
            Value::from(1.0),
            Value::array(vec![
                Value::from(2.0),
                Value::array(vec![Value::from(3.0), Value::from(4.0)]),
            ]),
            Value::from(5.0),
        ]);

        let one_level = flatten(&nested);
        let outer = one_level.as_array().unwrap().borrow();
        assert_eq!(outer.len(), 4);
        assert!(outer.get(2).unwrap().as_array().is_some());
        drop(outer);

        let all = flatten_deep(&nested);
        let flat = all.as_array().unwrap().borrow();
        let numbers: Vec<_> = flat
            .elements
            .iter()
            .map(|slot| slot.as_ref().unwrap().as_number().unwrap())
            .collect();
        assert_eq!(numbers, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_flatten_already_flat() {
        let flat = Value::array(vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)]);
        let result = flatten(&flat);
        assert_eq!(result.as_array().unwrap().borrow().len(), 3);
    }

    #[test]
    fn test_nfe_ufe() {
        assert_eq!(nfe(vec![1]), Some(vec![1]));
        assert_eq!(nfe(Vec::<i32>::new()), None);
        assert_eq!(ufe(vec![2, 3]), Some(vec![2, 3]));
        assert_eq!(ufe(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_num_sort() {
        let mut values = vec![
            Value::from(10.0),
            Value::from(2.0),
            Value::from(5.0),
            Value::from(20.0),
        ];
        values.sort_by(num_sort);
        let order: Vec<_> = values.iter().filter_map(|v| v.as_number()).collect();
        assert_eq!(order, vec![2.0, 5.0, 10.0, 20.0]);

        values.sort_by(reverse_num_sort);
        let order: Vec<_> = values.iter().filter_map(|v| v.as_number()).collect();
        assert_eq!(order, vec![20.0, 10.0, 5.0, 2.0]);
    }
}
