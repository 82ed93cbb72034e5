//! Conversion between the dynamic value model and JSON trees.
//!
//! `from_json` is total: every JSON value has a model counterpart.
//! `to_json` is not: cyclic graphs and the kinds JSON cannot express
//! (functions, symbols, maps, sets) are reported as errors rather than
//! silently dropped.

use std::collections::HashSet;

use serde_json::{Map, Number};
use thiserror::Error;

use crate::key::PropertyKey;
use crate::value::Value;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("cyclic value cannot be converted to JSON")]
    CyclicValue,
    #[error("{0} values cannot be converted to JSON")]
    Unsupported(&'static str),
    #[error("non-finite number cannot be converted to JSON")]
    NonFiniteNumber,
    #[error("date is outside the representable calendar range")]
    DateOutOfRange,
}

impl Value {
    /// Build a model value from a JSON tree. Objects become untagged
    /// records (key order preserved), arrays become dense arrays.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(number_to_f64(&n)),
            serde_json::Value::String(s) => Value::str(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::record_from(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from_json(value))),
            ),
        }
    }

    /// Render the JSON-representable projection of this value.
    ///
    /// Dates render as ISO-8601 strings, buffers as number arrays, big
    /// integers as decimal strings, `Undefined` and holes as JSON null.
    /// Record class tags and symbol-keyed properties are dropped, the way
    /// a plain JSON serialization would drop them.
    pub fn to_json(&self) -> Result<serde_json::Value, JsonError> {
        self.to_json_inner(&mut HashSet::new())
    }

    fn to_json_inner(&self, active: &mut HashSet<usize>) -> Result<serde_json::Value, JsonError> {
        match self {
            Value::Undefined | Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => f64_to_number(*n)
                .map(serde_json::Value::Number)
                .ok_or(JsonError::NonFiniteNumber),
            Value::BigInt(n) => Ok(serde_json::Value::String(n.to_string())),
            Value::Str(s) => Ok(serde_json::Value::String(s.to_string())),
            Value::Symbol(_) => Err(JsonError::Unsupported("symbol")),
            Value::Function(_) => Err(JsonError::Unsupported("function")),
            Value::Map(_) => Err(JsonError::Unsupported("map")),
            Value::Set(_) => Err(JsonError::Unsupported("set")),
            Value::Date(date) => date
                .to_iso_string()
                .map(serde_json::Value::String)
                .ok_or(JsonError::DateOutOfRange),
            Value::Pattern(pattern) => Ok(serde_json::Value::String(format!(
                "/{}/{}",
                pattern.source(),
                pattern.flags()
            ))),
            Value::Buffer(cell) => {
                let buffer = cell.borrow();
                let mut items = Vec::with_capacity(buffer.len());
                for index in 0..buffer.len() {
                    let element = buffer.get(index).unwrap_or(0.0);
                    items.push(
                        f64_to_number(element)
                            .map(serde_json::Value::Number)
                            .ok_or(JsonError::NonFiniteNumber)?,
                    );
                }
                Ok(serde_json::Value::Array(items))
            }
            Value::Record(cell) => {
                let id = self.identity().expect("records have an identity");
                if !active.insert(id) {
                    return Err(JsonError::CyclicValue);
                }
                let record = cell.borrow();
                let mut entries = Map::new();
                for (key, value) in record.properties.iter() {
                    if let PropertyKey::Str(name) = key {
                        entries.insert(name.clone(), value.to_json_inner(active)?);
                    }
                }
                active.remove(&id);
                Ok(serde_json::Value::Object(entries))
            }
            Value::Array(cell) => {
                let id = self.identity().expect("arrays have an identity");
                if !active.insert(id) {
                    return Err(JsonError::CyclicValue);
                }
                let array = cell.borrow();
                let mut items = Vec::with_capacity(array.len());
                for slot in array.elements.iter() {
                    items.push(match slot {
                        Some(value) => value.to_json_inner(active)?,
                        None => serde_json::Value::Null,
                    });
                }
                active.remove(&id);
                Ok(serde_json::Value::Array(items))
            }
        }
    }
}

fn number_to_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

// JSON has one number type; render integral doubles as integers so that
// values read from JSON round-trip to the exact tokens they came from.
fn f64_to_number(n: f64) -> Option<Number> {
    const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= SAFE_INTEGER {
        Some(Number::from(n as i64))
    } else {
        Number::from_f64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_shapes() {
        let value = Value::from_json(json!({"a": 5, "b": {"c": -7}, "d": [1, null, true]}));
        let record = value.as_record().unwrap().borrow();
        assert_eq!(record.properties.len(), 3);
        let d = record.get(&PropertyKey::from("d")).unwrap();
        assert_eq!(d.as_array().unwrap().borrow().len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let json = json!({"a": 5.5, "b": [1, 2, [3, 4]], "c": "text", "d": null});
        let value = Value::from_json(json.clone());
        assert_eq!(value.to_json().unwrap(), json);
    }

    #[test]
    fn test_key_order_preserved() {
        let value = Value::from_json(json!({"b": 1, "a": 2}));
        let rendered = serde_json::to_string(&value.to_json().unwrap()).unwrap();
        assert_eq!(rendered, r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_date_and_buffer_rendering() {
        let value = Value::record_from([
            ("when", Value::date(1_617_280_440_000)),
            (
                "data",
                Value::buffer_from(crate::ElementKind::U8, &[1.0, 2.0]),
            ),
        ]);
        assert_eq!(
            value.to_json().unwrap(),
            json!({"when": "2021-04-01T12:34:00.000Z", "data": [1, 2]})
        );
    }

    #[test]
    fn test_cycle_is_an_error() {
        let record = Value::record();
        record
            .as_record()
            .unwrap()
            .borrow_mut()
            .insert("own", record.clone());
        assert!(matches!(record.to_json(), Err(JsonError::CyclicValue)));
    }

    #[test]
    fn test_shared_subtrees_are_not_cycles() {
        let shared = Value::record_from([("x", Value::from(1.0))]);
        let value = Value::record_from([("a", shared.clone()), ("b", shared)]);
        assert_eq!(value.to_json().unwrap(), json!({"a": {"x": 1}, "b": {"x": 1}}));
    }

    #[test]
    fn test_unsupported_kinds() {
        assert!(matches!(
            Value::map().to_json(),
            Err(JsonError::Unsupported("map"))
        ));
        assert!(matches!(
            Value::function(None).to_json(),
            Err(JsonError::Unsupported("function"))
        ));
        assert!(matches!(
            Value::number(f64::NAN).to_json(),
            Err(JsonError::NonFiniteNumber)
        ));
    }
}
