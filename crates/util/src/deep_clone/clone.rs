use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kitbag_values::{ArrayObject, DateObject, MapObject, Record, SetObject, Value};

use super::policy::{ClonePolicy, Deep, Shallow};

/// Produce a fully independent deep copy of a value.
///
/// Primitives, symbols and functions are handed through unchanged; every
/// reference kind is rebuilt from fresh allocations. Cyclic graphs
/// terminate, and sub-graphs that were shared in the input are shared (as
/// one clone) in the output.
///
/// # Examples
///
/// ```
/// use kitbag_util::deep_clone::clone;
/// use kitbag_values::Value;
///
/// let original = Value::record_from([("a", Value::from(5.0))]);
/// let copy = clone(&original);
///
/// copy.as_record().unwrap().borrow_mut().insert("a", Value::from(9.0));
/// let untouched = original.get_property(&"a".into()).unwrap();
/// assert_eq!(untouched.as_number(), Some(5.0));
/// ```
pub fn clone(value: &Value) -> Value {
    clone_with(value, &Deep)
}

/// Copy only the root level; every direct child is handed through by
/// reference.
pub fn clone_shallow(value: &Value) -> Value {
    clone_with(value, &Shallow)
}

/// Deep copy with a configurable recursion cutoff.
pub fn clone_with<P: ClonePolicy + ?Sized>(value: &Value, policy: &P) -> Value {
    Cloner {
        policy,
        seen: HashMap::new(),
    }
    .clone_value(value, 0)
}

struct Cloner<'p, P: ?Sized> {
    policy: &'p P,
    // source identity -> its clone, for cycle termination and aliasing
    seen: HashMap<usize, Value>,
}

impl<P: ClonePolicy + ?Sized> Cloner<'_, P> {
    fn clone_value(&mut self, value: &Value, depth: usize) -> Value {
        if !value.kind().is_reference() {
            // Primitives copy by value; functions intentionally keep their
            // identity, so a copied graph calls the same callables.
            return value.clone();
        }
        if self.policy.stop_here(value, depth) {
            return value.clone();
        }

        let id = value.identity().expect("reference kinds have an identity");
        if let Some(existing) = self.seen.get(&id) {
            return existing.clone();
        }

        // Each container registers its empty shell before descending, so a
        // cycle back to it resolves to the clone under construction.
        match value {
            Value::Record(cell) => {
                let source = cell.borrow();
                let shell = Rc::new(RefCell::new(Record {
                    class: source.class.clone(),
                    properties: Default::default(),
                }));
                let out = Value::Record(shell.clone());
                self.seen.insert(id, out.clone());
                for (key, child) in source.properties.iter() {
                    let copied = self.clone_value(child, depth + 1);
                    shell.borrow_mut().properties.insert(key.clone(), copied);
                }
                out
            }
            Value::Array(cell) => {
                let source = cell.borrow();
                let shell = Rc::new(RefCell::new(ArrayObject::new()));
                let out = Value::Array(shell.clone());
                self.seen.insert(id, out.clone());
                for slot in source.elements.iter() {
                    let copied = slot.as_ref().map(|child| self.clone_value(child, depth + 1));
                    shell.borrow_mut().elements.push(copied);
                }
                for (key, child) in source.properties.iter() {
                    let copied = self.clone_value(child, depth + 1);
                    shell.borrow_mut().properties.insert(key.clone(), copied);
                }
                out
            }
            Value::Map(cell) => {
                let source = cell.borrow();
                let shell = Rc::new(RefCell::new(MapObject::new()));
                let out = Value::Map(shell.clone());
                self.seen.insert(id, out.clone());
                for (key, child) in source.entries() {
                    let key_copy = self.clone_value(key, depth + 1);
                    let value_copy = self.clone_value(child, depth + 1);
                    shell.borrow_mut().push_entry(key_copy, value_copy);
                }
                out
            }
            Value::Set(cell) => {
                let source = cell.borrow();
                let shell = Rc::new(RefCell::new(SetObject::new()));
                let out = Value::Set(shell.clone());
                self.seen.insert(id, out.clone());
                for element in source.values() {
                    let copied = self.clone_value(element, depth + 1);
                    shell.borrow_mut().add(copied);
                }
                out
            }
            Value::Date(date) => {
                let out = Value::Date(Rc::new(DateObject::new(date.time())));
                self.seen.insert(id, out.clone());
                out
            }
            Value::Pattern(pattern) => {
                let out = Value::Pattern(Rc::new(pattern.as_ref().clone()));
                self.seen.insert(id, out.clone());
                out
            }
            Value::Buffer(cell) => {
                let out = Value::buffer(cell.borrow().clone());
                self.seen.insert(id, out.clone());
                out
            }
            _ => unreachable!("non-reference kinds are handled above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep_clone::{Cutoff, TagSet, TypeTag};
    use crate::deep_equal::is_equal;
    use crate::random::RandomValues;
    use kitbag_values::{ElementKind, Kind, PropertyKey};
    use proptest::prelude::*;

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(clone(&Value::number(5.0)).as_number(), Some(5.0));
        assert_eq!(clone(&Value::str("it")).as_str(), Some("it"));
        assert_eq!(clone(&Value::Bool(false)).as_bool(), Some(false));
        assert!(matches!(clone(&Value::Null), Value::Null));
        assert!(matches!(clone(&Value::Undefined), Value::Undefined));
    }

    #[test]
    fn test_functions_keep_identity() {
        let f = Value::function(Some("callback"));
        assert!(clone(&f).same_value(&f));
    }

    #[test]
    fn test_nested_records_and_arrays() {
        let original = Value::record_from([
            ("a", Value::from(5.0)),
            ("b", Value::record_from([("c", Value::from(-7.0))])),
            (
                "list",
                Value::array(vec![
                    Value::from(1.0),
                    Value::from(2.0),
                    Value::array(vec![Value::from(3.0), Value::from(4.0)]),
                ]),
            ),
        ]);
        let copy = clone(&original);
        assert!(is_equal(&copy, &original));
        assert!(!copy.same_value(&original));
    }

    #[test]
    fn test_leaf_mutation_does_not_leak() {
        let original = Value::record_from([("b", Value::record_from([("c", Value::from(-7.0))]))]);
        let copy = clone(&original);

        let inner = copy.get_property(&"b".into()).unwrap();
        inner
            .as_record()
            .unwrap()
            .borrow_mut()
            .insert("c", Value::from(99.0));

        let untouched = original
            .get_property(&"b".into())
            .unwrap()
            .get_property(&"c".into())
            .unwrap();
        assert_eq!(untouched.as_number(), Some(-7.0));
    }

    #[test]
    fn test_class_tag_survives() {
        let original = Value::record_with_class("TestClass");
        original
            .as_record()
            .unwrap()
            .borrow_mut()
            .insert("a", Value::from(44.0));
        let copy = clone(&original);
        assert_eq!(copy.class_of().as_deref(), Some("TestClass"));
        assert!(is_equal(&copy, &original));
    }

    #[test]
    fn test_aliasing_preserved() {
        let shared = Value::record_from([("x", Value::from(1.0))]);
        let original = Value::record_from([("a", shared.clone()), ("b", shared)]);
        let copy = clone(&original);

        let a = copy.get_property(&"a".into()).unwrap();
        let b = copy.get_property(&"b".into()).unwrap();
        assert!(a.same_value(&b));
        assert!(!a.same_value(&original.get_property(&"a".into()).unwrap()));
    }

    #[test]
    fn test_self_cycle_terminates() {
        let original = Value::record();
        original
            .as_record()
            .unwrap()
            .borrow_mut()
            .insert("own", original.clone());

        let copy = clone(&original);
        let inner = copy.get_property(&"own".into()).unwrap();
        assert!(inner.same_value(&copy));
        assert!(!inner.same_value(&original));
    }

    #[test]
    fn test_cycle_through_set() {
        let original = Value::set_from([Value::from(1.0), Value::from(2.0)]);
        original
            .as_set()
            .unwrap()
            .borrow_mut()
            .add(Value::array(vec![original.clone()]));

        let copy = clone(&original);
        let copied = copy.as_set().unwrap().borrow();
        assert_eq!(copied.len(), 3);
        let nested = copied.values()[2].as_array().unwrap().borrow();
        assert!(nested.get(0).unwrap().same_value(&copy));
    }

    #[test]
    fn test_date_copies_are_independent() {
        let original = Value::date(1_617_280_440_000);
        let copy = clone(&original);
        assert!(!copy.same_value(&original));
        copy.as_date().unwrap().set_time(0);
        assert_eq!(original.as_date().unwrap().time(), 1_617_280_440_000);
    }

    #[test]
    fn test_pattern_copies_match_alike() {
        let original = Value::pattern("\\d+", "i").unwrap();
        let copy = clone(&original);
        assert!(!copy.same_value(&original));
        let pattern = copy.as_pattern().unwrap();
        assert_eq!(pattern.source(), "\\d+");
        assert_eq!(pattern.flags(), "i");
        assert!(pattern.is_match("42"));
    }

    #[test]
    fn test_buffer_copy_independence() {
        let original = Value::buffer_from(ElementKind::F32, &[1.25]);
        let copy = clone(&original);
        copy.as_buffer().unwrap().borrow_mut().set(0, 9.0);
        assert_eq!(original.as_buffer().unwrap().borrow().get(0), Some(1.25));
        assert_eq!(copy.as_buffer().unwrap().borrow().get(0), Some(9.0));
    }

    #[test]
    fn test_map_and_set_entries_rebuilt() {
        let key = Value::record_from([("id", Value::from(2.0))]);
        let original = Value::map_from([(key.clone(), Value::from(78.0))]);
        let copy = clone(&original);

        let copied = copy.as_map().unwrap().borrow();
        assert_eq!(copied.len(), 1);
        let (copied_key, copied_value) = &copied.entries()[0];
        assert!(!copied_key.same_value(&key));
        assert_eq!(copied_value.as_number(), Some(78.0));

        let set = Value::set_from([Value::from(2.0), Value::from(78.0)]);
        let set_copy = clone(&set);
        assert!(set_copy.as_set().unwrap().borrow().has(&Value::from(78.0)));
    }

    #[test]
    fn test_sparse_arrays_keep_holes() {
        let original = Value::array_empty();
        {
            let mut array = original.as_array().unwrap().borrow_mut();
            array.push(Value::from(1.0));
            array.push_hole();
            array.push(Value::from(3.0));
        }
        let copy = clone(&original);
        let array = copy.as_array().unwrap().borrow();
        assert_eq!(array.len(), 3);
        assert!(array.elements[1].is_none());
    }

    #[test]
    fn test_shallow_shares_children() {
        let sample = Value::record_from([
            ("date", Value::date(7_000)),
            ("nested", Value::record_from([("x", Value::from(1.0))])),
        ]);
        let copy = clone_shallow(&sample);
        assert!(!copy.same_value(&sample));
        assert!(copy
            .get_property(&"date".into())
            .unwrap()
            .same_value(&sample.get_property(&"date".into()).unwrap()));
        assert!(copy
            .get_property(&"nested".into())
            .unwrap()
            .same_value(&sample.get_property(&"nested".into()).unwrap()));
    }

    #[test]
    fn test_tag_set_cutoff() {
        let sample = Value::record_from([
            ("date", Value::date(7_000)),
            ("nested", Value::record_from([("x", Value::from(1.0))])),
        ]);

        let copy = clone_with(&sample, &TagSet::new([TypeTag::Date]));
        assert!(copy
            .get_property(&"date".into())
            .unwrap()
            .same_value(&sample.get_property(&"date".into()).unwrap()));
        assert!(!copy
            .get_property(&"nested".into())
            .unwrap()
            .same_value(&sample.get_property(&"nested".into()).unwrap()));

        // A set that matches nothing in the graph deep-copies everything.
        let full = clone_with(&sample, &TagSet::new([TypeTag::Map]));
        assert!(!full
            .get_property(&"date".into())
            .unwrap()
            .same_value(&sample.get_property(&"date".into()).unwrap()));
    }

    #[test]
    fn test_predicate_cutoff() {
        let sample = Value::record_from([
            ("date", Value::date(7_000)),
            ("nested", Value::record_from([("x", Value::from(1.0))])),
        ]);

        let copy = clone_with(&sample, &Cutoff(|v: &Value, _| v.kind() == Kind::Date));
        assert!(copy
            .get_property(&"date".into())
            .unwrap()
            .same_value(&sample.get_property(&"date".into()).unwrap()));
        assert!(!copy
            .get_property(&"nested".into())
            .unwrap()
            .same_value(&sample.get_property(&"nested".into()).unwrap()));

        // A depth cutoff beyond the graph depth behaves like a deep copy.
        let deep = clone_with(&sample, &Cutoff(|_: &Value, depth| depth > 2));
        assert!(!deep
            .get_property(&"date".into())
            .unwrap()
            .same_value(&sample.get_property(&"date".into()).unwrap()));
    }

    #[test]
    fn test_array_named_properties_cloned() {
        let original = Value::array(vec![Value::from(1.0)]);
        original
            .as_array()
            .unwrap()
            .borrow_mut()
            .properties
            .insert(PropertyKey::from("foo"), Value::from(-7.0));
        let copy = clone(&original);
        assert_eq!(
            copy.get_property(&"foo".into()).and_then(|v| v.as_number()),
            Some(-7.0)
        );
    }

    proptest! {
        #[test]
        fn clone_is_equal_to_source(seed in any::<[u8; 32]>()) {
            let random = RandomValues::new(Some(seed));
            let value = random.value(3);
            let copy = clone(&value);
            prop_assert!(is_equal(&copy, &value));
            prop_assert!(is_equal(&value, &copy));
        }
    }
}
