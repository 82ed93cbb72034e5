use std::collections::HashSet;

use kitbag_values::{Kind, Value};

/// Decides where deep copying stops and the original sub-value is handed
/// through by reference instead.
///
/// The policy is consulted for every reference-kind candidate before it is
/// copied, with the candidate's depth (0 for the root). Returning `true`
/// keeps that value, and everything beneath it, shared with the input.
pub trait ClonePolicy {
    fn stop_here(&self, value: &Value, depth: usize) -> bool;
}

/// Copy everything. The default policy.
pub struct Deep;

impl ClonePolicy for Deep {
    fn stop_here(&self, _value: &Value, _depth: usize) -> bool {
        false
    }
}

/// Copy only the root level: every direct child value is handed through by
/// reference. The root itself is always rebuilt.
pub struct Shallow;

impl ClonePolicy for Shallow {
    fn stop_here(&self, _value: &Value, depth: usize) -> bool {
        depth > 0
    }
}

/// A runtime type or class a [`TagSet`] policy can match on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Record,
    Array,
    Map,
    Set,
    Date,
    Pattern,
    Buffer,
    /// Matches values whose nominal class tag equals the given name
    /// (record class tags, but also `"Date"`, `"Float32Array"`, …).
    Class(String),
}

impl TypeTag {
    fn matches(&self, value: &Value) -> bool {
        match self {
            TypeTag::Record => value.kind() == Kind::Record,
            TypeTag::Array => value.kind() == Kind::Array,
            TypeTag::Map => value.kind() == Kind::Map,
            TypeTag::Set => value.kind() == Kind::Set,
            TypeTag::Date => value.kind() == Kind::Date,
            TypeTag::Pattern => value.kind() == Kind::Pattern,
            TypeTag::Buffer => value.kind() == Kind::Buffer,
            TypeTag::Class(name) => value.class_of().as_deref() == Some(name),
        }
    }
}

/// Hand through, at any depth, every value whose runtime type or class
/// matches one of the tags.
///
/// # Examples
///
/// ```
/// use kitbag_util::deep_clone::{clone_with, TagSet, TypeTag};
/// use kitbag_values::Value;
///
/// let sample = Value::record_from([("when", Value::date(0))]);
/// let copy = clone_with(&sample, &TagSet::new([TypeTag::Date]));
///
/// let original_date = sample.get_property(&"when".into()).unwrap();
/// let copied_date = copy.get_property(&"when".into()).unwrap();
/// assert!(original_date.same_value(&copied_date));
/// ```
pub struct TagSet {
    tags: HashSet<TypeTag>,
}

impl TagSet {
    pub fn new(tags: impl IntoIterator<Item = TypeTag>) -> TagSet {
        TagSet {
            tags: tags.into_iter().collect(),
        }
    }
}

impl ClonePolicy for TagSet {
    fn stop_here(&self, value: &Value, _depth: usize) -> bool {
        self.tags.iter().any(|tag| tag.matches(value))
    }
}

/// Adapter turning any `Fn(&Value, usize) -> bool` predicate into a policy.
///
/// # Examples
///
/// ```
/// use kitbag_util::deep_clone::{clone_with, Cutoff};
/// use kitbag_values::{Kind, Value};
///
/// let sample = Value::record_from([("when", Value::date(0))]);
/// let copy = clone_with(&sample, &Cutoff(|value: &Value, _depth| value.kind() == Kind::Date));
/// let original_date = sample.get_property(&"when".into()).unwrap();
/// assert!(original_date.same_value(&copy.get_property(&"when".into()).unwrap()));
/// ```
pub struct Cutoff<F: Fn(&Value, usize) -> bool>(pub F);

impl<F: Fn(&Value, usize) -> bool> ClonePolicy for Cutoff<F> {
    fn stop_here(&self, value: &Value, depth: usize) -> bool {
        (self.0)(value, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_never_stops() {
        assert!(!Deep.stop_here(&Value::record(), 0));
        assert!(!Deep.stop_here(&Value::record(), 10));
    }

    #[test]
    fn test_shallow_spares_the_root() {
        assert!(!Shallow.stop_here(&Value::record(), 0));
        assert!(Shallow.stop_here(&Value::record(), 1));
    }

    #[test]
    fn test_tag_set_matches_kind_and_class() {
        let tags = TagSet::new([TypeTag::Date, TypeTag::Class("Point".to_string())]);
        assert!(tags.stop_here(&Value::date(0), 3));
        assert!(tags.stop_here(&Value::record_with_class("Point"), 3));
        assert!(!tags.stop_here(&Value::record(), 3));
        assert!(!tags.stop_here(&Value::map(), 3));
    }

    #[test]
    fn test_cutoff_sees_depth() {
        let policy = Cutoff(|_: &Value, depth| depth > 2);
        assert!(!policy.stop_here(&Value::record(), 2));
        assert!(policy.stop_here(&Value::record(), 3));
    }
}
