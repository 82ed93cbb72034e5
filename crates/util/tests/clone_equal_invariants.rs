use kitbag_util::deep_clone::{clone, clone_with, Cutoff};
use kitbag_util::deep_equal::{is_equal, is_equal_with, EqualityOptions};
use kitbag_util::random::RandomValues;
use kitbag_values::{Kind, Value};

#[test]
fn clone_and_equality_invariants_hold_for_seeded_values() {
    for seed in seeds() {
        let random = RandomValues::new(Some(seed));
        for depth in 0..=4 {
            let value = random.value(depth);
            let copy = clone(&value);

            assert!(is_equal(&value, &value), "reflexivity seed={seed:?}");
            assert!(is_equal(&copy, &value), "copy equality seed={seed:?}");
            assert!(
                is_equal(&copy, &value) == is_equal(&value, &copy),
                "symmetry seed={seed:?}"
            );
        }
    }
}

#[test]
fn cloned_cyclic_graphs_stay_isomorphic() {
    for seed in seeds() {
        let random = RandomValues::new(Some(seed));
        let value = random.value(3);

        // splice the root into itself through a record property
        let holder = Value::record_from([("payload", value)]);
        holder
            .as_record()
            .unwrap()
            .borrow_mut()
            .insert("own", holder.clone());

        let copy = clone(&holder);
        assert!(copy
            .get_property(&"own".into())
            .unwrap()
            .same_value(&copy));
        assert!(is_equal(&copy, &holder), "cyclic equality seed={seed:?}");
    }
}

#[test]
fn shallow_cutoffs_share_exactly_the_matched_subtrees() {
    let sample = Value::record_from([
        ("when", Value::date(1_559_956_716_890)),
        ("tag", Value::str("event")),
        ("details", Value::record_from([("count", Value::from(3.0))])),
    ]);

    let copy = clone_with(&sample, &Cutoff(|v: &Value, _| v.kind() == Kind::Date));

    let shared = sample.get_property(&"when".into()).unwrap();
    assert!(copy.get_property(&"when".into()).unwrap().same_value(&shared));

    let rebuilt = sample.get_property(&"details".into()).unwrap();
    assert!(!copy
        .get_property(&"details".into())
        .unwrap()
        .same_value(&rebuilt));
    assert!(is_equal(&copy, &sample));
}

#[test]
fn ignored_keys_do_not_affect_other_properties() {
    let left = Value::record_from([
        ("kept", Value::str("same")),
        ("skipped", Value::from(1.0)),
    ]);
    let right = Value::record_from([
        ("kept", Value::str("same")),
        ("skipped", Value::from(2.0)),
    ]);

    assert!(!is_equal(&left, &right));
    assert!(is_equal_with(
        &left,
        &right,
        &EqualityOptions::ignoring(["skipped"])
    ));
    assert!(!is_equal_with(
        &left,
        &right,
        &EqualityOptions::ignoring(["kept"])
    ));
}

fn seeds() -> Vec<[u8; 32]> {
    (0u8..12).map(|n| [n.wrapping_mul(17).wrapping_add(3); 32]).collect()
}
