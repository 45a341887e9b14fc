//! Property tests for the parse/serialize round trip.

use std::collections::BTreeMap;

use proptest::prelude::*;

use jsonvet::{parse, serialize, Value};

/// Arbitrary trees without doubles, for exact equality checks.
fn value_without_doubles() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "\\PC*".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("\\PC*", inner, 0..6)
                .prop_map(|members: BTreeMap<String, Value>| Value::Object(members)),
        ]
    })
}

/// Every finite bit pattern, including subnormals and both zeros.
fn finite_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("finite", |d| d.is_finite())
}

proptest! {
    #[test]
    fn parse_inverts_serialize(value in value_without_doubles()) {
        let text = serialize(&value);
        let back = parse(text.as_bytes()).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn serialized_output_is_ascii(value in value_without_doubles()) {
        prop_assert!(serialize(&value).is_ascii());
    }

    #[test]
    fn finite_doubles_round_trip_exactly(d in finite_f64()) {
        let text = serialize(&Value::Double(d));
        let back = parse(text.as_bytes()).unwrap();
        match back {
            Value::Double(b) => prop_assert_eq!(b.to_bits(), d.to_bits(), "through {}", text),
            other => prop_assert!(false, "{} re-parsed as {:?}", text, other),
        }
    }

    #[test]
    fn doubles_never_reparse_as_integers(d in finite_f64()) {
        let text = serialize(&Value::Double(d));
        prop_assert!(parse(text.as_bytes()).unwrap().is_double(), "{}", text);
    }

    #[test]
    fn serializing_twice_is_stable(value in value_without_doubles()) {
        let once = serialize(&value);
        let back = parse(once.as_bytes()).unwrap();
        prop_assert_eq!(serialize(&back), once);
    }
}
