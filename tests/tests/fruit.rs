//! Fruit integration tests.
//!
//! Behaviour of a single name-list enum type: value assignment, unified
//! lookup, iteration order, rendering, conversion, and equality.

use enumreg_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_make_enum_values() {
    let registry = fruit();

    let values: Vec<(String, i64)> = registry
        .enum_type("Fruit")
        .unwrap()
        .iter()
        .map(|m| (m.name().to_string(), m.value()))
        .collect();

    assert_eq!(
        values,
        vec![
            ("kiwi".to_string(), 1),
            ("banana".to_string(), 2),
            ("tomato".to_string(), 3),
        ]
    );
}

#[test]
fn test_lookup_by_value_and_name_is_same_instance() {
    let registry = fruit();
    let fruit = registry.enum_type("Fruit").unwrap();

    for member in fruit.iter() {
        let by_value = fruit.get(member.value()).unwrap();
        let by_name = fruit.get(member.name()).unwrap();
        assert!(std::ptr::eq(by_value.def(), member.def()));
        assert!(std::ptr::eq(by_name.def(), member.def()));
    }

    let banana = fruit.by_name("banana").unwrap();
    assert_eq!(fruit.get(2).unwrap(), banana);
    assert_eq!(fruit.get("banana").unwrap(), banana);
    assert_eq!(fruit.get(LookupKey::Value(2)).unwrap(), banana);
}

#[test]
fn test_iteration_follows_value_not_declaration() {
    let mut builder = EnumRegistryBuilder::new();
    builder
        .add_enum("Fruit")
        .member("banana", 2)
        .member("kiwi", 1)
        .member("tomato", 3)
        .done()
        .unwrap();
    let registry = builder.build();

    assert_eq!(names(&registry, "Fruit"), vec!["kiwi", "banana", "tomato"]);
}

#[test]
fn test_list_of_type_matches_members() {
    let registry = fruit();
    let fruit = registry.enum_type("Fruit").unwrap();

    let listed: Vec<Member<'_>> = fruit.into_iter().collect();

    assert_eq!(
        listed,
        vec![
            fruit.get("kiwi").unwrap(),
            fruit.get("banana").unwrap(),
            fruit.get("tomato").unwrap(),
        ]
    );
}

#[test]
fn test_negative_and_sparse_values() {
    let mut builder = EnumRegistryBuilder::new();
    builder
        .add_enum("Offset")
        .members([("far", 1000), ("back", -5), ("zero", 0)])
        .done()
        .unwrap();
    let registry = builder.build();
    let offset = registry.enum_type("Offset").unwrap();

    assert_eq!(names(&registry, "Offset"), vec!["back", "zero", "far"]);
    assert_eq!(i64::from(offset.get(-5).unwrap()), -5);
    assert_eq!(offset.to_string(), "<Offset {back: -5, zero: 0, far: 1000}>");
}

#[test]
fn test_conversions() {
    let registry = fruit();

    for member in registry.enum_type("Fruit").unwrap() {
        assert_eq!(i64::from(&member), member.value());
        assert_eq!(member.to_string(), format!("Fruit.{}", member.name()));
    }
}

#[test]
fn test_render_type() {
    let registry = fruit();

    assert_eq!(
        registry.enum_type("Fruit").unwrap().to_string(),
        "<Fruit {kiwi: 1, banana: 2, tomato: 3}>"
    );
}

#[test]
fn test_missing_members() {
    let registry = fruit();
    let fruit = registry.enum_type("Fruit").unwrap();

    let by_value = fruit.get(99).unwrap_err();
    let by_name = fruit.get("durian").unwrap_err();

    assert!(by_value.is_lookup());
    assert!(by_name.is_lookup());
    assert_eq!(by_value.to_string(), "No member with value 99 in Fruit");
}

#[test]
fn test_duplicate_values_always_fail() {
    for (first, second) in [("a", "b"), ("same", "other"), ("x", "y")] {
        let mut builder = EnumRegistryBuilder::new();
        let result = builder
            .add_enum("Dup")
            .member(first, 7)
            .member(second, 7)
            .done();
        assert!(matches!(
            result,
            Err(EnumError::DuplicateValue { value: 7, .. })
        ));
    }
}

#[test]
fn test_ordering_always_fails() {
    let registry = fruit();
    let fruit = registry.enum_type("Fruit").unwrap();
    let kiwi = fruit.get("kiwi").unwrap();
    let tomato = fruit.get("tomato").unwrap();

    for op in [CompareOp::Lt, CompareOp::Gt, CompareOp::Le, CompareOp::Ge] {
        assert_eq!(
            kiwi.compare(&tomato, op),
            Err(EnumError::OrderingUnsupported { op })
        );
    }
    assert!(kiwi == fruit.get(1).unwrap());
    assert!(kiwi != tomato);
}

#[test]
fn test_name_list_tokens_are_members_verbatim() {
    let registry = make_enum("Fruit", "kiwi-fruit banana").unwrap();
    let fruit = registry.enum_type("Fruit").unwrap();

    assert_eq!(names(&registry, "Fruit"), vec!["kiwi-fruit", "banana"]);
    assert_eq!(fruit.get("kiwi-fruit").unwrap(), fruit.get(1).unwrap());
    assert_eq!(fruit.to_string(), "<Fruit {kiwi-fruit: 1, banana: 2}>");
}

#[test]
fn test_name_list_skips_reserved_tokens() {
    let registry = make_enum("Fruit", "__init__ kiwi").unwrap();

    assert_eq!(names(&registry, "Fruit"), vec!["kiwi"]);
    assert_eq!(
        registry.enum_type("Fruit").unwrap().to_string(),
        "<Fruit {kiwi: 2}>"
    );
}

#[test]
#[should_panic(expected = "enum type")]
fn test_names_of_unknown_type_panics() {
    let registry = fruit();

    names(&registry, "Fruits");
}
