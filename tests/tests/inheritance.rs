//! Inheritance integration tests.
//!
//! Color <- MoreColor <- OtherColor: inherited members are visible in
//! subtypes, keep their declaring type, and block value reuse.

use enumreg_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_subtype_sees_all_ancestors() {
    let registry = colors();

    assert_eq!(
        names(&registry, "OtherColor"),
        vec!["red", "green", "blue", "pink", "cyan", "magenta", "yellow"]
    );
    assert_eq!(names(&registry, "Color"), vec!["red", "green", "blue"]);
}

#[test]
fn test_inherited_member_is_shared() {
    let registry = colors();
    let color = registry.enum_type("Color").unwrap();
    let other = registry.enum_type("OtherColor").unwrap();

    let red = other.get(1).unwrap();

    assert_eq!(red, color.get("red").unwrap());
    assert_eq!(red.to_string(), "Color.red");
    assert_eq!(red.enum_type(), color);
    assert_eq!(
        other.to_string(),
        "<OtherColor {red: 1, green: 2, blue: 3, pink: 4, cyan: 5, magenta: 6, yellow: 7}>"
    );
}

#[test]
fn test_subtype_value_collision() {
    let mut builder = EnumRegistryBuilder::new();
    builder.make_enum("Color", "red green blue").unwrap();
    builder
        .add_enum("MoreColor")
        .extends("Color")
        .member("pink", 4)
        .done()
        .unwrap();

    // value 2 is green, two levels up
    let result = builder
        .add_enum("OtherColor")
        .extends("MoreColor")
        .member("magenta", 2)
        .done();

    assert!(matches!(
        result,
        Err(EnumError::DuplicateValue { value: 2, .. })
    ));
    assert!(builder.get_enum_id("OtherColor").is_none());
}

#[test]
fn test_subtype_relationships() {
    let registry = colors();
    let color = registry.enum_type("Color").unwrap();
    let more = registry.enum_type("MoreColor").unwrap();
    let other = registry.enum_type("OtherColor").unwrap();

    assert!(other.is_subtype_of(color));
    assert!(other.is_subtype_of(more));
    assert!(!more.is_subtype_of(other));
    assert_eq!(registry.get_subtypes(color.id()).count(), 2);
}

#[test]
fn test_types_are_independent_of_other_registries() {
    let registry = fruit_and_colors();
    let standalone = make_enum("Fruit", "kiwi banana tomato").unwrap();

    let shared = registry.lookup("Fruit", "kiwi").unwrap();
    let alone = standalone.lookup("Fruit", "kiwi").unwrap();

    assert_ne!(shared, alone);
    assert_eq!(shared.to_string(), alone.to_string());
    assert!(!registry
        .enum_type("Fruit")
        .unwrap()
        .is_subtype_of(standalone.enum_type("Fruit").unwrap()));
}
