//! Persistence integration tests.
//!
//! Members are written as (type name, member name) keys and read back through
//! a registry, yielding the canonical instance.

use enumreg_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde::de::DeserializeSeed;
use serde::Serialize;

#[derive(Serialize)]
struct Basket<'r> {
    owner: &'static str,
    favourite: Member<'r>,
}

#[test]
fn test_round_trip_yields_same_instance() {
    let registry = fruit_and_colors();

    for enum_type in registry.enum_types() {
        for member in enum_type.iter() {
            let json = serde_json::to_string(&member).unwrap();
            let mut de = serde_json::Deserializer::from_str(&json);
            let restored = MemberSeed(&registry).deserialize(&mut de).unwrap();
            assert_eq!(restored, member);
        }
    }
}

#[test]
fn test_member_embedded_in_struct() {
    let registry = fruit();
    let basket = Basket {
        owner: "ada",
        favourite: registry.lookup("Fruit", 2).unwrap(),
    };

    let value = serde_json::to_value(&basket).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "owner": "ada",
            "favourite": {"enum_type": "Fruit", "member": "banana"}
        })
    );
    let key: MemberKey = serde_json::from_value(value["favourite"].clone()).unwrap();
    assert_eq!(registry.resolve(&key).unwrap(), basket.favourite);
}

#[test]
fn test_restore_into_rebuilt_registry() {
    // Persist with one registry, restore with a freshly built one
    let json = {
        let first = fruit();
        let tomato = first.lookup("Fruit", "tomato").unwrap();
        serde_json::to_string(&tomato).unwrap()
    };
    let second = fruit();

    let mut de = serde_json::Deserializer::from_str(&json);
    let restored = MemberSeed(&second).deserialize(&mut de).unwrap();

    assert_eq!(restored, second.lookup("Fruit", 3).unwrap());
}

#[test]
fn test_restore_fails_for_undefined_type() {
    let registry = fruit();
    let key = MemberKey::new("Color", "red");

    let err = registry.resolve(&key).unwrap_err();

    assert_eq!(err, EnumError::UnknownEnumType("Color".to_string()));
}

#[test]
fn test_key_text_form() {
    let registry = colors();
    let pink = registry.lookup("OtherColor", "pink").unwrap();

    let text = pink.key().to_string();
    let parsed: MemberKey = text.parse().unwrap();

    assert_eq!(text, "MoreColor.pink");
    assert_eq!(registry.resolve(&parsed).unwrap(), pink);
}
