//! Identity-preserving persistence of member references.
//!
//! A member is persisted as its (type name, member name) key. Reading it back
//! goes through the registry's unified lookup, so the result is the canonical
//! member already owned by the registry and compares equal to the original.

use crate::{EnumRegistry, Member};
use enumreg_core::messages::REASON_MEMBER_KEY;
use enumreg_core::EnumError;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stable reference to a member, independent of any registry instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberKey {
    /// Name of the type that declared the member.
    pub enum_type: String,
    /// Member name.
    pub member: String,
}

impl MemberKey {
    pub fn new(enum_type: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            enum_type: enum_type.into(),
            member: member.into(),
        }
    }
}

impl fmt::Display for MemberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.enum_type, self.member)
    }
}

/// Parses the `Type.member` form produced by `Display`.
impl FromStr for MemberKey {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((enum_type, member)) if !enum_type.is_empty() && !member.is_empty() => {
                Ok(MemberKey::new(enum_type, member))
            }
            _ => Err(EnumError::InvalidName {
                name: s.to_string(),
                reason: REASON_MEMBER_KEY,
            }),
        }
    }
}

impl Serialize for Member<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.key().serialize(serializer)
    }
}

/// Deserializes a persisted `MemberKey` straight into the canonical member of
/// a registry.
#[derive(Debug, Clone, Copy)]
pub struct MemberSeed<'r>(pub &'r EnumRegistry);

impl<'de, 'r> DeserializeSeed<'de> for MemberSeed<'r> {
    type Value = Member<'r>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let key = MemberKey::deserialize(deserializer)?;
        self.0.resolve(&key).map_err(de::Error::custom)
    }
}
