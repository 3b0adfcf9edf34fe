//! Borrowed view of one enum member.

use crate::{EnumRegistry, EnumType, MemberDef, MemberKey};
use enumreg_core::{CompareOp, EnumError, EnumResult, MemberId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A member handle. Cheap to copy; the member itself lives in the registry.
///
/// Equality and hashing follow identity: two handles are equal only when they
/// refer to the very same member, never because they share a value. Members
/// have no ordering, so there is no `PartialOrd`; the explicit comparison
/// methods always fail.
#[derive(Clone, Copy)]
pub struct Member<'r> {
    registry: &'r EnumRegistry,
    def: &'r MemberDef,
}

impl<'r> Member<'r> {
    pub(crate) fn new(registry: &'r EnumRegistry, def: &'r MemberDef) -> Self {
        Self { registry, def }
    }

    pub fn id(&self) -> MemberId {
        self.def.id
    }

    /// The integer value, exactly as declared.
    pub fn value(&self) -> i64 {
        self.def.value
    }

    pub fn name(&self) -> &'r str {
        &self.def.name
    }

    /// The type that declared this member.
    pub fn enum_type(&self) -> EnumType<'r> {
        EnumType::new(self.registry, self.registry.type_def(self.def.enum_type))
    }

    pub fn type_name(&self) -> &'r str {
        &self.registry.type_def(self.def.enum_type).name
    }

    pub fn def(&self) -> &'r MemberDef {
        self.def
    }

    /// Stable (type name, member name) identity for persistence.
    pub fn key(&self) -> MemberKey {
        MemberKey::new(self.type_name(), self.name())
    }

    /// Ordering comparison. Always fails: members are not ordered.
    pub fn compare(&self, _other: &Member<'_>, op: CompareOp) -> EnumResult<bool> {
        Err(EnumError::OrderingUnsupported { op })
    }

    pub fn lt(&self, other: &Member<'_>) -> EnumResult<bool> {
        self.compare(other, CompareOp::Lt)
    }

    pub fn gt(&self, other: &Member<'_>) -> EnumResult<bool> {
        self.compare(other, CompareOp::Gt)
    }

    pub fn le(&self, other: &Member<'_>) -> EnumResult<bool> {
        self.compare(other, CompareOp::Le)
    }

    pub fn ge(&self, other: &Member<'_>) -> EnumResult<bool> {
        self.compare(other, CompareOp::Ge)
    }
}

impl PartialEq for Member<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def)
    }
}

impl Eq for Member<'_> {}

impl Hash for Member<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.def, state);
    }
}

impl fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name(), self.def.name)
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<EnumValue: {}.{} [int={}]>",
            self.type_name(),
            self.def.name,
            self.def.value
        )
    }
}

impl From<Member<'_>> for i64 {
    fn from(member: Member<'_>) -> Self {
        member.value()
    }
}

impl From<&Member<'_>> for i64 {
    fn from(member: &Member<'_>) -> Self {
        member.value()
    }
}
