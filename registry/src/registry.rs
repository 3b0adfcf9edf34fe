//! The EnumRegistry - immutable enum lookup.

use crate::{AncestryIndex, EnumType, EnumTypeDef, Member, MemberDef, MemberKey};
use enumreg_core::{EnumError, EnumResult, EnumTypeId, LookupKey, MemberId};
use std::collections::HashMap;

/// The EnumRegistry owns every enum type and member defined through an
/// `EnumRegistryBuilder`. It is immutable after construction, so shared
/// references can be handed to any number of threads.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    /// Type definitions, indexed by ID.
    types: Vec<EnumTypeDef>,
    /// Type ID lookup by name.
    type_names: HashMap<String, EnumTypeId>,
    /// Member definitions, indexed by ID.
    members: Vec<MemberDef>,
    /// Precomputed ancestry relationships.
    ancestry: AncestryIndex,
}

impl EnumRegistry {
    /// Create a registry (use EnumRegistryBuilder for construction).
    pub(crate) fn new(
        types: Vec<EnumTypeDef>,
        type_names: HashMap<String, EnumTypeId>,
        members: Vec<MemberDef>,
        ancestry: AncestryIndex,
    ) -> Self {
        Self {
            types,
            type_names,
            members,
            ancestry,
        }
    }

    // ==================== Type Lookups ====================

    /// Get an enum type by name.
    pub fn enum_type(&self, name: &str) -> EnumResult<EnumType<'_>> {
        self.get_enum_type_by_name(name)
            .ok_or_else(|| EnumError::UnknownEnumType(name.to_string()))
    }

    /// Get an enum type by name, if defined.
    pub fn get_enum_type_by_name(&self, name: &str) -> Option<EnumType<'_>> {
        self.type_names
            .get(name)
            .and_then(|&id| self.enum_type_by_id(id))
    }

    /// Get an enum type by ID.
    pub fn enum_type_by_id(&self, id: EnumTypeId) -> Option<EnumType<'_>> {
        self.types.get(id.index()).map(|def| EnumType::new(self, def))
    }

    /// All enum types in definition order.
    pub fn enum_types(&self) -> impl Iterator<Item = EnumType<'_>> {
        self.types.iter().map(move |def| EnumType::new(self, def))
    }

    /// Get the number of enum types.
    pub fn enum_type_count(&self) -> usize {
        self.types.len()
    }

    // ==================== Member Lookups ====================

    /// Get a member by ID.
    pub fn member(&self, id: MemberId) -> Option<Member<'_>> {
        self.members.get(id.index()).map(|def| Member::new(self, def))
    }

    /// Get the number of members across all types (inherited ones count once).
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Unified lookup on a named type.
    pub fn lookup(&self, type_name: &str, key: impl Into<LookupKey>) -> EnumResult<Member<'_>> {
        self.enum_type(type_name)?.get(key)
    }

    /// Turn a persisted member key back into the canonical member.
    pub fn resolve(&self, key: &MemberKey) -> EnumResult<Member<'_>> {
        tracing::trace!(enum_type = %key.enum_type, member = %key.member, "resolving member key");
        self.lookup(&key.enum_type, key.member.as_str())
    }

    // ==================== Ancestry Queries ====================

    /// Check if `sub` is `super_type` or derives from it.
    pub fn is_subtype(&self, sub: EnumTypeId, super_type: EnumTypeId) -> bool {
        self.ancestry.is_subtype(sub, super_type)
    }

    /// Get all types deriving from a type (not including the type itself).
    pub fn get_subtypes(&self, type_id: EnumTypeId) -> impl Iterator<Item = EnumTypeId> + '_ {
        self.ancestry.get_subtypes(type_id)
    }

    /// Get all ancestors of a type (not including the type itself).
    pub fn get_supertypes(&self, type_id: EnumTypeId) -> impl Iterator<Item = EnumTypeId> + '_ {
        self.ancestry.get_supertypes(type_id)
    }

    // ==================== Arena Access ====================

    pub(crate) fn type_def(&self, id: EnumTypeId) -> &EnumTypeDef {
        &self.types[id.index()]
    }

    pub(crate) fn member_def(&self, id: MemberId) -> &MemberDef {
        &self.members[id.index()]
    }
}
