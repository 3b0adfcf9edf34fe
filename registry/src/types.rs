//! Enum definition types.

use enumreg_core::{EnumTypeId, MemberId};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A single enum member: one immutable (type, value, name) triple.
///
/// Exactly one `MemberDef` exists per (type, name) pair. Subtypes that inherit
/// a member refer to the same `MemberDef` through its `MemberId`.
#[derive(Debug)]
pub struct MemberDef {
    /// Unique identifier.
    pub id: MemberId,
    /// The type that declared this member.
    pub enum_type: EnumTypeId,
    /// Member name.
    pub name: String,
    /// Integer value.
    pub value: i64,
}

/// Enum type definition.
#[derive(Debug)]
pub struct EnumTypeDef {
    /// Unique identifier.
    pub id: EnumTypeId,
    /// Type name.
    pub name: String,
    /// Base type IDs, in declaration order.
    pub parent_ids: Vec<EnumTypeId>,
    /// Members declared by this type itself, in declaration order.
    pub own_members: Vec<MemberId>,
    /// Own and inherited members by value. Ordered, so iteration is ascending.
    by_value: BTreeMap<i64, MemberId>,
    /// Own and inherited members by name.
    by_name: HashMap<String, MemberId>,
}

impl EnumTypeDef {
    pub(crate) fn new(
        id: EnumTypeId,
        name: impl Into<String>,
        parent_ids: Vec<EnumTypeId>,
        own_members: Vec<MemberId>,
        by_value: BTreeMap<i64, MemberId>,
        by_name: HashMap<String, MemberId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent_ids,
            own_members,
            by_value,
            by_name,
        }
    }

    /// Get a member ID by integer value (own or inherited).
    pub fn member_by_value(&self, value: i64) -> Option<MemberId> {
        self.by_value.get(&value).copied()
    }

    /// Get a member ID by name (own or inherited).
    pub fn member_by_name(&self, name: &str) -> Option<MemberId> {
        self.by_name.get(name).copied()
    }

    /// All (value, member ID) pairs sorted by ascending value.
    pub fn value_table(&self) -> &BTreeMap<i64, MemberId> {
        &self.by_value
    }

    /// Number of members, own and inherited.
    pub fn member_count(&self) -> usize {
        self.by_value.len()
    }
}

/// Precomputed ancestry relationships.
///
/// Bases must be defined before the types that extend them, so the index is
/// filled one type at a time and can never contain a cycle.
#[derive(Debug, Default)]
pub struct AncestryIndex {
    /// For each type, the set of all its subtypes (transitive).
    subtypes: HashMap<EnumTypeId, HashSet<EnumTypeId>>,
    /// For each type, the set of all its supertypes (transitive).
    supertypes: HashMap<EnumTypeId, HashSet<EnumTypeId>>,
}

impl AncestryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new type with its direct bases.
    pub fn insert(&mut self, type_id: EnumTypeId, parent_ids: &[EnumTypeId]) {
        let mut supers = HashSet::new();
        for &parent_id in parent_ids {
            supers.insert(parent_id);
            if let Some(transitive) = self.supertypes.get(&parent_id) {
                supers.extend(transitive.iter().copied());
            }
        }

        for &super_id in &supers {
            self.subtypes.entry(super_id).or_default().insert(type_id);
        }
        self.subtypes.entry(type_id).or_default();
        self.supertypes.insert(type_id, supers);
    }

    /// Check if `sub` is `super_type` or one of its descendants.
    pub fn is_subtype(&self, sub: EnumTypeId, super_type: EnumTypeId) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(&sub)
            .map(|set| set.contains(&super_type))
            .unwrap_or(false)
    }

    /// Get all subtypes of a type (not including the type itself).
    pub fn get_subtypes(&self, type_id: EnumTypeId) -> impl Iterator<Item = EnumTypeId> + '_ {
        self.subtypes
            .get(&type_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get all supertypes of a type (not including the type itself).
    pub fn get_supertypes(&self, type_id: EnumTypeId) -> impl Iterator<Item = EnumTypeId> + '_ {
        self.supertypes
            .get(&type_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
