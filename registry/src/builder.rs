//! EnumRegistryBuilder for constructing an immutable EnumRegistry.

use crate::{AncestryIndex, EnumRegistry, EnumTypeDef, MemberDef};
use enumreg_core::messages::{
    DETAIL_BASES_CONFLICT, DETAIL_INHERITED_VALUE, DETAIL_OWN_VALUE, REASON_EMPTY,
    REASON_SEPARATOR,
};
use enumreg_core::{EnumError, EnumResult, EnumTypeId, MemberId};
use std::collections::{BTreeMap, HashMap};

/// Builder for constructing an immutable EnumRegistry.
#[derive(Debug, Default)]
pub struct EnumRegistryBuilder {
    /// Types defined so far, indexed by `EnumTypeId`.
    types: Vec<EnumTypeDef>,
    /// Type name to ID mapping.
    type_names: HashMap<String, EnumTypeId>,
    /// Members defined so far, indexed by `MemberId`.
    members: Vec<MemberDef>,
    /// Ancestry of every defined type.
    ancestry: AncestryIndex,
}

impl EnumRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start defining an enum type.
    pub fn add_enum(&mut self, name: impl Into<String>) -> EnumTypeBuilder<'_> {
        EnumTypeBuilder {
            builder: self,
            name: name.into(),
            parent_names: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Define an enum type from a whitespace-separated list of member names.
    ///
    /// Values are assigned 1, 2, 3... in the order the names appear.
    pub fn make_enum(
        &mut self,
        name: impl Into<String>,
        value_names: &str,
    ) -> EnumResult<EnumTypeId> {
        self.add_enum(name).names(value_names).done()
    }

    /// Get the ID of an already defined type.
    pub fn get_enum_id(&self, name: &str) -> Option<EnumTypeId> {
        self.type_names.get(name).copied()
    }

    /// Number of types defined so far.
    pub fn enum_count(&self) -> usize {
        self.types.len()
    }

    /// Build the immutable EnumRegistry.
    pub fn build(self) -> EnumRegistry {
        tracing::debug!(
            types = self.types.len(),
            members = self.members.len(),
            "enum registry frozen"
        );
        EnumRegistry::new(self.types, self.type_names, self.members, self.ancestry)
    }
}

/// Builder for an enum type definition.
pub struct EnumTypeBuilder<'a> {
    builder: &'a mut EnumRegistryBuilder,
    name: String,
    parent_names: Vec<String>,
    members: Vec<(String, i64)>,
}

impl<'a> EnumTypeBuilder<'a> {
    /// Add a base type by name. Its members become visible in this type.
    pub fn extends(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_names.push(parent_name.into());
        self
    }

    /// Add a member with an explicit value.
    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// Add several members with explicit values.
    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.members
            .extend(members.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Add members from a whitespace-separated name list, valued 1, 2, 3...
    ///
    /// Every token counts towards the numbering, including `__name__` tokens
    /// that `done()` later skips.
    pub fn names(mut self, value_names: &str) -> Self {
        self.members.extend(
            value_names
                .split_whitespace()
                .zip(1i64..)
                .map(|(name, value)| (name.to_string(), value)),
        );
        self
    }

    /// Finish building this type.
    ///
    /// Nothing is recorded in the registry builder unless every check passes.
    /// Members named `__name__` are skipped without error.
    pub fn done(mut self) -> EnumResult<EnumTypeId> {
        validate_name(&self.name)?;
        self.members.retain(|(name, _)| {
            let reserved = is_reserved(name);
            if reserved {
                tracing::trace!(member = %name, "skipping reserved member name");
            }
            !reserved
        });
        if self.builder.type_names.contains_key(&self.name) {
            return Err(EnumError::DuplicateTypeName(self.name));
        }

        // Resolve base IDs
        let mut parent_ids = Vec::new();
        for parent_name in &self.parent_names {
            match self.builder.type_names.get(parent_name) {
                Some(&parent_id) => {
                    if !parent_ids.contains(&parent_id) {
                        parent_ids.push(parent_id);
                    }
                }
                None => return Err(EnumError::UnknownParentType(parent_name.clone())),
            }
        }

        let (mut by_value, mut by_name) = self.merge_inherited(&parent_ids)?;

        // Own members: validate everything before allocating IDs
        let type_id = EnumTypeId::new(self.builder.types.len() as u32);
        let first_member = self.builder.members.len() as u32;
        let mut own_values: HashMap<i64, &str> = HashMap::new();
        let mut own_names: HashMap<&str, i64> = HashMap::new();

        for (name, value) in &self.members {
            validate_name(name)?;
            if own_names.contains_key(name.as_str()) || by_name.contains_key(name) {
                return Err(EnumError::DuplicateMemberName {
                    enum_type: self.name.clone(),
                    name: name.clone(),
                });
            }
            if let Some(existing) = own_values.get(value) {
                return Err(EnumError::DuplicateValue {
                    value: *value,
                    existing: existing.to_string(),
                    name: name.clone(),
                    detail: DETAIL_OWN_VALUE,
                });
            }
            if let Some(existing) = by_value.get(value) {
                return Err(EnumError::DuplicateValue {
                    value: *value,
                    existing: self.builder.members[existing.index()].name.clone(),
                    name: name.clone(),
                    detail: DETAIL_INHERITED_VALUE,
                });
            }
            own_values.insert(*value, name);
            own_names.insert(name, *value);
        }

        // All checks passed; commit
        let mut own_members = Vec::with_capacity(self.members.len());
        for (offset, (name, value)) in self.members.into_iter().enumerate() {
            let member_id = MemberId::new(first_member + offset as u32);
            by_value.insert(value, member_id);
            by_name.insert(name.clone(), member_id);
            own_members.push(member_id);
            self.builder.members.push(MemberDef {
                id: member_id,
                enum_type: type_id,
                name,
                value,
            });
        }

        tracing::debug!(
            enum_type = %self.name,
            id = %type_id,
            own = own_members.len(),
            total = by_value.len(),
            "defined enum type"
        );

        let type_def = EnumTypeDef::new(
            type_id,
            self.name.clone(),
            parent_ids,
            own_members,
            by_value,
            by_name,
        );
        self.builder.ancestry.insert(type_id, &type_def.parent_ids);
        self.builder.type_names.insert(self.name, type_id);
        self.builder.types.push(type_def);

        Ok(type_id)
    }

    /// Merge the member tables of every base.
    ///
    /// A member reached through two bases (diamond) is the same member and is
    /// merged silently. Two different members claiming one value or one name
    /// is a conflict.
    #[allow(clippy::type_complexity)]
    fn merge_inherited(
        &self,
        parent_ids: &[EnumTypeId],
    ) -> EnumResult<(BTreeMap<i64, MemberId>, HashMap<String, MemberId>)> {
        let mut by_value: BTreeMap<i64, MemberId> = BTreeMap::new();
        let mut by_name: HashMap<String, MemberId> = HashMap::new();

        for parent_id in parent_ids {
            let parent = &self.builder.types[parent_id.index()];
            for (&value, &member_id) in parent.value_table() {
                let member = &self.builder.members[member_id.index()];
                match by_value.get(&value) {
                    Some(&existing) if existing != member_id => {
                        return Err(EnumError::DuplicateValue {
                            value,
                            existing: self.builder.members[existing.index()].name.clone(),
                            name: member.name.clone(),
                            detail: DETAIL_BASES_CONFLICT,
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_value.insert(value, member_id);
                    }
                }
                match by_name.get(&member.name) {
                    Some(&existing) if existing != member_id => {
                        return Err(EnumError::DuplicateMemberName {
                            enum_type: self.name.clone(),
                            name: member.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_name.insert(member.name.clone(), member_id);
                    }
                }
            }
        }

        Ok((by_value, by_name))
    }
}

/// Build a registry holding a single enum type defined from a name list.
///
/// `make_enum("Fruit", "kiwi banana tomato")` yields kiwi=1, banana=2, tomato=3.
pub fn make_enum(name: impl Into<String>, value_names: &str) -> EnumResult<EnumRegistry> {
    let mut builder = EnumRegistryBuilder::new();
    builder.make_enum(name, value_names)?;
    Ok(builder.build())
}

fn is_reserved(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

fn validate_name(name: &str) -> EnumResult<()> {
    let reason = if name.is_empty() {
        REASON_EMPTY
    } else if name.contains(|c: char| c.is_whitespace() || c == '.') {
        REASON_SEPARATOR
    } else {
        return Ok(());
    };
    Err(EnumError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
