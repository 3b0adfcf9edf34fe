//! Borrowed view of one enum type.

use crate::{EnumRegistry, EnumTypeDef, Member};
use enumreg_core::{EnumError, EnumResult, EnumTypeId, LookupKey, MemberId};
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between rendered `name: value` pairs.
const COMMASPACE: &str = ", ";

/// An enum type borrowed from its registry.
///
/// Equality is type identity: two views are equal only when they point at the
/// same definition in the same registry.
#[derive(Clone, Copy)]
pub struct EnumType<'r> {
    registry: &'r EnumRegistry,
    def: &'r EnumTypeDef,
}

impl<'r> EnumType<'r> {
    pub(crate) fn new(registry: &'r EnumRegistry, def: &'r EnumTypeDef) -> Self {
        Self { registry, def }
    }

    pub fn id(&self) -> EnumTypeId {
        self.def.id
    }

    pub fn name(&self) -> &'r str {
        &self.def.name
    }

    /// The underlying definition.
    pub fn def(&self) -> &'r EnumTypeDef {
        self.def
    }

    pub fn registry(&self) -> &'r EnumRegistry {
        self.registry
    }

    /// Direct base types, in declaration order.
    pub fn bases(&self) -> impl Iterator<Item = EnumType<'r>> + 'r {
        let registry = self.registry;
        self.def
            .parent_ids
            .iter()
            .map(move |&id| EnumType::new(registry, registry.type_def(id)))
    }

    /// Check whether this type is `other` or derives from it.
    pub fn is_subtype_of(&self, other: EnumType<'_>) -> bool {
        std::ptr::eq(self.registry, other.registry)
            && self.registry.is_subtype(self.id(), other.id())
    }

    /// Get the member with this integer value, own or inherited.
    pub fn by_value(&self, value: i64) -> EnumResult<Member<'r>> {
        self.def
            .member_by_value(value)
            .map(|id| self.member(id))
            .ok_or_else(|| EnumError::NoSuchValue {
                enum_type: self.def.name.clone(),
                value,
            })
    }

    /// Get the member bound to this name, own or inherited.
    pub fn by_name(&self, name: &str) -> EnumResult<Member<'r>> {
        self.def
            .member_by_name(name)
            .map(|id| self.member(id))
            .ok_or_else(|| EnumError::NoSuchName {
                enum_type: self.def.name.clone(),
                name: name.to_string(),
            })
    }

    /// Unified lookup: accepts an integer value or a member name.
    pub fn get(&self, key: impl Into<LookupKey>) -> EnumResult<Member<'r>> {
        match key.into() {
            LookupKey::Value(value) => self.by_value(value),
            LookupKey::Name(name) => self.by_name(&name),
        }
    }

    pub fn contains(&self, key: impl Into<LookupKey>) -> bool {
        match key.into() {
            LookupKey::Value(value) => self.def.member_by_value(value).is_some(),
            LookupKey::Name(name) => self.def.member_by_name(&name).is_some(),
        }
    }

    /// Members sorted by ascending value. Each call starts a fresh iterator.
    pub fn iter(&self) -> Members<'r> {
        Members {
            registry: self.registry,
            inner: self.def.value_table().values(),
        }
    }

    /// Members declared by this type itself, in declaration order.
    pub fn own_members(&self) -> impl Iterator<Item = Member<'r>> + 'r {
        let registry = self.registry;
        self.def
            .own_members
            .iter()
            .map(move |&id| Member::new(registry, registry.member_def(id)))
    }

    pub fn len(&self) -> usize {
        self.def.member_count()
    }

    pub fn is_empty(&self) -> bool {
        self.def.member_count() == 0
    }

    /// Member names sorted by ascending value.
    pub fn member_names(&self) -> impl Iterator<Item = &'r str> + 'r {
        self.iter().map(|m| m.name())
    }

    /// The merged value-to-name table, own and inherited.
    pub fn values(&self) -> BTreeMap<i64, &'r str> {
        self.iter().map(|m| (m.value(), m.name())).collect()
    }

    fn member(&self, id: MemberId) -> Member<'r> {
        Member::new(self.registry, self.registry.member_def(id))
    }
}

impl PartialEq for EnumType<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def)
    }
}

impl Eq for EnumType<'_> {}

impl Hash for EnumType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.def, state);
    }
}

impl fmt::Display for EnumType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .iter()
            .map(|m| format!("{}: {}", m.name(), m.value()))
            .collect();
        write!(f, "<{} {{{}}}>", self.def.name, pairs.join(COMMASPACE))
    }
}

impl fmt::Debug for EnumType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<'r> IntoIterator for EnumType<'r> {
    type Item = Member<'r>;
    type IntoIter = Members<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'r> IntoIterator for &EnumType<'r> {
    type Item = Member<'r>;
    type IntoIter = Members<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an enum type, ascending by value.
#[derive(Clone)]
pub struct Members<'r> {
    registry: &'r EnumRegistry,
    inner: btree_map::Values<'r, i64, MemberId>,
}

impl<'r> Iterator for Members<'r> {
    type Item = Member<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.inner.next()?;
        Some(Member::new(self.registry, self.registry.member_def(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = *self.inner.next_back()?;
        Some(Member::new(self.registry, self.registry.member_def(id)))
    }
}

impl ExactSizeIterator for Members<'_> {}
