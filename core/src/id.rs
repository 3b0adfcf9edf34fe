//! Arena identifiers for enum types and members.
//!
//! Identifiers are 32-bit indices that are:
//! - Unique within the registry that allocated them
//! - Immutable once assigned
//! - Opaque to external users

use std::fmt;

/// Identifier for an enum type in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumTypeId(pub u32);

impl EnumTypeId {
    /// Create a new EnumTypeId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Position of this type in the registry arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EnumTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Identifier for a single member. Allocated once per (type, name) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub u32);

impl MemberId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}
