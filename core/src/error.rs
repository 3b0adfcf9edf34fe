//! Common error types for enumreg.

use crate::CompareOp;
use thiserror::Error;

/// Errors raised while defining enum types or looking up their members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// Two members, own or inherited, share an integer value.
    #[error("Multiple enum values: {value} ({name} conflicts with {existing}, {detail})")]
    DuplicateValue {
        value: i64,
        existing: String,
        name: String,
        detail: &'static str,
    },

    /// A member name is declared twice or shadows an inherited member.
    #[error("Duplicate member name in {enum_type}: {name}")]
    DuplicateMemberName { enum_type: String, name: String },

    /// An enum type with this name already exists.
    #[error("Duplicate enum type name: {0}")]
    DuplicateTypeName(String),

    /// A base type was referenced before being defined.
    #[error("Unknown base enum type: {0}")]
    UnknownParentType(String),

    /// A type or member name is not usable.
    #[error("Invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// No member with this integer value.
    #[error("No member with value {value} in {enum_type}")]
    NoSuchValue { enum_type: String, value: i64 },

    /// No member with this name.
    #[error("No member named {name:?} in {enum_type}")]
    NoSuchName { enum_type: String, name: String },

    /// No enum type with this name.
    #[error("Unknown enum type: {0}")]
    UnknownEnumType(String),

    /// Members have no order; only equality is defined.
    #[error("Ordering comparison '{op}' is not implemented for enum members")]
    OrderingUnsupported { op: CompareOp },
}

impl EnumError {
    /// Returns true for the "no such member or type" family of errors.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            EnumError::NoSuchValue { .. }
                | EnumError::NoSuchName { .. }
                | EnumError::UnknownEnumType(_)
        )
    }
}

/// Result type for enum operations.
pub type EnumResult<T> = Result<T, EnumError>;
