//! Enumreg Registry
//!
//! Named, ordered, uniquely valued symbolic constants. Enum types are defined
//! through `EnumRegistryBuilder` and frozen into an immutable `EnumRegistry`,
//! which owns every member. Lookups hand out borrowed `EnumType` and `Member`
//! views whose equality is identity.

mod builder;
mod enum_type;
mod member;
mod persist;
mod registry;
mod types;

pub use builder::{make_enum, EnumRegistryBuilder, EnumTypeBuilder};
pub use enum_type::{EnumType, Members};
pub use member::Member;
pub use persist::{MemberKey, MemberSeed};
pub use registry::EnumRegistry;
pub use types::*;

pub use enumreg_core::{CompareOp, EnumError, EnumResult, EnumTypeId, LookupKey, MemberId};
